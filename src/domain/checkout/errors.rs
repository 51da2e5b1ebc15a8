#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Cannot continue. The cart is empty.")]
    EmptyCart,
    #[error("Cannot continue. No customer has been selected.")]
    NoCustomerSelected,
    #[error("Cannot continue. No payment method has been chosen.")]
    NoPaymentMethodSelected,
    #[error("Sale is already at the confirmation step. Confirm or go back.")]
    AlreadyAtConfirmation,
    #[error("Sale is not at the confirmation step.")]
    NotReadyToConfirm,
    #[error("Sale has been completed and can no longer be altered.")]
    SaleCompleted,
}
