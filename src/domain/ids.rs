use crate::{infra::ClientError, uuid_id};

uuid_id!(SaleId);
uuid_id!(ProductId);
uuid_id!(CustomerId);
uuid_id!(OrderId);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Uuid {0} is not compatible. Version 7 Uuid is required.")]
pub struct UuidNotCompatible(pub uuid::Uuid);

impl From<UuidNotCompatible> for ClientError {
    fn from(value: UuidNotCompatible) -> Self {
        ClientError::Payload(value.to_string())
    }
}
