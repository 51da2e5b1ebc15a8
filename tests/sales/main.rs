mod checkout_flow;
mod health_check;
mod pix_settlement;
mod test_utils;
