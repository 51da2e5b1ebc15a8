//! PIX "copia e cola" payload generation.
//!
//! The payload mimics the EMV field layout of a real static PIX code closely
//! enough to be displayed and copied, but the trailing checksum is a random
//! token, not a CRC16. It must never be treated as wire-compatible with the
//! banking rails.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::infra::StoreSettings;

fn field(id: &str, value: &str) -> String {
    format!("{id}{:02}{value}", value.len())
}

pub fn copia_e_cola(store: &StoreSettings, amount: Decimal) -> String {
    let amount = format!("{:.2}", amount);
    let merchant_account = field("00", "BR.GOV.BCB.PIX") + &field("01", &store.pix_key);

    let mut payload = String::new();
    payload.push_str(&field("00", "01")); // payload format indicator
    payload.push_str(&field("26", &merchant_account));
    payload.push_str(&field("52", "0000")); // merchant category code
    payload.push_str(&field("53", "986")); // currency: BRL
    payload.push_str(&field("54", &amount));
    payload.push_str(&field("58", "BR"));
    payload.push_str(&field("59", &store.merchant_name));
    payload.push_str(&field("60", &store.merchant_city));
    payload.push_str(&field("62", &field("05", "***")));

    // Stand-in for the CRC16 suffix of a real payload.
    let token = Uuid::new_v4().simple().to_string().to_uppercase();
    payload.push_str("6304");
    payload.push_str(&token[..8]);
    payload
}

//-------------------------- Tests -------------------------------
