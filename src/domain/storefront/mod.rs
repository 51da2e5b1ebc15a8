mod whatsapp;

pub use whatsapp::{
    WhatsAppLinkResponse, order_handoff_link, product_inquiry_link, whatsapp_link_endpoint,
};
