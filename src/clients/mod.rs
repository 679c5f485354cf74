pub mod email;
pub mod health;
pub mod identity;
pub mod whatsapp;
