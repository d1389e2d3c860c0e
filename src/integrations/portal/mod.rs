pub mod client;
pub mod credential_store;
pub mod record_store;
