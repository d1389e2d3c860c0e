// src/integrations/mod.rs
//
// Remote portal integration

pub mod portal;

pub use portal::client::PortalClient;
pub use portal::credential_store::{CredentialStore, HttpCredentialStore, LoginGrant};
pub use portal::record_store::{
    ApplicationReceipt, HttpRecordStore, PortalStats, RecordStore,
};

#[cfg(test)]
pub use portal::credential_store::MockCredentialStore;
#[cfg(test)]
pub use portal::record_store::MockRecordStore;
