// src/repositories/mod.rs
//
// Local persistence - trait-backed so tests can substitute fakes

pub mod credential_repository;

pub use credential_repository::{
    CredentialRepository, PersistedCredential, SqliteCredentialRepository,
};

#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
