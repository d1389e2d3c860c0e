pub mod entity;
pub mod invariants;

pub use entity::{Application, ApplicationStatus};
pub use invariants::validate_application;
