// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the services
// - It provides the boundary between UI and Domain (Services)
// - It translates between DTOs and domain entities

pub mod dto;
pub mod state;

pub use dto::*;
pub use state::AppState;
