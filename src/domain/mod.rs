//! Domain layer - entities, ports and errors shared by every other layer.

pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::*;
pub use errors::DomainError;
