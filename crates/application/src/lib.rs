//! Application layer - Use cases and orchestration
//!
//! Contains the route planning use case, the route summarizer and the
//! single-deep action runner, plus the port definitions that the
//! infrastructure layer implements on top of the remote services.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
