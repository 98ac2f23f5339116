//! Shared error types for Bedrock Explorer

pub mod errors;

pub use errors::{AppError, AppResult};
