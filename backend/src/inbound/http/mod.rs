//! HTTP inbound adapter exposing the students REST endpoints.

pub mod error;
pub mod health;
pub mod payload;
pub mod response;
pub mod schemas;
pub mod state;
pub mod students;

pub use error::{ApiError, ApiResult, ErrorBody};
