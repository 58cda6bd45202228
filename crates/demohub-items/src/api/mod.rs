//! Record CRUD under `/api/data`.

pub mod data;
pub mod error;

pub use error::ApiError;
