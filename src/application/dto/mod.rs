//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{ContactRequest, ListContactsQuery, SearchContactsQuery, MAX_PAGE_LIMIT};
pub use response::ContactResponse;
