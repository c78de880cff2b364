//! # Domain Value Objects
//!
//! - **Birthdate**: calendar date parsed from the `dd.mm.yyyy` input format

mod birthdate;

pub use birthdate::*;
