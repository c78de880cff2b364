//! # Domain Services
//!
//! - **BirthdayWindow**: which (month, day) pairs count as an upcoming birthday

mod birthday_window;

pub use birthday_window::*;
