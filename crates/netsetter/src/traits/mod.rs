//! Core traits for the setters
//!
//! - [`Setter`]: Parse a parameter value and store it in caller-owned storage

pub mod setter;

pub use setter::{Setter, ValueReq, nil_value_message};
