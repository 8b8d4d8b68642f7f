//! Terminal and CI presentation for the binary

pub mod ci;
pub mod error;
pub mod json;
