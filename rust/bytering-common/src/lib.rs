//! Core definitions (error taxonomy and result handling), relied upon by the bytering crates.

pub mod error;
pub mod result;

pub use result::Result;
