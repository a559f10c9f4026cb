/// Shared kernel: error types and the crate-wide Result alias
pub mod error;
mod result;

pub use result::Result;
