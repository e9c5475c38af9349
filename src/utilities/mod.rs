// Utilities module
// Color parsing and text fitting helpers

pub mod helpers;

pub use helpers::*;
