//! CLI command implementations

pub mod hash;
pub mod inspect;
pub mod json_output;
pub mod process;
