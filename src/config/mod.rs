//! JSON configs for the command-line tools.

pub mod overlay;
