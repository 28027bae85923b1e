//! Small helpers shared by the data and controller layers.

pub mod json;
pub mod parse;
pub mod validate;
