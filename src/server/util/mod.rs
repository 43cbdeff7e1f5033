//! Small parsing helpers shared by the service and model layers.

pub mod image;
pub mod parse;
pub mod plate;
