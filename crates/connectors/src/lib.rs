pub mod error;
pub mod payload;
pub mod sink;
pub mod source;
