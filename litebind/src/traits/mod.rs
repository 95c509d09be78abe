//! Core traits for litebind

mod row_decoder;
mod to_value;

pub use row_decoder::RowDecoder;
pub use to_value::ToValue;
