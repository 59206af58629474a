//! Dataset representation and cell classification.

mod table;
pub mod value;

pub use table::{Dataset, Record};
pub use value::ValueClass;
