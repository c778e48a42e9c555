//! Runtime value and fact attribute types

pub mod attribute;
pub mod value;

pub use attribute::{FactAttribute, FactRegistry, FactType};
pub use value::Value;
