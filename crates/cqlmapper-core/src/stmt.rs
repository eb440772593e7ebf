mod primitive;
pub use primitive::{Primitive, Slot};

mod value;
pub use value::Value;
