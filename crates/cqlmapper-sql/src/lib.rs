pub mod serializer;
pub use serializer::{Query, Serializer};

pub mod stmt;
pub use stmt::Statement;
