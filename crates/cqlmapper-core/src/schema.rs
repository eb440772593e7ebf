mod field;
pub use field::{FieldDef, Tag};

mod record;
pub use record::{FieldMut, FieldRef, Record, RecordSchema};

mod target;
pub use target::Target;
