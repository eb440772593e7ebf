mod cache;
use cache::ColumnCache;

mod introspect;

pub mod name;
pub use name::NameConverter;

mod quoting;
pub use quoting::Quoting;

/// Naming conventions used to map records to tables and columns.
///
/// A mapper is immutable once built and can be shared by reference across
/// threads. Resolved column lists are cached per record type.
pub struct Mapper {
    table_name_converter: NameConverter,
    column_name_converter: NameConverter,

    /// Tag key whose value overrides the converted column name
    column_tag: Option<String>,

    quoting: Quoting,

    cache: ColumnCache,
}

impl Mapper {
    pub fn new(
        table_name_converter: NameConverter,
        column_name_converter: NameConverter,
        column_tag: Option<&str>,
    ) -> Mapper {
        Mapper {
            table_name_converter,
            column_name_converter,
            column_tag: column_tag.map(String::from),
            quoting: Quoting::Bare,
            cache: ColumnCache::default(),
        }
    }

    /// Keeps type and field names as declared; column names can be overridden
    /// with `#[tag(cqlm = "...")]`.
    pub fn raw() -> Mapper {
        Mapper::new(name::raw, name::raw, Some("cqlm"))
    }

    /// Converts type and field names to snake case. Tags are ignored.
    pub fn underscore() -> Mapper {
        Mapper::new(name::underscore, name::underscore, None)
    }

    /// Wraps every resolved identifier in double quotes.
    pub fn quoted(self) -> Mapper {
        self.with_quoting(Quoting::Double)
    }

    pub fn with_quoting(mut self, quoting: Quoting) -> Mapper {
        if self.quoting != quoting {
            self.quoting = quoting;
            self.cache = ColumnCache::default();
        }
        self
    }

    pub fn table_name_converter(&self) -> NameConverter {
        self.table_name_converter
    }

    pub fn column_name_converter(&self) -> NameConverter {
        self.column_name_converter
    }

    pub fn column_tag(&self) -> Option<&str> {
        self.column_tag.as_deref()
    }

    pub fn quoting(&self) -> Quoting {
        self.quoting
    }
}

impl core::fmt::Debug for Mapper {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mapper")
            .field("column_tag", &self.column_tag)
            .field("quoting", &self.quoting)
            .finish_non_exhaustive()
    }
}
