use super::RecordSchema;

/// A field as declared on a record type.
#[derive(Debug)]
pub struct FieldDef {
    /// Declared field name
    pub name: &'static str,

    /// Static type name of the field, last path segment only
    pub ty: &'static str,

    /// Key/value tags attached with `#[tag(...)]`
    pub tags: Vec<Tag>,

    /// Schema of the embedded record when the field is flattened into its parent.
    ///
    /// Set when the field's type name equals its declared name (`Inner: Inner`).
    pub embedded: Option<fn() -> &'static RecordSchema>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub key: &'static str,
    pub value: &'static str,
}

impl FieldDef {
    pub fn is_embedded(&self) -> bool {
        self.embedded.is_some()
    }

    /// Returns the value of the first tag with the given key.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value)
    }
}
