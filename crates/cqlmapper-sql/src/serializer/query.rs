use std::fmt;

/// Query text with positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    params: usize,
}

impl Query {
    pub(crate) fn new(text: String, params: usize) -> Query {
        Query { text, params }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of `?` placeholders in the text.
    pub fn params(&self) -> usize {
        self.params
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<str> for Query {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Query {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
