/// How resolved table and column identifiers are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// Identifiers are used as resolved.
    #[default]
    Bare,

    /// Identifiers are wrapped in double quotes so the store takes them
    /// literally, preserving case.
    Double,
}

impl Quoting {
    pub fn apply(self, ident: &str) -> String {
        match self {
            Quoting::Bare => ident.to_string(),
            Quoting::Double => {
                let mut ret = String::with_capacity(ident.len() + 2);
                ret.push('"');
                for ch in ident.chars() {
                    if ch == '"' {
                        ret.push('"');
                    }
                    ret.push(ch);
                }
                ret.push('"');
                ret
            }
        }
    }
}
