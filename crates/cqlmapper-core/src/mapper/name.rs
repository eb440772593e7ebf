//! Built-in name converters.

/// Converts a type or field name to a table or column name.
pub type NameConverter = fn(&str) -> String;

/// Returns the name unchanged.
pub fn raw(name: &str) -> String {
    name.to_string()
}

/// Converts a camel case name to snake case.
///
/// The first character is lower-cased; every following upper-case character is
/// lower-cased and prefixed with `_`. Runs of capitals are split letter by
/// letter: `"ID"` becomes `"i_d"`.
pub fn underscore(name: &str) -> String {
    let mut chars = name.chars();
    let mut ret = String::with_capacity(name.len() + 4);

    if let Some(first) = chars.next() {
        ret.extend(first.to_lowercase());
    }

    for ch in chars {
        if ch.is_uppercase() {
            ret.push('_');
            ret.extend(ch.to_lowercase());
        } else {
            ret.push(ch);
        }
    }

    ret
}
