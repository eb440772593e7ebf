use super::{ErrorSet, Tag};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Declared name, without any `r#` prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Last path segment of the field type, or the type as written for
    /// non-path types
    pub(crate) ty_name: String,

    /// True when the field is flattened into the containing record
    pub(crate) embedded: bool,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Key/value pairs from `#[tag(...)]`, in declaration order
    pub(crate) tags: Vec<Tag>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("tag") {
                match Tag::from_ast(attr) {
                    Ok(tags) => {
                        for tag in tags {
                            if attrs.tags.iter().any(|existing| existing.key == tag.key) {
                                errs.push(syn::Error::new_spanned(
                                    &tag.value,
                                    format!("duplicate tag `{}`", tag.key),
                                ));
                            } else {
                                attrs.tags.push(tag);
                            }
                        }
                    }
                    Err(err) => errs.push(err),
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let name = ident.unraw().to_string();
        let (ty_name, path_ident) = type_name(&field.ty);

        // A field named after its own type, e.g. `Inner: Inner`, composes the
        // type by embedding: its fields become columns of the containing record.
        let embedded = path_ident.is_some_and(|ty_ident| ty_ident.unraw() == ident.unraw());

        if embedded && SCALAR_TYPES.contains(&ty_name.as_str()) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                format!(
                    "field `{name}` is named after its type, which embeds it, but `{ty_name}` is not a record; rename the field"
                ),
            ));
        }

        Ok(Self {
            attrs,
            ident: ident.clone(),
            name,
            ty: field.ty.clone(),
            ty_name,
            embedded,
        })
    }
}

/// Column types that can never be embedded records.
const SCALAR_TYPES: &[&str] = &[
    "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "str", "u8",
    "u16", "u32", "u64", "u128", "usize", "String", "Uuid",
];

/// Returns the static type name and, for plain paths without generic
/// arguments, the last segment identifier.
fn type_name(ty: &syn::Type) -> (String, Option<&syn::Ident>) {
    match ty {
        syn::Type::Path(syn::TypePath { qself: None, path }) => match path.segments.last() {
            Some(segment) => {
                let ident = match segment.arguments {
                    syn::PathArguments::None => Some(&segment.ident),
                    _ => None,
                };
                (segment.ident.unraw().to_string(), ident)
            }
            None => (quote::quote!(#ty).to_string(), None),
        },
        syn::Type::Group(group) => type_name(&group.elem),
        syn::Type::Paren(paren) => type_name(&paren.elem),
        _ => (quote::quote!(#ty).to_string(), None),
    }
}
