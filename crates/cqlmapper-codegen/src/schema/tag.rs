use syn::{ext::IdentExt, punctuated::Punctuated};

/// One `key = "value"` entry of a `#[tag(...)]` attribute.
#[derive(Debug)]
pub(crate) struct Tag {
    pub(crate) key: String,
    pub(crate) value: syn::LitStr,
}

impl Tag {
    /// Parses every entry of a `#[tag(...)]` attribute.
    ///
    /// Allowed syntax:
    ///
    /// #[tag(cqlm = "id")]
    /// #[tag(cqlm = "id", json = "identifier")]
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Vec<Tag>> {
        let tags = attr.parse_args_with(Punctuated::<Tag, syn::Token![,]>::parse_terminated)?;

        if tags.is_empty() {
            return Err(syn::Error::new_spanned(
                attr,
                "expected `tag(key = \"value\")`",
            ));
        }

        Ok(tags.into_iter().collect())
    }
}

impl syn::parse::Parse for Tag {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        // Keys are free-form, keywords such as `type` are allowed
        let key = syn::Ident::parse_any(input)?;
        let _eq_token: syn::Token![=] = input.parse()?;
        let value: syn::LitStr = input.parse()?;

        Ok(Tag {
            key: key.unraw().to_string(),
            value,
        })
    }
}
