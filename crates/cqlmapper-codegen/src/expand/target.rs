use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// A record moved by value is accepted by the type checker but cannot be
    /// mapped: introspection needs addressable fields.
    pub(super) fn expand_target_impl(&self) -> TokenStream {
        let cqlmapper = &self.cqlmapper;
        let record_ident = &self.record.ident;
        let name = &self.record.name;

        quote! {
            impl<'a> #cqlmapper::Target<'a> for #record_ident {
                fn into_record(self) -> #cqlmapper::Result<&'a mut dyn #cqlmapper::Record> {
                    ::std::result::Result::Err(#cqlmapper::Error::invalid_target(#name))
                }
            }
        }
    }
}
