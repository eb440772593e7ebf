use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_fields(&self) -> TokenStream {
        let cqlmapper = &self.cqlmapper;

        let fields = self.record.fields.iter().map(|field| {
            let ident = &field.ident;

            if field.embedded {
                quote!(#cqlmapper::FieldRef::Embedded(&self.#ident))
            } else {
                quote!(#cqlmapper::FieldRef::Column(&self.#ident))
            }
        });

        quote! {
            fn fields(&self) -> ::std::vec::Vec<#cqlmapper::FieldRef<'_>> {
                ::std::vec![ #( #fields ),* ]
            }
        }
    }

    pub(super) fn expand_fields_mut(&self) -> TokenStream {
        let cqlmapper = &self.cqlmapper;

        let fields = self.record.fields.iter().map(|field| {
            let ident = &field.ident;

            if field.embedded {
                quote!(#cqlmapper::FieldMut::Embedded(&mut self.#ident))
            } else {
                quote!(#cqlmapper::FieldMut::Column(&mut self.#ident))
            }
        });

        quote! {
            fn fields_mut(&mut self) -> ::std::vec::Vec<#cqlmapper::FieldMut<'_>> {
                ::std::vec![ #( #fields ),* ]
            }
        }
    }
}
