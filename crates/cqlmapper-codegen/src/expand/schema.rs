use super::Expand;

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;

impl Expand<'_> {
    pub(super) fn expand_record_schema(&self) -> TokenStream {
        let cqlmapper = &self.cqlmapper;
        let name = &self.record.name;
        let fields = self.expand_field_defs();

        quote! {
            fn schema() -> &'static #cqlmapper::RecordSchema {
                use #cqlmapper::{FieldDef, RecordSchema, Tag};

                static SCHEMA: #cqlmapper::OnceLock<RecordSchema> = #cqlmapper::OnceLock::new();

                SCHEMA.get_or_init(|| RecordSchema {
                    id: #cqlmapper::TypeId::of::<Self>(),
                    name: #name,
                    fields: ::std::vec![ #( #fields, )* ],
                })
            }
        }
    }

    fn expand_field_defs(&self) -> Vec<TokenStream> {
        let cqlmapper = &self.cqlmapper;

        self.record
            .fields
            .iter()
            .map(|field| {
                let name = &field.name;
                let ty_name = &field.ty_name;

                let tags = field.attrs.tags.iter().map(|tag| {
                    let key = &tag.key;
                    let value = &tag.value;
                    quote!(Tag { key: #key, value: #value })
                });

                let embedded = if field.embedded {
                    let ty = &field.ty;
                    // Points a missing `Record` impl at the field type
                    quote_spanned!(ty.span()=> ::std::option::Option::Some(<#ty as #cqlmapper::Record>::schema))
                } else {
                    quote!(::std::option::Option::None)
                };

                quote! {
                    FieldDef {
                        name: #name,
                        ty: #ty_name,
                        tags: ::std::vec![ #( #tags ),* ],
                        embedded: #embedded,
                    }
                }
            })
            .collect()
    }

    pub(super) fn expand_table_name(&self) -> TokenStream {
        let Some(table) = &self.record.table else {
            return quote!();
        };

        quote! {
            fn table_name(&self) -> ::std::option::Option<::std::string::String> {
                ::std::option::Option::Some(::std::string::String::from(#table))
            }
        }
    }
}
