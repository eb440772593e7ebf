mod fields;
mod primitive;
mod schema;
mod target;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for cqlmapper types
    cqlmapper: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let cqlmapper = &self.cqlmapper;
        let record_ident = &self.record.ident;
        let schema = self.expand_record_schema();
        let table_name = self.expand_table_name();
        let fields = self.expand_fields();
        let fields_mut = self.expand_fields_mut();
        let target = self.expand_target_impl();
        let primitive = self.expand_primitive_impl();

        wrap_in_const(quote! {
            impl #cqlmapper::Record for #record_ident {
                #schema

                fn record_schema(&self) -> &'static #cqlmapper::RecordSchema {
                    <Self as #cqlmapper::Record>::schema()
                }

                #table_name
                #fields
                #fields_mut
            }

            #target
            #primitive
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        cqlmapper: quote!(_cqlmapper::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use cqlmapper as _cqlmapper;
            #code
        };
    }
}
