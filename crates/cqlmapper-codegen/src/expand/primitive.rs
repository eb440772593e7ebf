use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets a record be held as a plain column by another record. The value
    /// has one entry per declared field; embedded fields nest their own
    /// record value.
    pub(super) fn expand_primitive_impl(&self) -> TokenStream {
        let cqlmapper = &self.cqlmapper;
        let record_ident = &self.record.ident;
        let name = &self.record.name;
        let num_fields = self.record.fields.len();

        let load_fields = self.record.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            quote! {
                #ident: <#ty as #cqlmapper::Primitive>::load(fields.next().unwrap_or_default())?
            }
        });

        let field_values = self.record.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            quote!(<#ty as #cqlmapper::Primitive>::to_value(&self.#ident))
        });

        quote! {
            impl #cqlmapper::Primitive for #record_ident {
                const TYPE_NAME: &'static str = #name;

                fn load(value: #cqlmapper::Value) -> #cqlmapper::Result<Self> {
                    let fields = match value {
                        #cqlmapper::Value::Record(fields) if fields.len() == #num_fields => fields,
                        value => {
                            return ::std::result::Result::Err(
                                #cqlmapper::Error::type_conversion(value, #name),
                            )
                        }
                    };

                    #[allow(unused_mut, unused_variables)]
                    let mut fields = fields.into_iter();

                    ::std::result::Result::Ok(Self {
                        #( #load_fields, )*
                    })
                }

                fn to_value(&self) -> #cqlmapper::Value {
                    #cqlmapper::Value::Record(::std::vec![ #( #field_values ),* ])
                }
            }
        }
    }
}
