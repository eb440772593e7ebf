use super::{ErrorSet, Field, RecordAttr};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Type name as seen by the table name converter
    pub(crate) name: String,

    /// Declared fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Optional table to map the record to
    pub(crate) table: Option<syn::LitStr>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut record_attr = RecordAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = record_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in &node.named {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            name: ast.ident.unraw().to_string(),
            fields,
            table: record_attr.table,
        })
    }
}
