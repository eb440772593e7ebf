extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `Record` for a struct with named fields.
///
/// `#[table = "name"]` on the struct overrides the table name. `#[tag(key =
/// "value")]` on a field attaches tags, the mapper's column tag selects the
/// column name.
///
/// A field named after its type, e.g. `Inner: Inner`, embeds that type: its
/// fields become columns of this record. The decision is made on names alone,
/// so the embedded type must itself derive `Record`. Any other field is one
/// column and its type must implement `Primitive`; derived records do, and are
/// stored as a `Value::Record`.
#[proc_macro_derive(Record, attributes(table, tag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match cqlmapper_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
