extern crate proc_macro;

mod generate;
mod load;
mod model;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

use crate::model::DeriveRecord;

/// Generate a `FlagGroup` implementation from `#[flag(..)]` field attributes.
///
/// Tagged fields of a supported leaf type (`T`, `Option<T>`, or `Vec<T>`)
/// become flag bindings; tagged fields of any other struct type are nested
/// records, traversed with the tag as a name prefix. Untagged fields are
/// skipped.
///
/// ```ignore
/// #[derive(Default, FlagGroup)]
/// struct Settings {
///     #[flag("verbose,enable verbose output")]
///     verbose: bool,
///     #[flag("tags", sep = ";")]
///     tags: Vec<String>,
///     #[flag("config-")]
///     config: Config,
/// }
/// ```
#[proc_macro_derive(FlagGroup, attributes(flag))]
pub fn flag_group(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveRecord::try_from(ast).and_then(TokenStream2::try_from) {
        Ok(token_stream) => token_stream.into(),
        Err(error) => error.to_compile_error().into(),
    }
}
