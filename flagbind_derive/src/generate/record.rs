use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveField, DeriveRecord};

impl TryFrom<DeriveRecord> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveRecord) -> Result<Self, Self::Error> {
        let DeriveRecord {
            struct_name,
            fields,
        } = value;
        let fields: Vec<TokenStream2> = fields.into_iter().map(DeriveField::generate).collect();

        Ok(quote! {
            impl ::flagbind::FlagGroup for #struct_name {
                fn visit<'w>(
                    &'w mut self,
                    walker: &mut ::flagbind::Walker<'w>,
                ) -> ::std::result::Result<(), ::flagbind::InvalidFlagName> {
                    #( #fields )*
                    Ok(())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Arity, FieldBinding, Kind};
    use proc_macro2::Span;

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    #[test]
    fn render_empty_record() {
        // Setup
        let record = DeriveRecord {
            struct_name: ident("Plain"),
            fields: vec![],
        };

        // Execute
        let token_stream = TokenStream2::try_from(record).unwrap();

        // Verify
        let expected = quote! {
            impl ::flagbind::FlagGroup for Plain {
                fn visit<'w>(
                    &'w mut self,
                    walker: &mut ::flagbind::Walker<'w>,
                ) -> ::std::result::Result<(), ::flagbind::InvalidFlagName> {
                    Ok(())
                }
            }
        };
        assert_eq!(token_stream.to_string(), expected.to_string());
    }

    #[test]
    fn render_record() {
        // Setup
        let record = DeriveRecord {
            struct_name: ident("Settings"),
            fields: vec![
                DeriveField {
                    field_name: ident("verbose"),
                    binding: FieldBinding::Leaf {
                        kind: Kind::Bool,
                        arity: Arity::Value,
                        name: "verbose".to_string(),
                        help: None,
                        list_sep: ",".to_string(),
                    },
                },
                DeriveField {
                    field_name: ident("config"),
                    binding: FieldBinding::Nested {
                        prefix: "config-".to_string(),
                    },
                },
            ],
        };

        // Execute
        let token_stream = TokenStream2::try_from(record).unwrap();

        // Verify
        let expected = quote! {
            impl ::flagbind::FlagGroup for Settings {
                fn visit<'w>(
                    &'w mut self,
                    walker: &mut ::flagbind::Walker<'w>,
                ) -> ::std::result::Result<(), ::flagbind::InvalidFlagName> {
                    walker.bind(
                        ::flagbind::Target::Bool(::flagbind::Slot::Value(&mut self.verbose)),
                        "verbose",
                        "verbose",
                        None,
                        ",",
                    )?;
                    {
                        let nested = &mut self.config;
                        walker.group("config-", move |walker| {
                            ::flagbind::FlagGroup::visit(nested, walker)
                        })?;
                    }
                    Ok(())
                }
            }
        };
        assert_eq!(token_stream.to_string(), expected.to_string());
    }
}
