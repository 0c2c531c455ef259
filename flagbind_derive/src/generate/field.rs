use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

use crate::model::{Arity, DeriveField, FieldBinding};

impl DeriveField {
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveField {
            field_name,
            binding,
        } = self;
        let field_name_str = format!("{field_name}");

        match binding {
            FieldBinding::Leaf {
                kind,
                arity,
                name,
                help,
                list_sep,
            } => {
                let variant = format_ident!("{}", kind.variant());
                let slot = match arity {
                    Arity::Value => format_ident!("Value"),
                    Arity::Optional => format_ident!("Optional"),
                    Arity::List => format_ident!("List"),
                };
                let help = flatten(help);

                quote! {
                    walker.bind(
                        ::flagbind::Target::#variant(::flagbind::Slot::#slot(&mut self.#field_name)),
                        #field_name_str,
                        #name,
                        #help,
                        #list_sep,
                    )?;
                }
            }
            FieldBinding::Nested { prefix } => {
                quote! {
                    {
                        let nested = &mut self.#field_name;
                        walker.group(#prefix, move |walker| {
                            ::flagbind::FlagGroup::visit(nested, walker)
                        })?;
                    }
                }
            }
        }
    }
}

fn flatten(value: Option<String>) -> TokenStream2 {
    value.map_or_else(
        || quote! { None },
        |text| {
            quote! { Some(#text) }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Kind;
    use proc_macro2::Span;

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    #[test]
    fn render_leaf() {
        // Setup
        let derive_field = DeriveField {
            field_name: ident("port"),
            binding: FieldBinding::Leaf {
                kind: Kind::U16,
                arity: Arity::Value,
                name: "port".to_string(),
                help: Some("the listen port".to_string()),
                list_sep: ",".to_string(),
            },
        };

        // Execute
        let token_stream = derive_field.generate();

        // Verify
        let expected = quote! {
            walker.bind(
                ::flagbind::Target::U16(::flagbind::Slot::Value(&mut self.port)),
                "port",
                "port",
                Some("the listen port"),
                ",",
            )?;
        };
        assert_eq!(token_stream.to_string(), expected.to_string());
    }

    #[test]
    fn render_list_leaf() {
        // Setup
        let derive_field = DeriveField {
            field_name: ident("tags"),
            binding: FieldBinding::Leaf {
                kind: Kind::Text,
                arity: Arity::List,
                name: "tags".to_string(),
                help: None,
                list_sep: ";".to_string(),
            },
        };

        // Execute
        let token_stream = derive_field.generate();

        // Verify
        let expected = quote! {
            walker.bind(
                ::flagbind::Target::Text(::flagbind::Slot::List(&mut self.tags)),
                "tags",
                "tags",
                None,
                ";",
            )?;
        };
        assert_eq!(token_stream.to_string(), expected.to_string());
    }

    #[test]
    fn render_nested() {
        // Setup
        let derive_field = DeriveField {
            field_name: ident("config"),
            binding: FieldBinding::Nested {
                prefix: "config-".to_string(),
            },
        };

        // Execute
        let token_stream = derive_field.generate();

        // Verify
        let expected = quote! {
            {
                let nested = &mut self.config;
                walker.group("config-", move |walker| {
                    ::flagbind::FlagGroup::visit(nested, walker)
                })?;
            }
        };
        assert_eq!(token_stream.to_string(), expected.to_string());
    }
}
