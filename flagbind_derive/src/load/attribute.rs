use quote::ToTokens;

use crate::model::FlagAttribute;

impl TryFrom<&syn::Attribute> for FlagAttribute {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut tag: Option<String> = None;
        let mut sep: Option<String> = None;

        for expression in &expressions {
            match expression {
                syn::Expr::Lit(_) => {
                    if tag.is_some() {
                        return Err(syn::Error::new_spanned(
                            expression,
                            "#[flag(..)] takes a single tag string",
                        ));
                    }

                    tag = Some(string_literal(expression)?);
                }
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream().to_string();
                    if left != "sep" {
                        return Err(syn::Error::new_spanned(
                            expression,
                            format!("unknown #[flag(..)] setting '{left}'"),
                        ));
                    }

                    sep = Some(string_literal(&assignment.right)?);
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        expression,
                        "expected #[flag(\"name,help\")] or #[flag(\"name\", sep = \"..\")]",
                    ));
                }
            };
        }

        match tag {
            Some(tag) => Ok(Self { tag, sep }),
            None => Err(syn::Error::new_spanned(
                value,
                "#[flag(..)] requires a tag string",
            )),
        }
    }
}

fn string_literal(expression: &syn::Expr) -> Result<String, syn::Error> {
    match expression {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(literal),
            ..
        }) => Ok(literal.value()),
        _ => Err(syn::Error::new_spanned(expression, "expected a string literal")),
    }
}
