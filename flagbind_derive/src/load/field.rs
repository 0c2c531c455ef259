use crate::model::{Arity, DeriveField, FieldBinding, FlagAttribute, Kind};

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let mut attribute: Option<FlagAttribute> = None;

        for attr in &value.attrs {
            if attr.path().is_ident("flag") {
                attribute = Some(FlagAttribute::try_from(attr)?);
            }
        }

        let attribute =
            attribute.expect("internal error - only #[flag(..)] fields are loaded");
        let field_name = value
            .ident
            .clone()
            .expect("internal error - fields must be named");

        let binding = match classify(&value.ty) {
            Some((kind, arity)) => {
                let (name, help) = split_tag(&attribute.tag);
                FieldBinding::Leaf {
                    kind,
                    arity,
                    name,
                    help,
                    list_sep: attribute.sep.unwrap_or_else(|| ",".to_string()),
                }
            }
            None => {
                if is_container(&value.ty) {
                    return Err(syn::Error::new_spanned(
                        &value.ty,
                        "unsupported flag type: Option<..> and Vec<..> apply to the leaf kinds only",
                    ));
                }

                if attribute.sep.is_some() {
                    return Err(syn::Error::new_spanned(
                        value,
                        "sep applies to list fields, not nested records",
                    ));
                }

                FieldBinding::Nested {
                    prefix: attribute.tag,
                }
            }
        };

        Ok(DeriveField {
            field_name,
            binding,
        })
    }
}

// The tag splits on the first comma only: `name` or `name,help text`.
fn split_tag(tag: &str) -> (String, Option<String>) {
    match tag.split_once(',') {
        Some((name, help)) => (name.to_string(), Some(help.to_string())),
        None => (tag.to_string(), None),
    }
}

fn classify(ty: &syn::Type) -> Option<(Kind, Arity)> {
    let path = match ty {
        syn::Type::Path(path) => path,
        _ => return None,
    };
    let segment = path.path.segments.last()?;
    let ident = segment.ident.to_string();

    match ident.as_str() {
        "Option" | "Vec" => {
            let (kind, arity) = classify(generic_argument(segment)?)?;
            if arity != Arity::Value {
                return None;
            }

            let arity = if ident == "Option" {
                Arity::Optional
            } else {
                Arity::List
            };
            Some((kind, arity))
        }
        _ => Kind::from_ident(&ident).map(|kind| (kind, Arity::Value)),
    }
}

fn is_container(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(path) => match path.path.segments.last() {
            Some(segment) => {
                let ident = segment.ident.to_string();
                ident == "Option" || ident == "Vec"
            }
            None => false,
        },
        _ => false,
    }
}

fn generic_argument(segment: &syn::PathSegment) -> Option<&syn::Type> {
    match &segment.arguments {
        syn::PathArguments::AngleBracketed(arguments) => match arguments.args.first() {
            Some(syn::GenericArgument::Type(ty)) => Some(ty),
            _ => None,
        },
        _ => None,
    }
}
