use crate::model::{DeriveField, DeriveRecord};

impl TryFrom<syn::DeriveInput> for DeriveRecord {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = value.ident.clone();

        match &value.data {
            syn::Data::Struct(ds) => {
                let fields = match ds {
                    syn::DataStruct {
                        fields: syn::Fields::Named(ref fields),
                        ..
                    } => fields
                        .named
                        .iter()
                        // Untagged fields are invisible to the walk.
                        .filter(|field| {
                            field.attrs.iter().any(|attr| attr.path().is_ident("flag"))
                        })
                        .map(DeriveField::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                    syn::DataStruct { .. } => Vec::default(),
                };

                Ok(DeriveRecord {
                    struct_name,
                    fields,
                })
            }
            _ => Err(syn::Error::new(
                value.ident.span(),
                "FlagGroup can only be derived for structs.",
            )),
        }
    }
}
