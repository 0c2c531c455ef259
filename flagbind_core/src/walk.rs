use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::model::{Binding, Target};

// Flag names start with a letter, continue with alphanumerics, hyphens, or
// periods, and cannot end with a hyphen or period.
static FLAG_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]([0-9A-Za-z.-]*[0-9A-Za-z])?$")
        .expect("internal error - flag name grammar must compile")
});

/// A tag-declared flag name failed the name grammar after prefix
/// concatenation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid flag name '{flag_name}' for field '{field_name}'.")]
pub struct InvalidFlagName {
    /// The declaring field.
    pub field_name: &'static str,
    /// The offending composed name.
    pub flag_name: String,
}

/// A record whose fields can be offered to a [`Walker`].
///
/// Implementations are generated by `#[derive(FlagGroup)]`; they offer every
/// tagged field in declaration order, recursing into tagged nested records
/// at the point of their declaration.
pub trait FlagGroup {
    /// Offer each field of this record to `walker`.
    fn visit<'w>(&'w mut self, walker: &mut Walker<'w>) -> Result<(), InvalidFlagName>;
}

/// Accumulates the bindings of one record traversal.
///
/// A walker is handed to [`FlagGroup::visit`] by [`walk`]; generated
/// implementations call [`Walker::bind`] for leaf fields and
/// [`Walker::group`] for nested records.
pub struct Walker<'a> {
    prefix: String,
    continue_on_error: bool,
    bindings: Vec<Binding<'a>>,
}

impl<'a> Walker<'a> {
    fn new(prefix: &str, continue_on_error: bool) -> Self {
        Self {
            prefix: prefix.to_string(),
            continue_on_error,
            bindings: Vec::default(),
        }
    }

    /// Record a single bindable field.
    ///
    /// The flag name is `name` behind the accumulated group prefix. A name
    /// that fails the grammar either skips this one field (continue-on-error)
    /// or aborts the walk.
    pub fn bind(
        &mut self,
        target: Target<'a>,
        field_name: &'static str,
        name: &'static str,
        help: Option<&'static str>,
        list_sep: &'static str,
    ) -> Result<(), InvalidFlagName> {
        let flag_name = format!("{}{}", self.prefix, name);

        if !FLAG_NAME.is_match(&flag_name) {
            if self.continue_on_error {
                return Ok(());
            }

            return Err(InvalidFlagName {
                field_name,
                flag_name,
            });
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Bound field '{field_name}' to flag '{flag_name}'.");
        }

        self.bindings.push(Binding {
            target,
            field_name,
            flag_name,
            help,
            list_sep,
        });
        Ok(())
    }

    /// Traverse a nested record with the prefix extended by `segment`.
    pub fn group<F>(&mut self, segment: &str, nested: F) -> Result<(), InvalidFlagName>
    where
        F: FnOnce(&mut Self) -> Result<(), InvalidFlagName>,
    {
        let depth = self.prefix.len();
        self.prefix.push_str(segment);
        let result = nested(self);
        self.prefix.truncate(depth);
        result
    }
}

/// Walk `record`, producing its bindings in field-declaration order, nested
/// records' bindings interleaved at the declaring field's position.
///
/// On an error the partial binding list is discarded; a walk either yields
/// the complete list or nothing.
pub fn walk<'a, T>(
    record: &'a mut T,
    prefix: &str,
    continue_on_error: bool,
) -> Result<Vec<Binding<'a>>, InvalidFlagName>
where
    T: FlagGroup,
{
    let mut walker = Walker::new(prefix, continue_on_error);
    record.visit(&mut walker)?;
    Ok(walker.bindings)
}
