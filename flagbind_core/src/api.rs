use std::env;

use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::registry::{FlagEntry, Registry};
use crate::scan;
use crate::value::ParseError;
use crate::walk::{walk, FlagGroup, InvalidFlagName};

/// The failure of a populate or register pass.
#[derive(Debug, Error)]
pub enum Error {
    /// A tag-declared flag name failed the name grammar.
    #[error(transparent)]
    InvalidFlagName(#[from] InvalidFlagName),

    /// A supplied value failed to coerce into its field.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The registry already holds an entry under this flag name.
    #[error("flag '{name}' is already registered.")]
    AlreadyRegistered {
        /// The conflicting flag name.
        name: String,
    },
}

/// Scan `args` and assign each supplied flag value into the matching field
/// of `record`.
///
/// Fields whose flags are absent keep their current values. A per-field
/// coercion failure either skips that one field (`continue_on_error`) or
/// aborts immediately with that error; fields processed before the failure
/// keep their newly assigned values.
pub fn populate<T>(record: &mut T, args: &[&str], continue_on_error: bool) -> Result<(), Error>
where
    T: FlagGroup,
{
    let bindings = walk(record, "", continue_on_error)?;

    for mut binding in bindings {
        let text = scan::flag_value(&binding.flag_name, args);
        if text.is_empty() {
            continue;
        }

        match binding.assign(&text) {
            Ok(_changed) => {
                #[cfg(feature = "tracing_debug")]
                {
                    let flag = &binding.flag_name;
                    debug!("Assigned '{text}' to flag '{flag}' (changed: {_changed}).");
                }
            }
            Err(error) => {
                if !continue_on_error {
                    return Err(Error::Parse(error));
                }
            }
        }
    }

    Ok(())
}

/// [`populate`] against the current process arguments.
pub fn populate_env<T>(record: &mut T, continue_on_error: bool) -> Result<(), Error>
where
    T: FlagGroup,
{
    let args: Vec<String> = env::args().skip(1).collect();
    populate(
        record,
        args.iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .as_slice(),
        continue_on_error,
    )
}

/// Register each of `record`'s bindings into `registry`.
///
/// Every entry carries the field's current value as its displayed default
/// and a help string describing the data type; its deferred assignment
/// re-enters the coercion engine when the registry's own parse pass runs.
/// A flag name already present in the registry is a conflict: skipped under
/// `continue_on_error`, otherwise the whole operation aborts, leaving
/// earlier registrations in place.
pub fn register<'a, T, R>(
    registry: &mut R,
    record: &'a mut T,
    continue_on_error: bool,
) -> Result<(), Error>
where
    T: FlagGroup,
    R: Registry<'a>,
{
    let bindings = walk(record, "", continue_on_error)?;

    for binding in bindings {
        if registry.contains(&binding.flag_name) {
            if continue_on_error {
                continue;
            }

            return Err(Error::AlreadyRegistered {
                name: binding.flag_name,
            });
        }

        registry.insert(FlagEntry::new(binding, continue_on_error));
    }

    Ok(())
}
