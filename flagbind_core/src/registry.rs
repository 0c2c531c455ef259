use crate::model::Binding;
use crate::scan;
use crate::value::ParseError;

/// A caller-owned collection of named flag entries.
///
/// This is the full surface the register pass depends on; any flag registry
/// can participate by answering name lookups and accepting new entries.
/// Insert-if-absent is composed by the caller: registration checks
/// [`Registry::contains`] before [`Registry::insert`].
pub trait Registry<'a> {
    /// Whether an entry already exists under `name`.
    fn contains(&self, name: &str) -> bool;

    /// Add a new entry under its own name.
    fn insert(&mut self, entry: FlagEntry<'a>);
}

/// One registered flag: its name, displayed default, help string, and the
/// deferred assignment into the bound field.
pub struct FlagEntry<'a> {
    name: String,
    default: String,
    help: String,
    setter: Box<dyn FnMut(&str) -> Result<bool, ParseError> + 'a>,
}

impl<'a> FlagEntry<'a> {
    pub(crate) fn new(binding: Binding<'a>, continue_on_error: bool) -> Self {
        let default = binding.target.render(binding.list_sep);
        let help = help_line(&binding, &default);
        let Binding {
            mut target,
            flag_name,
            list_sep,
            ..
        } = binding;
        let setter = Box::new(move |text: &str| match target.coerce(list_sep, text) {
            Ok(changed) => Ok(changed),
            Err(_) if continue_on_error => Ok(false),
            Err(error) => Err(error),
        });

        Self {
            name: flag_name,
            default,
            help,
            setter,
        }
    }

    /// The fully qualified flag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound field's value at registration time, canonically rendered.
    pub fn default_text(&self) -> &str {
        &self.default
    }

    /// Help string describing the data type, default value, and (for lists)
    /// the separator.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Coerce `text` into the bound field.
    ///
    /// When the entry was registered with continue-on-error, a parse failure
    /// is swallowed and reported as "no change"; otherwise it surfaces as
    /// this call's own error.
    pub fn set(&mut self, text: &str) -> Result<bool, ParseError> {
        (self.setter)(text)
    }
}

fn help_line(binding: &Binding, default: &str) -> String {
    let mut data_type = binding.target.type_name().to_string();
    if binding.target.is_list() {
        data_type = format!("list of {data_type}, separated by '{}'", binding.list_sep);
    }

    let details = if default.is_empty() {
        format!("({data_type})")
    } else {
        format!("({data_type}, default {default})")
    };

    match binding.help {
        Some(help) => format!("{help} {details}"),
        None => details,
    }
}

/// An ordered, in-memory [`Registry`] with its own parse pass.
///
/// Entries keep registration order, so help listings and conflict detection
/// are deterministic.
#[derive(Default)]
pub struct FlagSet<'a> {
    entries: Vec<FlagEntry<'a>>,
}

impl<'a> FlagSet<'a> {
    /// Create an empty flag set.
    pub fn new() -> Self {
        Self {
            entries: Vec::default(),
        }
    }

    /// The number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by flag name.
    pub fn get(&self, name: &str) -> Option<&FlagEntry<'a>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// The registered entries, in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &FlagEntry<'a>> {
        self.entries.iter()
    }

    /// Resolve each entry's value from `args` and assign it to the bound
    /// field. Entries whose flags are absent are left untouched.
    pub fn parse(&mut self, args: &[&str]) -> Result<(), ParseError> {
        for entry in &mut self.entries {
            let text = scan::flag_value(&entry.name, args);
            if text.is_empty() {
                continue;
            }

            entry.set(&text)?;
        }

        Ok(())
    }
}

impl<'a> Registry<'a> for FlagSet<'a> {
    fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    fn insert(&mut self, entry: FlagEntry<'a>) {
        self.entries.push(entry);
    }
}
