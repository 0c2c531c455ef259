//! `flagbind` binds the fields of an arbitrary nested struct to command-line
//! flags by way of per-field attributes.
//!
//! Instrument a struct with [`derive::FlagGroup`] and tag each bindable field
//! with `#[flag("name")]` or `#[flag("name,help text")]`. From there, two
//! entry points apply textual values to the struct:
//! * [`populate`] scans a raw argument list directly and assigns every
//!   supplied flag value into its field.
//! * [`register`] enters each field into a caller-owned flag [`Registry`],
//!   deferring assignment to the registry's own parse pass.
//!
//! # Usage
//! ```no_run
//! use std::time::Duration;
//!
//! use flagbind::derive::FlagGroup;
//!
//! #[derive(Default, FlagGroup)]
//! struct Settings {
//!     #[flag("verbose,enable verbose output")]
//!     verbose: bool,
//!
//!     // An empty tag recurses with no added prefix.
//!     #[flag("")]
//!     options: Options,
//!
//!     // "config-" prefixes every flag of the nested record.
//!     #[flag("config-")]
//!     config: Config,
//! }
//!
//! #[derive(Default, FlagGroup)]
//! struct Options {
//!     #[flag("port,the listen port")]
//!     port: u16,
//!     #[flag("log-level")]
//!     log_level: Option<String>,
//! }
//!
//! #[derive(Default, FlagGroup)]
//! struct Config {
//!     #[flag("timeout")]
//!     timeout: Duration,
//!     #[flag("tags", sep = ";")]
//!     tags: Vec<String>,
//! }
//!
//! let mut settings = Settings::default();
//! flagbind::populate_env(&mut settings, false).expect("cannot populate settings");
//! ```
//!
//! The example above binds the flags `verbose`, `port`, `log-level`,
//! `config-timeout`, and `config-tags`, honoring these Cli forms:
//! ```console
//! $ app -port 8080 --log-level=debug -verbose -config-timeout 1h30m
//! $ app -config-tags "a;b;c"
//! ```
//!
//! # Supported kinds
//! A field binds when its type is one of the supported leaf kinds, an
//! `Option` of one, or a `Vec` of one:
//! `String`, `bool`, `f32`, `f64`, `i8`, `i16`, `i32`, `i64`, `isize`,
//! `u8`, `u16`, `u32`, `u64`, `usize`, [`std::time::Duration`], [`Url`],
//! and [`Regex`].
//!
//! The kinds parse with their canonical textual grammars: integers are
//! base-10 and range-checked to their exact width, booleans accept the
//! common spellings (`true`/`t`/`1`, `false`/`f`/`0`, and their cased
//! variants), durations use a compound magnitude+unit grammar (`90m`,
//! `1h30m`, `1.5s`), and regular expressions are compiled, not stored as
//! text.
//!
//! # Assignment semantics
//! Every assignment is change-tracked: a value equal to the field's current
//! content is not written. An unset `Option` field is always written by a
//! successful parse. A `Vec` field is assigned whole from one delimited
//! argument; if any element fails to parse, the field is left untouched.
//!
//! Both entry points take a `continue_on_error` mode: when set, a per-field
//! failure (an invalid flag name, an unparsable value, a registration
//! conflict) skips that one field and processing continues; when unset, the
//! first failure aborts the pass, leaving the fields processed before it
//! assigned.
//!
//! # Registry flow
//! ```no_run
//! # use flagbind::derive::FlagGroup;
//! # #[derive(Default, FlagGroup)]
//! # struct Settings {
//! #     #[flag("port")]
//! #     port: u16,
//! # }
//! let mut settings = Settings::default();
//! let mut flags = flagbind::FlagSet::new();
//! flagbind::register(&mut flags, &mut settings, false).expect("cannot register settings");
//!
//! let args: Vec<String> = std::env::args().skip(1).collect();
//! let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
//! flags.parse(&tokens).expect("cannot parse arguments");
//! ```
//! [`FlagSet`] is the in-crate registry; any other registry participates by
//! implementing [`Registry`]. Registered entries display the field's value
//! at registration time as their default, and carry a help string naming the
//! data type and (for lists) the separator.
//!
//! # Known limitation
//! The argument scanner cannot distinguish a flag that was not supplied from
//! a flag supplied with an explicitly empty value; both leave the field
//! untouched.
pub mod derive;
pub use flagbind_core::*;
