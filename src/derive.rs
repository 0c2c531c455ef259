//! Derive Api for `flagbind` record types.
//!
//! Instrument a struct with `#[derive(FlagGroup)]` to generate its
//! [`FlagGroup`](../trait.FlagGroup.html) implementation from `#[flag(..)]`
//! field attributes.
//!
//! ### Field attributes
//! * `#[flag("name")]`: bind the field to the flag `name`.
//! * `#[flag("name,help text")]`: additionally carry help text; the tag
//!   splits on the first comma only.
//! * `#[flag("name", sep = ";")]`: for `Vec` fields, the separator used to
//!   split one argument into elements (default `","`).
//!
//! A tagged field whose type is not a supported leaf kind is a nested
//! record: its tag becomes a name prefix for every flag the nested record
//! declares (`#[flag("config-")]` turns a nested `port` into
//! `config-port`), and an empty tag recurses with no added prefix. The
//! nested type must itself derive (or implement) `FlagGroup`.
//!
//! Untagged fields do not participate: they are never bound and never
//! recursed into.
//!
//! ### Naming
//! Flag names start with a letter, continue with alphanumerics, hyphens, or
//! periods, and cannot end with a hyphen or period. Names are validated
//! after prefix concatenation, when the record is walked (not at derive
//! time), so an invalid name surfaces through the walk's error handling and
//! participates in continue-on-error.
pub use flagbind_derive::FlagGroup;
