//! Core runtime for `flagbind`.
//! See [documentation root](https://docs.rs/flagbind/latest/flagbind/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod model;
mod registry;
mod scan;
mod value;
mod walk;

pub use api::*;
pub use model::*;
pub use registry::*;
pub use scan::flag_value;
pub use value::*;
pub use walk::*;

pub use regex::Regex;
pub use url::Url;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
