//! Derive Api for `argbind` schemas.
//!
//! ### Getting Started
//! Instrument a struct `S` with `#[derive(ArgumentSchema)]` to generate its [`ArgumentSchema`](../trait.ArgumentSchema.html) implementation.
//! Then bind with `argbind::parse::<S, _>(..)`, which requires `S: Default`.
//!
//! ```no_run
#![doc = include_str!("../demos/bind.rs")]
//! ```
//!
//! ### Schema Configuration
//! The struct may be configured with `#[argbind(description = "..")]`, which becomes the first line of the help text.
//!
//! ### Field Configuration
//! Only fields instrumented with `#[argbind(..)]` are bound; the rest are left untouched.
//! The following keys may be combined as necessary:
//! * `tag = ".."` sets the tag spec (ex: `"--path|-p"`).
//! When absent, the tag is `--` followed by the field name.
//! * `help = ".."` sets the help message.
//! * `optional` allows the field to be left unspecified.
//! * `help_flag` marks the field as the help request; when specified, the required field checks are skipped.
//!
//! For example:
//! ```ignore
//! #[derive(Default, ArgumentSchema)]
//! struct Parameters {
//!     #[argbind()]
//!     name: String,
//!     // the above generates:
//!     //  .field(Field::new("name", |target: &mut Self| &mut target.name))
//!
//!     #[argbind(tag = "-n|--count", optional, help = "How many.")]
//!     count: u32,
//!     // the above generates:
//!     //  .field(Field::new("count", |target: &mut Self| &mut target.count)
//!     //      .tag("-n|--count")
//!     //      .optional()
//!     //      .help("How many."))
//!
//!     cache: Vec<u8>,
//!     // the above is not bound
//! }
//! ```
//!
//! Malformed attributes (unknown or repeated keys) are reported as compile errors.
//! Malformed tag specs, and tags shared between fields, are reported at bind time via [`BindError`](../enum.BindError.html).

pub use argbind_derive::*;
