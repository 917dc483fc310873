//! `argbind` binds command line tokens onto the fields of a plain struct.
//!
//! Each bound field declares a *tag spec*: one long tag (`--name`), one short tag (`-n`), or both (`--name|-n`).
//! The tokens are scanned left to right; a token matching a tag binds the following token (converted to the field's type) into that field.
//! Switch fields (`bool` and `Option<bool>`) consume no value token and are set to `true` when their tag appears.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/bind.rs")]
//! ```
//!
//! This generates the following program:
//! ```console
//! $ bind -h
//! Copy a file, throttled to a rate.
//!
//!  --source        -s   The file to copy.
//!  --destination   -d   Where to copy it.
//!  --rate          -r   (Optional) Kilobytes per second.
//!                       Unthrottled when absent.
//!  --retries            (Optional)
//!  --verbose       -v   (Optional)
//!  --help          -h   (Optional) Show this help and exit.
//!
//! $ bind -s a.txt --DESTINATION b.txt -v
//! Parameters { source: "a.txt", destination: "b.txt", rate: None, retries: 0, verbose: true, help: false }
//!
//! $ bind -s a.txt
//! Bind error: Missing required argument '--destination'.
//!
//! $ bind -s a.txt -d b.txt --rate fast
//! Bind error: Argument '--rate' cannot convert 'fast' to Option<decimal>.
//! ```
//!
//! # Builder Api
//! Implement [`ArgumentSchema`] by hand, listing one [`Field`] per bound struct field.
//! Each field is addressed through an accessor `fn(&mut S) -> &mut T`, where `T` is [`Bindable`](./prelude/trait.Bindable.html).
//! ```
//! use argbind::{ArgumentSchema, Declaration, Field};
//!
//! #[derive(Default)]
//! struct Parameters {
//!     depth: u16,
//!     verbose: bool,
//! }
//!
//! impl ArgumentSchema for Parameters {
//!     fn declaration() -> Declaration<Self> {
//!         Declaration::new()
//!             .field(Field::new("depth", |p: &mut Self| &mut p.depth).tag("--depth|-d"))
//!             .field(Field::new("verbose", |p: &mut Self| &mut p.verbose).tag("-v").optional())
//!     }
//! }
//!
//! let parameters: Parameters = argbind::parse(&["-v", "--depth", "3"]).unwrap();
//! assert_eq!(parameters.depth, 3);
//! assert!(parameters.verbose);
//! ```
//!
//! ### Supported Types
//! ```console
//! Type                   | Value token
//! ----------------------------------------------------------------------------
//! bool                   | none (switch)
//! i8 .. i64, u8 .. u64   | decimal integer, trimmed
//! f32, f64               | finite float, trimmed
//! rust_decimal::Decimal  | exact decimal, trimmed
//! String                 | verbatim
//! char                   | exactly one character
//! chrono::NaiveDateTime  | RFC 3339, `%Y-%m-%dT%H:%M:%S`, `%Y-%m-%d %H:%M:%S`, or `%Y-%m-%d`
//! PathBuf                | verbatim
//! Option<T>              | as `T`; `Option<bool>` is a switch
//! ```
//!
//! # Binding Semantics
//! * Tags match case-insensitively, after trimming surrounding whitespace.
//! * When a field declares no tag spec, its tag is `--` followed by the field name.
//! * The token following a value taking tag is always its value, even when it looks like a tag (ex: `--offset -5`).
//! * Tokens matching no tag are ignored, unless the [`Binder`] is configured to [reject](./struct.Binder.html#method.reject_unknown) them.
//! * Each field may be specified at most once.
//! * Every non-optional field must be specified, unless a *help flag* field was specified.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while scanning tokens.
pub mod derive;
pub use argbind_builder::*;
