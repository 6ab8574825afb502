//! Record accessor compiler.
//!
//! A record accessor is either a plain string literal or a path into a
//! structured record, written `$key['subkey']['subkey']`. This crate turns
//! such text into an [`Accessor`]: a key name plus, for paths, the ordered
//! list of subkeys. Walking the accessor against actual record data is left
//! to the caller.
//!
//! ```
//! use ra_accessor::{compile_expression, AccessorKind};
//!
//! let accessor = compile_expression("$kubernetes['labels']['app']").unwrap();
//! assert_eq!(accessor.kind(), AccessorKind::Keymap);
//! assert_eq!(accessor.name(), "kubernetes");
//! let subkeys: Vec<&str> = accessor.subkeys().unwrap().iter().collect();
//! assert_eq!(subkeys, ["labels", "app"]);
//! ```
//!
//! Templates mixing literal text and accessors are split by [`RecordAccessor`].

mod accessor;
mod builder;
mod compile;
mod env;
mod error;
mod key;
mod options;
mod string_list;
mod template;

pub use accessor::{Accessor, AccessorKind};
pub use builder::AccessorBuilder;
pub use compile::{compile_expression, compile_string};
pub use env::translate_env;
pub use error::BuildError;
pub use key::{KeyNode, make_key, make_key_from_span};
pub use options::AccessorOptions;
pub use ra_parse::{ParseError, ParseErrorKind, Span};
pub use string_list::StringList;
pub use template::RecordAccessor;
