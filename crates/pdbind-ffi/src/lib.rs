//! Declaration translator from the Playdate C API to Nelua FFI bindings.
//!
//! Reads one self-contained declaration block (an enum, a struct, or a flat
//! list of function-pointer table entries) and produces the equivalent Nelua
//! binding source.
//!
//! ## Modules
//!
//! - [`ctype`] — Raw C type expressions and their normalized binding form
//! - [`tables`] — Type-name, constant-name, and reserved-word tables
//! - [`config`] — `pdbind.toml` table overrides
//! - [`block`] — Declaration blocks and block classification
//! - [`enums`] — Enum block emitter
//! - [`structs`] — Struct block emitter (opaque and full definitions)
//! - [`fnlist`] — Function-pointer list emitter
//! - [`emit`] — Nelua output syntax helpers
//! - [`translate`] — Classification and emitter dispatch

pub mod block;
pub mod config;
pub mod ctype;
pub mod emit;
pub mod enums;
pub mod error;
pub mod fnlist;
pub mod structs;
pub mod tables;
pub mod translate;

// Re-export key types for convenience
pub use block::{BlockKind, DeclarationBlock};
pub use config::TableOverrides;
pub use ctype::TypeName;
pub use error::TranslateError;
pub use tables::RenameTables;
pub use translate::{Translation, Translator};
