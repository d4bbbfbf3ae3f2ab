//! # additive-derive
//!
//! A procedural macro generating a binary-compatible construction API:
//! a validating constructor, a builder with per-parameter setters, and a
//! `copy` operation driven by a mutation callback.
//!
//! Most users should depend on the `additive` crate, which re-exports this
//! macro together with the runtime error type.
//!
//! ## Example
//!
//! ```rust
//! use additive::Additive;
//!
//! #[derive(Additive, Debug, Clone, PartialEq)]
//! pub struct Message {
//!     pub recipient: String,
//!     #[additive(default = "plain")]
//!     pub encoding: String,
//! }
//!
//! let message = Message::new("alice".to_string()).unwrap();
//! assert_eq!(message.encoding, "plain");
//!
//! let json = message.copy(|b| { b.set_encoding("json".to_string()); }).unwrap();
//! assert_eq!(json.encoding, "json");
//! assert_eq!(message.encoding, "plain");
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod classify;
mod generate;
mod schema;

/// Derives a binary-compatible construction API for the annotated struct.
///
/// This macro generates:
/// - A builder struct named `{StructName}Builder` with one private slot per
///   field and chainable `set_{field}` methods
/// - `{StructName}::new(<mandatory fields>)` — the primary constructor:
///   fields without a default appear as arguments in declaration order,
///   defaulted fields fall back to their declared default
/// - `{StructName}::with(<mandatory fields>, mutator)` — construction with a
///   builder-seeding callback applied before validation
/// - `{StructName}::builder(<mandatory fields>)` — the seeded builder itself
/// - An `instance.copy(mutator)` method producing a modified clone; the
///   source instance is never mutated
///
/// ## Field handling
///
/// - **Mandatory fields**: no `#[additive(default ...)]` attribute. Non-`Option`
///   mandatory fields reject null at the constructor and at build time.
/// - **Optional fields**: `#[additive(default = expr)]` binds a default
///   (converted with `Into`); `Option<T>` fields may use a bare
///   `#[additive(default)]` for a null default.
/// - **Frozen fields**: `#[additive(default = expr, frozen)]` drops the
///   setter; the value always comes from the default or the copied source.
/// - **Sealed owners**: `#[additive(sealed)]` on a struct with no optional
///   fields drops the mandatory setters entirely, so `copy` degenerates to
///   an identity copy.
///
/// Every construction path funnels through the builder's `build` step, which
/// re-validates all non-`Option` fields and fails with
/// `additive::ValidationError` instead of producing a partial instance.
/// Setters themselves never validate. `copy` requires every field type to be
/// `Clone`.
#[proc_macro_derive(Additive, attributes(additive))]
pub fn derive_additive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate::impl_additive(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
