//! # additive
//!
//! Binary-compatible construction APIs for structs.
//!
//! Deriving [`Additive`] on a struct generates a constructor, a builder with
//! per-field setters, and a `copy` operation driven by a mutation callback.
//! Because callers only ever name fields — never positions — a library can
//! add or reorder optional fields later without breaking existing callers:
//! the generated surface is additive, not positional.
//!
//! ## Quick start
//!
//! ```rust
//! use additive::{Additive, ValidationError};
//!
//! #[derive(Additive, Debug, Clone, PartialEq)]
//! pub struct Profile {
//!     pub username: String,
//!     pub display_name: Option<String>,
//!     #[additive(default = "en")]
//!     pub locale: String,
//! }
//!
//! // Mandatory fields ride the constructor; defaulted fields fall back.
//! let profile = Profile::new("alice".to_string(), None)?;
//! assert_eq!(profile.locale, "en");
//!
//! // `copy` produces a modified clone and never touches the source.
//! let localized = profile.copy(|b| {
//!     b.set_locale("fr".to_string());
//! })?;
//! assert_eq!(localized.locale, "fr");
//! assert_eq!(profile.locale, "en");
//!
//! // Null for a non-Option field is rejected at construction...
//! assert!(Profile::new(None, None).is_err());
//!
//! // ...and at build time, even though the setter itself succeeds.
//! let broken = profile.copy(|b| {
//!     b.set_locale(None);
//! });
//! assert_eq!(broken, Err(ValidationError::NullField("locale")));
//! # Ok::<(), ValidationError>(())
//! ```
//!
//! ## Validation model
//!
//! Nullability is enforced at two checkpoints and nowhere else:
//!
//! 1. **Constructor entry** — a mandatory non-`Option` argument that arrives
//!    as `None` fails with [`ValidationError::NullArgument`] before any
//!    mutation callback runs.
//! 2. **Build step** — after all setter calls, every non-`Option` slot still
//!    holding `None` fails with [`ValidationError::NullField`].
//!
//! Setters never validate, so a builder can pass through invalid states
//! while a mutation callback works; only the finished value is checked.
//! Either a fully valid instance is produced or none is.

use thiserror::Error;

#[cfg(feature = "derive")]
pub use additive_derive::Additive;

/// Runtime failure raised when a construction path would produce a null
/// value for a non-nullable field.
///
/// Raised synchronously at the offending call site and never retried: a
/// value-based violation would not change on retry. Both variants carry the
/// field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A mandatory non-nullable argument was null at a constructor call.
    #[error("mandatory field `{0}` must not be null")]
    NullArgument(&'static str),
    /// A non-nullable field held null when the builder was consumed.
    #[error("non-nullable field `{0}` was null at build")]
    NullField(&'static str),
}

impl ValidationError {
    /// The name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NullArgument(field) | ValidationError::NullField(field) => field,
        }
    }
}
