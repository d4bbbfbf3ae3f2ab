//! Parameter classification.
//!
//! Every parameter falls into exactly one of four construction categories,
//! derived from its default and nullability flags. The four variants form a
//! closed set so the synthesizer can match on them exhaustively.

use crate::schema::ParameterSpec;

/// The construction category of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No default, non-nullable: must be supplied, must never be null.
    MandatoryNonNullable,
    /// No default, nullable: must be supplied, null is a legal value.
    MandatoryNullable,
    /// Defaulted, non-nullable: may be omitted, explicit null is rejected.
    OptionalNonNullable,
    /// Defaulted, nullable: may be omitted, explicit null is a legal value
    /// distinct from omission.
    OptionalNullable,
}

impl Classification {
    /// Mandatory parameters appear in the generated constructor argument
    /// lists; optional parameters fall back to their defaults.
    pub fn is_mandatory(self) -> bool {
        matches!(
            self,
            Classification::MandatoryNonNullable | Classification::MandatoryNullable
        )
    }

    /// Nullable parameters are exempt from every null check.
    pub fn is_nullable(self) -> bool {
        matches!(
            self,
            Classification::MandatoryNullable | Classification::OptionalNullable
        )
    }
}

/// Classifies one parameter.
///
/// Total over well-formed parameters. An internally inconsistent parameter
/// is rejected here, at generation time:
/// - a default flag without an expression on a non-nullable parameter
///   (a null default cannot satisfy a non-nullable field);
/// - `frozen` on a parameter without a default (mandatory parameters always
///   ride the constructor, so their setter cannot be dropped).
pub fn classify(param: &ParameterSpec) -> syn::Result<Classification> {
    if param.has_default && param.default.is_none() && !param.is_nullable() {
        return Err(syn::Error::new(
            param.name.span(),
            format!(
                "field `{}` declares a default without an expression; \
                 a non-nullable field needs an explicit default value",
                param.name
            ),
        ));
    }

    if param.frozen && !param.has_default {
        return Err(syn::Error::new(
            param.name.span(),
            format!(
                "field `{}` is frozen but has no default; \
                 only defaulted fields may drop their setter",
                param.name
            ),
        ));
    }

    Ok(match (param.has_default, param.is_nullable()) {
        (false, false) => Classification::MandatoryNonNullable,
        (false, true) => Classification::MandatoryNullable,
        (true, false) => Classification::OptionalNonNullable,
        (true, true) => Classification::OptionalNullable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;
    use syn::parse_quote;

    fn param(has_default: bool, nullable: bool) -> ParameterSpec {
        ParameterSpec {
            name: syn::Ident::new("test", Span::call_site()),
            ty: if nullable {
                parse_quote! { Option<String> }
            } else {
                parse_quote! { String }
            },
            inner_type: if nullable {
                Some(parse_quote! { String })
            } else {
                None
            },
            has_default,
            default: if has_default {
                Some(parse_quote! { String::new() })
            } else {
                None
            },
            frozen: false,
        }
    }

    #[test]
    fn test_classification_covers_all_four_combinations() {
        let table = [
            (false, false, Classification::MandatoryNonNullable),
            (false, true, Classification::MandatoryNullable),
            (true, false, Classification::OptionalNonNullable),
            (true, true, Classification::OptionalNullable),
        ];

        for (has_default, nullable, expected) in table {
            let classification = classify(&param(has_default, nullable)).unwrap();
            assert_eq!(classification, expected);
        }
    }

    #[test]
    fn test_bare_default_is_legal_for_nullable() {
        let mut spec = param(true, true);
        spec.default = None;

        assert_eq!(classify(&spec).unwrap(), Classification::OptionalNullable);
    }

    #[test]
    fn test_bare_default_is_rejected_for_non_nullable() {
        let mut spec = param(true, false);
        spec.default = None;

        assert!(classify(&spec).is_err());
    }

    #[test]
    fn test_frozen_without_default_is_rejected() {
        let mut spec = param(false, false);
        spec.frozen = true;

        assert!(classify(&spec).is_err());
    }

    #[test]
    fn test_frozen_with_default_is_legal() {
        let mut spec = param(true, false);
        spec.frozen = true;

        assert_eq!(classify(&spec).unwrap(), Classification::OptionalNonNullable);
    }

    #[test]
    fn test_mandatory_and_nullable_predicates() {
        assert!(Classification::MandatoryNonNullable.is_mandatory());
        assert!(!Classification::MandatoryNonNullable.is_nullable());
        assert!(Classification::MandatoryNullable.is_nullable());
        assert!(!Classification::OptionalNullable.is_mandatory());
        assert!(!Classification::OptionalNonNullable.is_nullable());
    }
}
