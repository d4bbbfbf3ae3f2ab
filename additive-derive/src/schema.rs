//! Schema extraction for the Additive derive macro.
//!
//! This module normalizes a `syn::DeriveInput` into a [`ClassSchema`]: the
//! ordered list of declared parameters with their nullability, default and
//! frozen flags, plus the container-level `sealed` flag. Everything the rest
//! of the generator needs is decided here; downstream passes never look at
//! raw attributes again.

use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{
    Data, DeriveInput, Expr, Field, Fields, GenericArgument, PathArguments, Token, Type,
};

/// The normalized schema of one derive target.
pub struct ClassSchema {
    /// The struct's identifier.
    pub name: syn::Ident,
    /// The struct's visibility, propagated to the generated surface.
    pub vis: syn::Visibility,
    /// Whether the owner was declared `#[additive(sealed)]`.
    pub sealed: bool,
    /// Declared parameters, in declaration order. The mandatory prefix of
    /// the generated constructors follows this order.
    pub params: Vec<ParameterSpec>,
}

/// One declared parameter of the target struct.
pub struct ParameterSpec {
    /// The field's identifier.
    pub name: syn::Ident,
    /// The field's type as declared.
    pub ty: Type,
    /// The inner type T if the declared type is Option<T>, otherwise None.
    /// A Some here is what makes the parameter nullable.
    pub inner_type: Option<Type>,
    /// Whether the field carries an `#[additive(default ...)]` attribute.
    pub has_default: bool,
    /// The default-value expression, if one was written. A bare `default`
    /// with no expression leaves this None (a null default).
    pub default: Option<Expr>,
    /// Whether the field was declared `frozen` (no builder setter).
    pub frozen: bool,
}

impl ClassSchema {
    /// Normalizes a derive input, rejecting shapes the generator cannot
    /// serve: non-structs, tuple and unit structs, and generic structs.
    pub fn from_derive_input(input: &DeriveInput) -> syn::Result<Self> {
        let fields = named_fields(input)?;

        if !input.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.generics,
                "Additive cannot be derived for generic structs",
            ));
        }

        let params = fields
            .iter()
            .map(ParameterSpec::from_field)
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(ClassSchema {
            name: input.ident.clone(),
            vis: input.vis.clone(),
            sealed: parse_container_attrs(input)?,
            params,
        })
    }

    /// True if any parameter carries a default, i.e. the class has an
    /// optional construction surface.
    pub fn has_optional(&self) -> bool {
        self.params.iter().any(|param| param.has_default)
    }
}

impl ParameterSpec {
    /// Analyzes one named field, including its `#[additive(...)]` attribute.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let name = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "field must have a name"))?;

        let ty = field.ty.clone();
        let inner_type = option_inner_type(&ty);
        let (has_default, default, frozen) = parse_field_attrs(field)?;

        Ok(ParameterSpec {
            name,
            ty,
            inner_type,
            has_default,
            default,
            frozen,
        })
    }

    /// True if the declared type is Option<T>.
    pub fn is_nullable(&self) -> bool {
        self.inner_type.is_some()
    }

    /// The value type accepted by this parameter's setter and constructor
    /// argument: T for Option<T> fields, the declared type otherwise.
    pub fn setter_value_type(&self) -> &Type {
        match &self.inner_type {
            Some(inner) => inner,
            None => &self.ty,
        }
    }

    /// The type of this parameter's slot in the generated builder.
    ///
    /// Nullable parameters store their declared Option<T> directly; for
    /// non-nullable parameters the slot wraps the value in an Option so a
    /// pending null is representable until build.
    pub fn slot_type(&self) -> Type {
        if self.is_nullable() {
            self.ty.clone()
        } else {
            let ty = &self.ty;
            syn::parse_quote! { ::std::option::Option<#ty> }
        }
    }
}

/// Extracts the named fields of the target, rejecting every other shape.
fn named_fields(input: &DeriveInput) -> syn::Result<&Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields_named) => Ok(&fields_named.named),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                input,
                "Additive can only be derived for structs with named fields, not tuple structs",
            )),
            Fields::Unit => Err(syn::Error::new_spanned(
                input,
                "Additive cannot be derived for unit structs",
            )),
        },
        Data::Enum(_) => Err(syn::Error::new_spanned(
            input,
            "Additive can only be derived for structs, not enums",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            "Additive can only be derived for structs, not unions",
        )),
    }
}

/// Parses the container-level `#[additive(sealed)]` flag.
fn parse_container_attrs(input: &DeriveInput) -> syn::Result<bool> {
    let mut sealed = false;
    for attr in &input.attrs {
        if !attr.path().is_ident("additive") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("sealed") {
                sealed = true;
                Ok(())
            } else {
                Err(meta.error("unrecognized additive attribute, expected `sealed`"))
            }
        })?;
    }
    Ok(sealed)
}

/// Parses the field-level `#[additive(default [= expr], frozen)]` attribute.
fn parse_field_attrs(field: &Field) -> syn::Result<(bool, Option<Expr>, bool)> {
    let mut has_default = false;
    let mut default = None;
    let mut frozen = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("additive") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                if has_default {
                    return Err(meta.error("duplicate `default` attribute"));
                }
                has_default = true;
                if meta.input.peek(Token![=]) {
                    default = Some(meta.value()?.parse()?);
                }
                Ok(())
            } else if meta.path.is_ident("frozen") {
                frozen = true;
                Ok(())
            } else {
                Err(meta.error("unrecognized additive attribute, expected `default` or `frozen`"))
            }
        })?;
    }

    Ok((has_default, default, frozen))
}

/// Checks if a type is `Option<T>` and extracts the inner type T.
fn option_inner_type(ty: &Type) -> Option<Type> {
    if let Type::Path(type_path) = ty {
        if type_path.qself.is_none() {
            if let Some(segment) = type_path.path.segments.last() {
                if segment.ident == "Option" {
                    if let PathArguments::AngleBracketed(args) = &segment.arguments {
                        if let Some(GenericArgument::Type(inner_ty)) = args.args.first() {
                            return Some(inner_ty.clone());
                        }
                    }
                }
            }
        }
    }
    None
}
