//! Code generation for the binary-compatible construction surface.
//!
//! This module uses the `quote` crate to emit the builder struct, the seeded
//! constructor entry points (`builder`, `new`, `with`), the `copy` operation
//! and the validated `build` step.

use crate::classify::{classify, Classification};
use crate::schema::{ClassSchema, ParameterSpec};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::DeriveInput;

/// Generates the complete construction surface for a struct.
pub fn impl_additive(input: &DeriveInput) -> syn::Result<TokenStream> {
    // Normalize the input and classify every parameter up front; both steps
    // reject malformed schemas before anything is emitted.
    let schema = ClassSchema::from_derive_input(input)?;
    let classified = schema
        .params
        .iter()
        .map(|param| classify(param).map(|class| (param, class)))
        .collect::<syn::Result<Vec<_>>>()?;

    let struct_name = &schema.name;
    let builder_name = format_ident!("{}Builder", struct_name);
    let vis = &schema.vis;

    // Generate builder struct
    let builder_struct = generate_builder_struct(&builder_name, &classified, vis);

    // Generate seeded entry points and the copy operation
    let constructors = generate_constructors(&schema, &builder_name, &classified);
    let copy_method = generate_copy_method(vis, &builder_name, &classified);

    // Generate setter methods and the validated build step
    let setter_methods = generate_setter_methods(&schema, &classified);
    let build_method = generate_build_method(struct_name, &classified);

    // Combine everything
    Ok(quote! {
        #builder_struct

        impl #struct_name {
            #constructors
            #copy_method
        }

        impl #builder_name {
            #setter_methods
            #build_method
        }
    })
}

/// Generates the builder struct definition.
///
/// Slots are private: the only way to observe or change them from outside
/// the defining module is through the generated setters and `build`.
fn generate_builder_struct(
    builder_name: &syn::Ident,
    classified: &[(&ParameterSpec, Classification)],
    vis: &syn::Visibility,
) -> TokenStream {
    let slots = classified.iter().map(|(param, _)| {
        let name = &param.name;
        let slot_ty = param.slot_type();
        quote! { #name: #slot_ty }
    });

    quote! {
        #vis struct #builder_name {
            #(#slots,)*
        }
    }
}

/// Generates `builder`, `new` and `with` on the target struct.
///
/// All three share the same seeding: mandatory slots from the arguments,
/// optional slots from their declared defaults. `new` and `with` add the
/// constructor-entry null checks before any mutation runs.
fn generate_constructors(
    schema: &ClassSchema,
    builder_name: &syn::Ident,
    classified: &[(&ParameterSpec, Classification)],
) -> TokenStream {
    let vis = &schema.vis;

    let mandatory_arg_tokens: Vec<TokenStream> = classified
        .iter()
        .filter(|(_, class)| class.is_mandatory())
        .map(|(param, _)| {
            let name = &param.name;
            let value_ty = param.setter_value_type();
            quote! { #name: impl ::std::convert::Into<::std::option::Option<#value_ty>> }
        })
        .collect();
    let mandatory_name_idents: Vec<&syn::Ident> = classified
        .iter()
        .filter(|(_, class)| class.is_mandatory())
        .map(|(param, _)| &param.name)
        .collect();
    let mandatory_args = &mandatory_arg_tokens;
    let mandatory_names = &mandatory_name_idents;

    let seeds = classified
        .iter()
        .map(|(param, class)| generate_default_seed(param, *class));

    let entry_checks = generate_entry_checks(classified);

    quote! {
        #vis fn builder(#(#mandatory_args),*) -> #builder_name {
            #builder_name {
                #(#seeds,)*
            }
        }

        #vis fn new(#(#mandatory_args),*) -> ::std::result::Result<Self, ::additive::ValidationError> {
            Self::with(#(#mandatory_names,)* |_| {})
        }

        #vis fn with(
            #(#mandatory_args,)*
            mutate: impl ::std::ops::FnOnce(&mut #builder_name),
        ) -> ::std::result::Result<Self, ::additive::ValidationError> {
            let mut builder = Self::builder(#(#mandatory_names),*);
            #(#entry_checks)*
            mutate(&mut builder);
            builder.build()
        }
    }
}

/// Generates one seed expression for the default-seeded entry points.
fn generate_default_seed(param: &ParameterSpec, class: Classification) -> TokenStream {
    let name = &param.name;
    match (class.is_mandatory(), &param.default) {
        // Mandatory slots take the constructor argument.
        (true, _) => quote! { #name: #name.into() },
        // Nullable defaults are stored as the working value itself.
        (false, Some(default)) if class.is_nullable() => {
            quote! { #name: ::std::convert::Into::into(#default) }
        }
        // Non-nullable defaults are wrapped: the slot is never pending-null.
        (false, Some(default)) => {
            quote! { #name: ::std::option::Option::Some(::std::convert::Into::into(#default)) }
        }
        // A bare default is a null default; classification only lets this
        // through for nullable parameters.
        (false, None) => quote! { #name: ::std::option::Option::None },
    }
}

/// Generates the constructor-entry validation: every mandatory non-nullable
/// argument that arrived as null fails before the mutation callback runs.
fn generate_entry_checks(classified: &[(&ParameterSpec, Classification)]) -> Vec<TokenStream> {
    classified
        .iter()
        .filter(|(_, class)| *class == Classification::MandatoryNonNullable)
        .map(|(param, _)| {
            let name = &param.name;
            let name_str = name.to_string();
            quote! {
                if builder.#name.is_none() {
                    return ::std::result::Result::Err(
                        ::additive::ValidationError::NullArgument(#name_str),
                    );
                }
            }
        })
        .collect()
}

/// Generates the `copy` operation: a builder seeded from the current field
/// values, the mutation callback, then the validated build step. The source
/// instance is only ever borrowed immutably.
fn generate_copy_method(
    vis: &syn::Visibility,
    builder_name: &syn::Ident,
    classified: &[(&ParameterSpec, Classification)],
) -> TokenStream {
    let copy_seeds = classified.iter().map(|(param, class)| {
        let name = &param.name;
        if class.is_nullable() {
            quote! { #name: ::std::clone::Clone::clone(&self.#name) }
        } else {
            quote! { #name: ::std::option::Option::Some(::std::clone::Clone::clone(&self.#name)) }
        }
    });

    quote! {
        #vis fn copy(
            &self,
            mutate: impl ::std::ops::FnOnce(&mut #builder_name),
        ) -> ::std::result::Result<Self, ::additive::ValidationError> {
            let mut builder = #builder_name {
                #(#copy_seeds,)*
            };
            mutate(&mut builder);
            builder.build()
        }
    }
}

/// Generates the setter methods.
///
/// A setter is dropped for `frozen` parameters, and for mandatory
/// non-nullable parameters of a sealed owner with no optional parameters at
/// all; in that degenerate case the builder ends up with no setters and
/// `copy` can only reproduce the source.
fn generate_setter_methods(
    schema: &ClassSchema,
    classified: &[(&ParameterSpec, Classification)],
) -> TokenStream {
    let identity_only = schema.sealed && !schema.has_optional();

    let setters = classified
        .iter()
        .filter(|(param, class)| {
            let suppressed = param.frozen
                || (*class == Classification::MandatoryNonNullable && identity_only);
            !suppressed
        })
        .map(|(param, _)| {
            let name = &param.name;
            let setter_name = format_ident!("set_{}", name);
            let value_ty = param.setter_value_type();

            // Setters never validate; a null on a non-nullable slot is
            // deferred to build.
            quote! {
                pub fn #setter_name(
                    &mut self,
                    value: impl ::std::convert::Into<::std::option::Option<#value_ty>>,
                ) -> &mut Self {
                    self.#name = value.into();
                    self
                }
            }
        });

    quote! {
        #(#setters)*
    }
}

/// Generates the `build` method: re-validates every non-nullable slot after
/// mutation, then produces the instance. Consuming `self` makes the builder
/// single-use.
fn generate_build_method(
    struct_name: &syn::Ident,
    classified: &[(&ParameterSpec, Classification)],
) -> TokenStream {
    let field_values = classified.iter().map(|(param, class)| {
        let name = &param.name;
        let name_str = name.to_string();

        if class.is_nullable() {
            // Nullable slots are the value; null is legal here.
            quote! { #name: self.#name }
        } else {
            quote! {
                #name: self.#name.ok_or(::additive::ValidationError::NullField(#name_str))?
            }
        }
    });

    quote! {
        pub fn build(self) -> ::std::result::Result<#struct_name, ::additive::ValidationError> {
            ::std::result::Result::Ok(#struct_name {
                #(#field_values,)*
            })
        }
    }
}
