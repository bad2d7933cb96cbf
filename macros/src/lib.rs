use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident};

/// Fields every standard error record has to declare, all `Option<String>`.
const FIELDS: [&str; 4] = [
    "description",
    "failure_reason",
    "recovery_suggestion",
    "help_anchor",
];

/// Derives `outcome::error::StandardError` together with `Display`,
/// `std::error::Error` and the constructor/builder methods.
///
/// ```ignore
/// #[derive(Debug, Clone, StandardError)]
/// #[standard_error(universal)]
/// pub struct UniversalError {
///     description: Option<String>,
///     failure_reason: Option<String>,
///     recovery_suggestion: Option<String>,
///     help_anchor: Option<String>,
/// }
/// ```
#[proc_macro_derive(StandardError, attributes(standard_error))]
pub fn derive_standard_error(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = input.ident;
    let kind = error_kind(&input.attrs, &name)?;
    check_fields(&input.data, &name)?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Creates the error with a human-readable description.
            pub fn new(description: impl Into<String>) -> Self {
                Self {
                    description: Some(description.into()),
                    failure_reason: None,
                    recovery_suggestion: None,
                    help_anchor: None,
                }
            }

            pub fn with_failure_reason(mut self, reason: impl Into<String>) -> Self {
                self.failure_reason = Some(reason.into());
                self
            }

            pub fn with_recovery_suggestion(mut self, suggestion: impl Into<String>) -> Self {
                self.recovery_suggestion = Some(suggestion.into());
                self
            }

            pub fn with_help_anchor(mut self, anchor: impl Into<String>) -> Self {
                self.help_anchor = Some(anchor.into());
                self
            }
        }

        impl #impl_generics ::outcome::error::StandardError for #name #ty_generics #where_clause {
            const KIND: ::outcome::error::ErrorKind = ::outcome::error::ErrorKind::#kind;

            fn error_description(&self) -> Option<&str> {
                self.description.as_deref()
            }

            fn failure_reason(&self) -> Option<&str> {
                self.failure_reason.as_deref()
            }

            fn recovery_suggestion(&self) -> Option<&str> {
                self.recovery_suggestion.as_deref()
            }

            fn help_anchor(&self) -> Option<&str> {
                self.help_anchor.as_deref()
            }
        }

        impl #impl_generics ::std::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match (&self.description, &self.failure_reason) {
                    (Some(description), _) => f.write_str(description),
                    (None, Some(reason)) => f.write_str(reason),
                    (None, None) => ::std::fmt::Display::fmt(&::outcome::error::ErrorKind::#kind, f),
                }
            }
        }

        impl #impl_generics ::std::error::Error for #name #ty_generics #where_clause {}
    })
}

/// Reads `#[standard_error(unexpected)]` or `#[standard_error(universal)]`
/// and returns the matching `ErrorKind` variant name.
fn error_kind(attrs: &[Attribute], name: &Ident) -> syn::Result<Ident> {
    let attr = attrs
        .iter()
        .find(|attr| attr.path.is_ident("standard_error"))
        .ok_or_else(|| {
            syn::Error::new(
                name.span(),
                "missing `#[standard_error(unexpected)]` or `#[standard_error(universal)]`",
            )
        })?;

    let kind: Ident = attr.parse_args()?;
    match kind.to_string().as_str() {
        "unexpected" => Ok(Ident::new("Unexpected", kind.span())),
        "universal" => Ok(Ident::new("Universal", kind.span())),
        _ => Err(syn::Error::new(
            kind.span(),
            "expected `unexpected` or `universal`",
        )),
    }
}

fn check_fields(data: &Data, name: &Ident) -> syn::Result<()> {
    let fields = match data {
        Data::Struct(data) => match data.fields {
            Fields::Named(ref fields) => &fields.named,
            Fields::Unit | Fields::Unnamed(_) => {
                return Err(syn::Error::new(
                    name.span(),
                    "StandardError can only be derived for structs with named fields",
                ))
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new(
                name.span(),
                "StandardError can only be derived for structs",
            ))
        }
    };

    for expected in FIELDS {
        let declared = fields
            .iter()
            .any(|field| field.ident.as_ref().map_or(false, |ident| ident == expected));
        if !declared {
            return Err(syn::Error::new(
                name.span(),
                format!("missing `{}: Option<String>` field", expected),
            ));
        }
    }

    if fields.len() != FIELDS.len() {
        return Err(syn::Error::new(
            name.span(),
            "standard errors carry only description, failure_reason, recovery_suggestion and help_anchor",
        ));
    }

    Ok(())
}
