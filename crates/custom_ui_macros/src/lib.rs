use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Meta, Type, parse_macro_input, spanned::Spanned};

/// Derives `resolve(&self, theme: &Theme) -> &T` for an enum of token names.
///
/// The enum carries `#[field(T)]` naming the resolved type, and every variant
/// carries `#[theme(path)]` naming the field of `custom_ui_theme::Theme` it reads.
///
/// ```ignore
/// #[derive(IntoThemeField)]
/// #[field(String)]
/// pub enum SpacingKind {
///     #[theme(spacing.sm)]
///     Sm,
///     #[theme(spacing.md)]
///     Md,
/// }
/// ```
#[proc_macro_derive(IntoThemeField, attributes(theme, field))]
pub fn into_theme_field_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "#[derive(IntoThemeField)] can only be used on enums",
        ));
    };

    let field_type = get_enum_field_type(&input)?;

    let mut variant_matches = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "#[derive(IntoThemeField)] only supports unit variants",
            ));
        }

        let ident = &variant.ident;
        let field_path = get_theme_expr(&variant.ident, &variant.attrs)?;

        variant_matches.push(quote! {
            #name::#ident => &theme.#field_path,
        });
    }

    Ok(quote! {
        impl #name {
            pub fn resolve<'a>(&self, theme: &'a ::custom_ui_theme::Theme) -> &'a #field_type {
                match self {
                    #(#variant_matches)*
                }
            }
        }
    })
}

fn get_theme_expr(variant: &syn::Ident, attrs: &[Attribute]) -> syn::Result<Expr> {
    let theme_attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("theme"))
        .ok_or_else(|| {
            syn::Error::new(variant.span(), "variant is missing a #[theme(...)] attribute")
        })?;

    match &theme_attr.meta {
        Meta::List(list) => syn::parse2(list.tokens.clone()),
        other => Err(syn::Error::new(other.span(), "#[theme(...)] must be a list")),
    }
}

fn get_enum_field_type(input: &DeriveInput) -> syn::Result<Type> {
    let field_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("field"))
        .ok_or_else(|| {
            syn::Error::new(input.ident.span(), "enum is missing a #[field(...)] attribute")
        })?;

    match &field_attr.meta {
        Meta::List(meta_list) => syn::parse2::<Type>(meta_list.tokens.clone()),
        other => Err(syn::Error::new(
            other.span(),
            "#[field(...)] must be a list, like #[field(String)]",
        )),
    }
}
