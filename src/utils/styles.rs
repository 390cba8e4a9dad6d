use crate::{
    cn,
    theme::{ColorVariant, ComponentSize, SizeKey, Theme},
};

/// Formats `"<base_class>--<variant>"`.
///
/// An empty variant still yields `"<base_class>--"`; callers skip the call
/// when there is no variant.
pub fn variant_class(base_class: &str, variant: &str) -> String {
    format!("{base_class}--{variant}")
}

/// Looks up `variant` in the theme's colors.
///
/// Names the theme doesn't define, and colors defined as an empty string,
/// fall back to the primary color.
pub fn color_for_variant<'a>(theme: &'a Theme, variant: impl AsRef<str>) -> &'a str {
    theme
        .colors
        .get(variant.as_ref())
        .filter(|color| !color.is_empty())
        .unwrap_or(theme.colors.primary.as_str())
}

pub fn spacing(theme: &Theme, size: SizeKey) -> &str {
    theme.spacing.get(size)
}

pub fn border_radius(theme: &Theme, size: SizeKey) -> &str {
    theme.border_radius.get(size)
}

/// Builds the class list shared by all components:
/// base, variant, size, disabled state, then the caller's own classes.
pub fn component_class_name(
    base_class: &str,
    variant: Option<ColorVariant>,
    size: Option<ComponentSize>,
    is_disabled: bool,
    class_name: Option<&str>,
) -> String {
    cn!(
        base_class,
        variant.map(|variant| variant_class(base_class, variant.name())),
        size.map(|size| variant_class(base_class, size.name())),
        is_disabled.then(|| variant_class(base_class, "disabled")),
        class_name,
    )
}
