#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{fmt, str::FromStr};

use custom_ui_macros::IntoThemeField;
use enum_assoc::Assoc;

use crate::{ParseVariantError, theme::Theme, utils::color_for_variant};

/// Semantic style selector shared by every component.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
pub enum ColorVariant {
    /// Brand color for the main action.
    #[assoc(name = "primary")]
    Primary,
    /// Subtle, low emphasis elements.
    #[assoc(name = "secondary")]
    Secondary,
    #[assoc(name = "success")]
    Success,
    /// Errors and destructive actions.
    #[assoc(name = "danger")]
    Danger,
    #[assoc(name = "warning")]
    Warning,
    #[assoc(name = "info")]
    Info,
    #[assoc(name = "light")]
    Light,
    #[assoc(name = "dark")]
    Dark,
    /// Renders the component inert.
    #[assoc(name = "disabled")]
    Disabled,
}

impl ColorVariant {
    pub const ALL: [ColorVariant; 9] = [
        ColorVariant::Primary,
        ColorVariant::Secondary,
        ColorVariant::Success,
        ColorVariant::Danger,
        ColorVariant::Warning,
        ColorVariant::Info,
        ColorVariant::Light,
        ColorVariant::Dark,
        ColorVariant::Disabled,
    ];

    /// The color this variant maps to in `theme`.
    pub fn resolve<'a>(&self, theme: &'a Theme) -> &'a str {
        color_for_variant(theme, self.name())
    }
}

impl AsRef<str> for ColorVariant {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for ColorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| ParseVariantError::new("color variant", s))
    }
}

/// Component size variants.
///
/// Each size maps to the spacing and font size used for its padding and text.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn padding(&self) -> ThemeSpacingKind)]
#[func(pub fn text_size(&self) -> ThemeFontSizeKind)]
pub enum ComponentSize {
    #[assoc(name = "small")]
    #[assoc(padding = ThemeSpacingKind::Sm)]
    #[assoc(text_size = ThemeFontSizeKind::Sm)]
    Small,
    #[assoc(name = "medium")]
    #[assoc(padding = ThemeSpacingKind::Md)]
    #[assoc(text_size = ThemeFontSizeKind::Md)]
    Medium,
    #[assoc(name = "large")]
    #[assoc(padding = ThemeSpacingKind::Lg)]
    #[assoc(text_size = ThemeFontSizeKind::Lg)]
    Large,
}

impl ComponentSize {
    pub const ALL: [ComponentSize; 3] = [
        ComponentSize::Small,
        ComponentSize::Medium,
        ComponentSize::Large,
    ];
}

impl fmt::Display for ComponentSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentSize {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.name() == s)
            .ok_or_else(|| ParseVariantError::new("size", s))
    }
}

/// Spacing values from `theme.spacing`.
#[derive(IntoThemeField, Debug, Clone, Copy, PartialEq, Eq)]
#[field(String)]
pub enum ThemeSpacingKind {
    #[theme(spacing.xs)]
    Xs,
    #[theme(spacing.sm)]
    Sm,
    #[theme(spacing.md)]
    Md,
    #[theme(spacing.lg)]
    Lg,
    #[theme(spacing.xl)]
    Xl,
    #[theme(spacing.xxl)]
    Xxl,
}

/// Corner radii from `theme.border_radius`.
#[derive(IntoThemeField, Debug, Clone, Copy, PartialEq, Eq)]
#[field(String)]
pub enum ThemeRadiusKind {
    #[theme(border_radius.xs)]
    Xs,
    #[theme(border_radius.sm)]
    Sm,
    #[theme(border_radius.md)]
    Md,
    #[theme(border_radius.lg)]
    Lg,
    #[theme(border_radius.xl)]
    Xl,
    #[theme(border_radius.xxl)]
    Xxl,
}

/// Text sizes from `theme.typography.font_size`.
#[derive(IntoThemeField, Debug, Clone, Copy, PartialEq, Eq)]
#[field(String)]
pub enum ThemeFontSizeKind {
    #[theme(typography.font_size.xs)]
    Xs,
    #[theme(typography.font_size.sm)]
    Sm,
    #[theme(typography.font_size.md)]
    Md,
    #[theme(typography.font_size.lg)]
    Lg,
    #[theme(typography.font_size.xl)]
    Xl,
    #[theme(typography.font_size.xxl)]
    Xxl,
}

impl ThemeFontSizeKind {
    /// The line height paired with this text size.
    pub fn line_height(&self) -> ThemeLineHeightKind {
        match self {
            Self::Xs => ThemeLineHeightKind::Xs,
            Self::Sm => ThemeLineHeightKind::Sm,
            Self::Md => ThemeLineHeightKind::Md,
            Self::Lg => ThemeLineHeightKind::Lg,
            Self::Xl => ThemeLineHeightKind::Xl,
            Self::Xxl => ThemeLineHeightKind::Xxl,
        }
    }
}

/// Line heights from `theme.typography.line_height`.
#[derive(IntoThemeField, Debug, Clone, Copy, PartialEq, Eq)]
#[field(String)]
pub enum ThemeLineHeightKind {
    #[theme(typography.line_height.xs)]
    Xs,
    #[theme(typography.line_height.sm)]
    Sm,
    #[theme(typography.line_height.md)]
    Md,
    #[theme(typography.line_height.lg)]
    Lg,
    #[theme(typography.line_height.xl)]
    Xl,
    #[theme(typography.line_height.xxl)]
    Xxl,
}

/// Font weights from `theme.typography.font_weight`.
#[derive(IntoThemeField, Debug, Clone, Copy, PartialEq, Eq)]
#[field(u16)]
pub enum ThemeFontWeightKind {
    #[theme(typography.font_weight.light)]
    Light,
    #[theme(typography.font_weight.regular)]
    Regular,
    #[theme(typography.font_weight.medium)]
    Medium,
    #[theme(typography.font_weight.bold)]
    Bold,
}
