use std::{
    fmt,
    ops::Deref,
    sync::{Arc, LazyLock},
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    ThemeError,
    deserializers::{de_css_length, de_font_family, de_font_weight},
    merge::deep_merge,
};

/// The full token set: colors, type scale, spacing, radii, shadows and breakpoints.
///
/// A `Theme` is never mutated once built. Overriding parts of it produces a new
/// value (see [`Theme::merged`]), which is usually shared as `Arc<Theme>` so
/// consumers can tell two themes apart by identity.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: ThemeColors,
    pub typography: ThemeTypography,
    pub spacing: SizeScale,
    pub border_radius: SizeScale,
    pub box_shadow: SizeScale,
    pub breakpoints: SizeScale,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLockTheme = LazyLockTheme::new(|| {
                Arc::new(
                    Theme::from_json_str(include_str!($path))
                        .expect(concat!("bundled theme `", $path, "` is valid")),
                )
            });
        )+
    };
}

generate_builtin_themes!(["../themes/default.json", DEFAULT_THEME]);

/// A bundled theme, parsed on first access and shared afterwards.
pub struct LazyLockTheme(LazyLock<Arc<Theme>>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Arc<Theme>) -> Self {
        Self(LazyLock::new(f))
    }

    /// Returns a handle to the shared instance. Every call points at the same allocation.
    pub fn shared(&self) -> Arc<Theme> {
        Arc::clone(&self.0)
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    /// The bundled default theme.
    pub fn default_theme() -> Arc<Theme> {
        DEFAULT_THEME.shared()
    }

    pub fn from_json_str<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        let theme = serde_json::from_str(str.as_ref())?;
        Ok(theme)
    }

    pub fn to_json_value(&self) -> Result<Value, ThemeError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Returns a copy of this theme with `overrides` deep-merged on top.
    ///
    /// `overrides` is a partial theme document. Nested objects are merged key by
    /// key, `null` leaves the existing value in place and anything else replaces it.
    pub fn merged(&self, overrides: &Value) -> Result<Theme, ThemeError> {
        if !overrides.is_object() {
            return Err(ThemeError::InvalidOverride(json_kind(overrides)));
        }

        let mut value = self.to_json_value()?;
        deep_merge(&mut value, overrides);

        let theme = serde_json::from_value(value)?;
        tracing::debug!("built theme from overrides");
        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME.deref().clone()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Names of the colors every theme has to define, in projection order.
pub const BASE_COLOR_KEYS: [&str; 9] = [
    "primary",
    "secondary",
    "success",
    "danger",
    "warning",
    "info",
    "light",
    "dark",
    "disabled",
];

/// Semantic colors. The nine base colors are required, any other key is kept in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub danger: String,
    pub warning: String,
    pub info: String,
    pub light: String,
    pub dark: String,
    pub disabled: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,
}

impl ThemeColors {
    pub fn get(&self, name: &str) -> Option<&str> {
        let color = match name {
            "primary" => &self.primary,
            "secondary" => &self.secondary,
            "success" => &self.success,
            "danger" => &self.danger,
            "warning" => &self.warning,
            "info" => &self.info,
            "light" => &self.light,
            "dark" => &self.dark,
            "disabled" => &self.disabled,
            _ => return self.extra.get(name).map(String::as_str),
        };

        Some(color.as_str())
    }

    /// Base colors in [`BASE_COLOR_KEYS`] order, followed by the extra colors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let base = [
            &self.primary,
            &self.secondary,
            &self.success,
            &self.danger,
            &self.warning,
            &self.info,
            &self.light,
            &self.dark,
            &self.disabled,
        ];

        BASE_COLOR_KEYS
            .into_iter()
            .zip(base.map(String::as_str))
            .chain(
                self.extra
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            )
    }

    pub fn len(&self) -> usize {
        BASE_COLOR_KEYS.len() + self.extra.len()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTypography {
    #[serde(deserialize_with = "de_font_family")]
    pub font_family: String,
    pub font_size: SizeScale,
    pub font_weight: FontWeights,
    pub line_height: SizeScale,
}

/// The fixed size keys shared by every scale in a theme.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SizeKey {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl SizeKey {
    pub const ALL: [SizeKey; 6] = [
        SizeKey::Xs,
        SizeKey::Sm,
        SizeKey::Md,
        SizeKey::Lg,
        SizeKey::Xl,
        SizeKey::Xxl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeKey::Xs => "xs",
            SizeKey::Sm => "sm",
            SizeKey::Md => "md",
            SizeKey::Lg => "lg",
            SizeKey::Xl => "xl",
            SizeKey::Xxl => "xxl",
        }
    }
}

impl fmt::Display for SizeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value per [`SizeKey`]. Values are CSS lengths but are treated as opaque strings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SizeScale {
    #[serde(deserialize_with = "de_css_length")]
    pub xs: String,
    #[serde(deserialize_with = "de_css_length")]
    pub sm: String,
    #[serde(deserialize_with = "de_css_length")]
    pub md: String,
    #[serde(deserialize_with = "de_css_length")]
    pub lg: String,
    #[serde(deserialize_with = "de_css_length")]
    pub xl: String,
    #[serde(deserialize_with = "de_css_length")]
    pub xxl: String,
}

impl SizeScale {
    pub fn get(&self, key: SizeKey) -> &str {
        match key {
            SizeKey::Xs => &self.xs,
            SizeKey::Sm => &self.sm,
            SizeKey::Md => &self.md,
            SizeKey::Lg => &self.lg,
            SizeKey::Xl => &self.xl,
            SizeKey::Xxl => &self.xxl,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SizeKey, &str)> {
        SizeKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FontWeightKey {
    Light,
    Regular,
    Medium,
    Bold,
}

impl FontWeightKey {
    pub const ALL: [FontWeightKey; 4] = [
        FontWeightKey::Light,
        FontWeightKey::Regular,
        FontWeightKey::Medium,
        FontWeightKey::Bold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeightKey::Light => "light",
            FontWeightKey::Regular => "regular",
            FontWeightKey::Medium => "medium",
            FontWeightKey::Bold => "bold",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct FontWeights {
    #[serde(deserialize_with = "de_font_weight")]
    pub light: u16,
    #[serde(deserialize_with = "de_font_weight")]
    pub regular: u16,
    #[serde(deserialize_with = "de_font_weight")]
    pub medium: u16,
    #[serde(deserialize_with = "de_font_weight")]
    pub bold: u16,
}

impl FontWeights {
    pub fn get(&self, key: FontWeightKey) -> u16 {
        match key {
            FontWeightKey::Light => self.light,
            FontWeightKey::Regular => self.regular,
            FontWeightKey::Medium => self.medium,
            FontWeightKey::Bold => self.bold,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FontWeightKey, u16)> + '_ {
        FontWeightKey::ALL
            .into_iter()
            .map(|key| (key, self.get(key)))
    }
}
