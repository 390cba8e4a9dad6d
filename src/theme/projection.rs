use std::{fmt::Write, sync::Arc};

use indexmap::IndexMap;

use crate::theme::Theme;

/// A store of CSS custom properties, the stand-in for a document's root style.
///
/// Writes are last-write-wins and keep first-insertion order, so rendering the
/// store as CSS is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleVariables {
    properties: IndexMap<String, String>,
}

impl StyleVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` (including the leading `--`) to `value`.
    ///
    /// A name that is not a custom property, or a value that could close the
    /// declaration or the surrounding `<style>` block, is dropped and the
    /// previous value is kept. Returns whether the write happened.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let (name, value) = (name.into(), value.into());

        if !is_custom_property_name(&name) {
            tracing::warn!(%name, "ignoring invalid custom property name");
            return false;
        }
        if !is_safe_value(&value) {
            tracing::warn!(%name, %value, "ignoring unsafe custom property value");
            return false;
        }

        self.properties.insert(name, value);
        true
    }

    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.properties.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Renders the store as a `:root` rule.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

fn is_custom_property_name(name: &str) -> bool {
    name.strip_prefix("--").is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

fn is_safe_value(value: &str) -> bool {
    !value
        .chars()
        .any(|c| matches!(c, '<' | '>' | '{' | '}' | ';') || c.is_control())
}

/// Writes the theme's colors, font family, font sizes and font weights to `target`.
///
/// Colors become `--color-<name>`, the family `--font-family`, sizes
/// `--font-size-<key>` and weights `--font-weight-<key>`. Running it twice with
/// the same theme leaves `target` unchanged.
pub fn project_theme(theme: &Theme, target: &mut StyleVariables) {
    for (name, color) in theme.colors.iter() {
        target.set_property(format!("--color-{name}"), color);
    }

    target.set_property("--font-family", theme.typography.font_family.as_str());

    for (key, size) in theme.typography.font_size.iter() {
        target.set_property(format!("--font-size-{key}"), size);
    }

    for (key, weight) in theme.typography.font_weight.iter() {
        target.set_property(format!("--font-weight-{}", key.as_str()), weight.to_string());
    }

    tracing::trace!(variables = target.len(), "projected theme");
}

/// Runs [`project_theme`] only when the theme identity changes.
///
/// Identity is the `Arc` allocation, not structural equality: an equal theme
/// built separately is projected again, the same `Arc` is not.
#[derive(Debug, Default)]
pub struct ThemeProjector {
    applied: Option<Arc<Theme>>,
    runs: usize,
}

impl ThemeProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects `theme` onto `target` unless it was the last theme applied.
    ///
    /// Returns whether the projection ran.
    pub fn apply(&mut self, theme: &Arc<Theme>, target: &mut StyleVariables) -> bool {
        if self
            .applied
            .as_ref()
            .is_some_and(|applied| Arc::ptr_eq(applied, theme))
        {
            tracing::trace!("theme unchanged, skipping projection");
            return false;
        }

        project_theme(theme, target);
        self.applied = Some(Arc::clone(theme));
        self.runs += 1;

        tracing::debug!(runs = self.runs, "applied theme variables");
        true
    }

    pub fn applied(&self) -> Option<&Arc<Theme>> {
        self.applied.as_ref()
    }

    /// How many times the projection actually ran.
    pub fn runs(&self) -> usize {
        self.runs
    }
}
