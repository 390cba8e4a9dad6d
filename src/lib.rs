//! Themeable presentational components that render to HTML.
//!
//! Components are builders implementing [`element::RenderOnce`]. They read
//! design tokens from the [`theme::ThemeContext`] they are rendered with, and
//! a [`components::Root`] mirrors the active theme onto CSS custom properties.

pub mod components;

pub mod element;

pub mod stories;

pub mod theme;

pub mod utils;

mod assets;
pub use assets::*;

mod error;
pub use error::ParseVariantError;
