//! Theme system: design tokens, their distribution down the render tree, and
//! their projection onto CSS custom properties.
//!
//! Themes are plain immutable values shared as `Arc<Theme>`. A
//! [`ThemeProvider`] scopes a theme to its children by handing them a child
//! [`ThemeContext`]; nothing is stored globally. [`ThemeProjector`] mirrors the
//! active theme onto a [`StyleVariables`] store for plain stylesheets.

pub use custom_ui_theme::*;

mod context;
pub use context::*;

mod provider;
pub use provider::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod projection;
pub use projection::*;
