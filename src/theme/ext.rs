use crate::theme::{Theme, ThemeContext};

/// Extension trait for reading the active theme.
pub trait ThemeExt {
    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;
}

impl ThemeExt for ThemeContext {
    fn get_theme(&self) -> &Theme {
        self.theme()
    }
}
