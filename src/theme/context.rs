use std::{fmt, rc::Rc, sync::Arc};

use crate::theme::Theme;

/// Callback that asks the owner of a scope to switch to another theme.
pub type ThemeSetter = Rc<dyn Fn(Arc<Theme>)>;

/// Whether any provider encloses a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeState {
    /// No provider above; the default theme is active.
    Unprovided,
    /// The nearest enclosing provider supplies the theme.
    Provided,
}

/// The theme scope a component renders in.
///
/// Contexts are cheap to clone and never mutated: entering a provider creates
/// a child context with [`ThemeContext::provide`], which shadows its parent only
/// for the subtree rendered with it.
#[derive(Clone)]
pub struct ThemeContext {
    theme: Arc<Theme>,
    state: ScopeState,
    depth: usize,
    set_theme: Option<ThemeSetter>,
}

impl ThemeContext {
    /// The scope outside of every provider.
    pub fn root() -> Self {
        Self {
            theme: Theme::default_theme(),
            state: ScopeState::Unprovided,
            depth: 0,
            set_theme: None,
        }
    }

    /// Creates the scope of a provider nested in this one.
    pub fn provide(&self, theme: Arc<Theme>) -> Self {
        Self {
            theme,
            state: ScopeState::Provided,
            depth: self.depth + 1,
            set_theme: None,
        }
    }

    pub fn with_setter(mut self, set_theme: ThemeSetter) -> Self {
        self.set_theme = Some(set_theme);
        self
    }

    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    pub fn state(&self) -> ScopeState {
        self.state
    }

    pub fn is_provided(&self) -> bool {
        self.state == ScopeState::Provided
    }

    /// Number of providers enclosing this scope.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn theme_setter(&self) -> Option<ThemeSetter> {
        self.set_theme.clone()
    }

    /// Forwards `theme` to the scope's setter, if the provider installed one.
    pub fn set_theme(&self, theme: Arc<Theme>) -> bool {
        match &self.set_theme {
            Some(set_theme) => {
                set_theme(theme);
                true
            }
            None => false,
        }
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("state", &self.state)
            .field("depth", &self.depth)
            .field("has_setter", &self.set_theme.is_some())
            .finish_non_exhaustive()
    }
}

/// Returns the active theme of `cx`.
pub fn use_theme(cx: &ThemeContext) -> Arc<Theme> {
    Arc::clone(cx.theme())
}
