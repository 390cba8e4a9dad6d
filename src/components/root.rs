use std::{cell::RefCell, fmt, rc::Rc, sync::Arc};

use crate::{
    element::{IntoElement, Node, RenderOnce},
    theme::{StyleVariables, Theme, ThemeContext, ThemeExt, ThemeProjector, ThemeProvider},
};

/// The output of one [`Root::render`] pass.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub body: Node,
    /// The `:root` rule holding every projected style variable.
    pub root_css: String,
    /// Whether this pass ran the theme projection.
    pub projected: bool,
}

impl RenderedDocument {
    /// The style block followed by the body markup.
    pub fn to_html(&self) -> String {
        format!("<style>\n{}</style>\n{}", self.root_css, self.body)
    }
}

/// Root is the top-level owner of the active theme and the global style variables.
///
/// Every [`Root::render`] projects the theme onto the variables if its identity
/// changed since the last pass, then renders the child inside a
/// [`ThemeProvider`]. Components can request another theme through
/// [`ThemeContext::set_theme`]; the request takes effect on the next pass.
///
/// # Example
///
/// ```
/// use custom_ui::{components::{Button, Root}, theme::ColorVariant};
///
/// let mut root = Root::new();
/// let document = root.render(Button::new("Save").variant(ColorVariant::Success));
///
/// assert!(document.projected);
/// assert!(document.root_css.contains("--color-success: #16A34A;"));
/// ```
pub struct Root {
    theme: Arc<Theme>,
    requested: Rc<RefCell<Option<Arc<Theme>>>>,
    variables: StyleVariables,
    projector: ThemeProjector,
}

impl Root {
    /// Creates a Root with the bundled default theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::default_theme())
    }

    pub fn with_theme(theme: impl Into<Arc<Theme>>) -> Self {
        Self {
            theme: theme.into(),
            requested: Rc::new(RefCell::new(None)),
            variables: StyleVariables::new(),
            projector: ThemeProjector::new(),
        }
    }

    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    /// Replaces the root theme. Any pending request from inside the tree is dropped.
    pub fn set_theme(&mut self, theme: impl Into<Arc<Theme>>) {
        self.theme = theme.into();
        self.requested.borrow_mut().take();
    }

    pub fn variables(&self) -> &StyleVariables {
        &self.variables
    }

    pub fn projector(&self) -> &ThemeProjector {
        &self.projector
    }

    /// Renders `child` with the active theme, projecting it first when needed.
    pub fn render(&mut self, child: impl IntoElement) -> RenderedDocument {
        if let Some(requested) = self.requested.borrow_mut().take() {
            tracing::debug!("switching to requested theme");
            self.theme = requested;
        }

        let projected = self.projector.apply(&self.theme, &mut self.variables);

        let requested = Rc::clone(&self.requested);
        let provider = ThemeProvider::new()
            .theme(Arc::clone(&self.theme))
            .on_set_theme(Rc::new(move |theme: Arc<Theme>| {
                *requested.borrow_mut() = Some(theme);
            }))
            .child(child);

        RenderedDocument {
            body: provider.render(&ThemeContext::root()),
            root_css: self.variables.to_css(),
            projected,
        }
    }
}

impl Default for Root {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeExt for Root {
    fn get_theme(&self) -> &Theme {
        &self.theme
    }
}

impl fmt::Debug for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Root")
            .field("variables", &self.variables.len())
            .field("projections", &self.projector.runs())
            .finish_non_exhaustive()
    }
}
