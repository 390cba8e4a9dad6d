use std::sync::Arc;

use smallvec::SmallVec;

use crate::{
    element::{AnyElement, IntoElement, Node, RenderOnce},
    theme::{Theme, ThemeContext, ThemeSetter},
};

/// Makes a theme available to everything rendered inside it.
///
/// Without an explicit theme the provider supplies the default theme, even
/// when nested in a provider with a custom one. The provider renders no
/// element of its own; its children are returned as a fragment.
pub struct ThemeProvider {
    theme: Option<Arc<Theme>>,
    on_set_theme: Option<ThemeSetter>,
    children: SmallVec<[AnyElement; 2]>,
}

impl ThemeProvider {
    pub fn new() -> Self {
        Self {
            theme: None,
            on_set_theme: None,
            children: SmallVec::new(),
        }
    }

    pub fn theme(mut self, theme: impl Into<Arc<Theme>>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Installs the setter descendants reach through [`ThemeContext::set_theme`].
    pub fn on_set_theme(mut self, on_set_theme: ThemeSetter) -> Self {
        self.on_set_theme = Some(on_set_theme);
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn children<E: IntoElement>(mut self, children: impl IntoIterator<Item = E>) -> Self {
        self.children
            .extend(children.into_iter().map(IntoElement::into_any_element));
        self
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for ThemeProvider {
    fn render(self, cx: &ThemeContext) -> Node {
        let theme = self.theme.unwrap_or_else(Theme::default_theme);

        let mut scope = cx.provide(theme);
        if let Some(on_set_theme) = self.on_set_theme {
            scope = scope.with_setter(on_set_theme);
        }

        tracing::debug!(depth = scope.depth(), "rendering theme scope");

        Node::Fragment(
            self.children
                .into_iter()
                .map(|child| child.render(&scope))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::element::{AnyElement, Element};

    /// Renders a `<span>` whose text is the active primary color.
    fn primary_probe(id: &'static str) -> AnyElement {
        AnyElement::new(move |cx| {
            Element::new("span")
                .attr("id", id)
                .child(cx.theme().colors.primary.clone())
                .into()
        })
    }

    fn themed(primary: &str) -> Arc<Theme> {
        Arc::new(
            Theme::default_theme()
                .merged(&json!({ "colors": { "primary": primary } }))
                .unwrap(),
        )
    }

    fn probe_text(node: &Node, id: &str) -> String {
        node.find(&|e: &Element| e.get_attribute("id") == Some(id))
            .map(Element::text_content)
            .unwrap_or_default()
    }

    #[test]
    fn test_unprovided_probe_reads_default() {
        let node = primary_probe("probe").render(&ThemeContext::root());
        assert_eq!(probe_text(&node, "probe"), "#2563EB");
    }

    #[test]
    fn test_provider_without_theme_supplies_default() {
        let node = ThemeProvider::new()
            .child(AnyElement::new(|cx| {
                let same = Arc::ptr_eq(cx.theme(), &Theme::default_theme());
                Node::Text(same.to_string())
            }))
            .render(&ThemeContext::root());

        assert_eq!(node.text_content(), "true");
    }

    #[test]
    fn test_nested_provider_scopes_are_tree_local() {
        let node = ThemeProvider::new()
            .theme(themed("#000002"))
            .child(primary_probe("outer-before"))
            .child(
                ThemeProvider::new()
                    .theme(themed("#000001"))
                    .child(primary_probe("inner")),
            )
            .child(primary_probe("outer-after"))
            .render(&ThemeContext::root());

        assert_eq!(probe_text(&node, "inner"), "#000001");
        assert_eq!(probe_text(&node, "outer-before"), "#000002");
        assert_eq!(probe_text(&node, "outer-after"), "#000002");
    }

    #[test]
    fn test_provider_renders_no_wrapper() {
        let node = ThemeProvider::new()
            .children(["a", "b"])
            .render(&ThemeContext::root());

        assert!(node.as_element().is_none());
        assert_eq!(node.to_html(), "ab");
    }
}
