use std::rc::Rc;

use smallvec::SmallVec;

use crate::{
    cn,
    components::Button,
    element::{AnyElement, Attribute, ClickHandler, Element, IntoElement, Node, RenderOnce, div},
    theme::{ColorVariant, ComponentSize, ThemeContext, ThemeExt, ThemeRadiusKind},
    utils::{color_for_variant, component_class_name, generate_id},
};

/// A bordered container with a title, a body and an action button.
///
/// The border color follows the active theme's color for the card's variant,
/// and the footer button shares the card's variant and disabled state.
pub struct Card {
    id: Option<String>,
    title: String,
    variant: ColorVariant,
    size: Option<ComponentSize>,
    disabled: bool,
    class_name: Option<String>,
    header_class: Option<String>,
    title_class: Option<String>,
    body_class: Option<String>,
    footer_class: Option<String>,
    button_class: Option<String>,
    background_color: Option<String>,
    style: Option<String>,
    action_label: String,
    on_action: Option<ClickHandler>,
    attributes: SmallVec<[Attribute; 2]>,
    children: SmallVec<[AnyElement; 2]>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            id: None,
            title: "Card Title".to_owned(),
            variant: ColorVariant::Primary,
            size: None,
            disabled: false,
            class_name: None,
            header_class: None,
            title_class: None,
            body_class: None,
            footer_class: None,
            button_class: None,
            background_color: None,
            style: None,
            action_label: "Action".to_owned(),
            on_action: None,
            attributes: SmallVec::new(),
            children: SmallVec::new(),
        }
    }

    /// Sets the element id. Without one, a unique `card-<n>` id is generated.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn variant(mut self, variant: ColorVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: impl Into<Option<ComponentSize>>) -> Self {
        self.size = size.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn header_class(mut self, class_name: impl Into<String>) -> Self {
        self.header_class = Some(class_name.into());
        self
    }

    pub fn title_class(mut self, class_name: impl Into<String>) -> Self {
        self.title_class = Some(class_name.into());
        self
    }

    pub fn body_class(mut self, class_name: impl Into<String>) -> Self {
        self.body_class = Some(class_name.into());
        self
    }

    pub fn footer_class(mut self, class_name: impl Into<String>) -> Self {
        self.footer_class = Some(class_name.into());
        self
    }

    pub fn button_class(mut self, class_name: impl Into<String>) -> Self {
        self.button_class = Some(class_name.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn action_label(mut self, label: impl Into<String>) -> Self {
        self.action_label = label.into();
        self
    }

    pub fn on_action(mut self, on_action: impl Fn() + 'static) -> Self {
        self.on_action = Some(Rc::new(on_action));
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
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

    pub fn is_disabled(&self) -> bool {
        self.variant == ColorVariant::Disabled || self.disabled
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Card {
    fn render(self, cx: &ThemeContext) -> Node {
        let theme = cx.get_theme();
        let is_disabled = self.is_disabled();

        let id = self.id.unwrap_or_else(|| generate_id("card"));
        let title_id = format!("{id}-title");

        let class_name = component_class_name(
            "card",
            Some(self.variant),
            self.size,
            is_disabled,
            self.class_name.as_deref(),
        );

        let mut style = format!(
            "border-color: {}; border-radius: {}",
            color_for_variant(theme, self.variant),
            ThemeRadiusKind::Md.resolve(theme),
        );
        if let Some(size) = self.size {
            style.push_str(&format!("; padding: {}", size.padding().resolve(theme)));
        }
        if let Some(background_color) = &self.background_color {
            style.push_str(&format!("; background-color: {background_color}"));
        }
        if let Some(extra) = self.style.as_deref().filter(|extra| !extra.is_empty()) {
            style.push_str("; ");
            style.push_str(extra);
        }

        let mut button = Button::new(self.action_label)
            .variant(self.variant)
            .size(self.size)
            .disabled(is_disabled)
            .on_click_handler(self.on_action);
        if let Some(button_class) = self.button_class {
            button = button.class_name(button_class);
        }

        let body = self.children.into_iter().map(|child| child.render(cx));

        Element::new("div")
            .attr("id", id)
            .attr("role", "region")
            .attr("aria-labelledby", title_id.clone())
            .class(class_name)
            .style(style)
            .attributes(self.attributes)
            .attr("aria-disabled", is_disabled.to_string())
            .child(
                div()
                    .class(cn!("card__header", self.header_class))
                    .child(
                        Element::new("h3")
                            .attr("id", title_id)
                            .class(cn!("card__title", self.title_class))
                            .child(self.title),
                    ),
            )
            .child(
                div()
                    .class(cn!("card__body", self.body_class))
                    .children(body),
            )
            .child(
                div()
                    .class(cn!("card__footer", self.footer_class))
                    .child(button.render(cx)),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, sync::Arc};

    use serde_json::json;

    use super::*;
    use crate::theme::Theme;

    fn render_in(card: Card, cx: &ThemeContext) -> Element {
        match card.render(cx) {
            Node::Element(element) => element,
            other => panic!("expected an element, got {other:?}"),
        }
    }

    fn render(card: Card) -> Element {
        render_in(card, &ThemeContext::root())
    }

    fn footer_button(card: &Element) -> &Element {
        card.find(&|e: &Element| e.tag() == "button")
            .expect("card should render an action button")
    }

    #[test]
    fn test_default_card() {
        let card = render(Card::new().id("c1").child("test"));

        assert_eq!(card.class_name(), "card card--primary");
        assert_eq!(card.get_attribute("role"), Some("region"));
        assert_eq!(card.get_attribute("aria-labelledby"), Some("c1-title"));
        assert_eq!(card.get_attribute("aria-disabled"), Some("false"));
        assert_eq!(
            card.get_attribute("style"),
            Some("border-color: #2563EB; border-radius: 16px")
        );

        let title = card
            .find(&|e: &Element| e.tag() == "h3")
            .expect("card should render a title");
        assert_eq!(title.text_content(), "Card Title");
        assert_eq!(title.get_attribute("id"), Some("c1-title"));

        let body = card
            .find(&|e: &Element| e.has_class("card__body"))
            .expect("card should render a body");
        assert_eq!(body.text_content(), "test");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let first = render(Card::new());
        let second = render(Card::new());

        let first_id = first.get_attribute("id").unwrap_or_default();
        assert!(first_id.starts_with("card-"));
        assert_ne!(Some(first_id), second.get_attribute("id"));
    }

    #[test]
    fn test_border_color_follows_active_theme() {
        let theme = Arc::new(
            Theme::default_theme()
                .merged(&json!({ "colors": { "success": "#00FF00" } }))
                .unwrap(),
        );
        let cx = ThemeContext::root().provide(theme);

        let card = render_in(Card::new().variant(ColorVariant::Success), &cx);
        let style = card.get_attribute("style").unwrap_or_default();

        assert!(style.starts_with("border-color: #00FF00;"));
    }

    #[test]
    fn test_size_and_background_extend_the_style() {
        let card = render(
            Card::new()
                .size(ComponentSize::Large)
                .background_color("#FFF")
                .style("width: 10rem"),
        );

        assert!(card.has_class("card--large"));
        assert_eq!(
            card.get_attribute("style"),
            Some("border-color: #2563EB; border-radius: 16px; padding: 18px; background-color: #FFF; width: 10rem")
        );
    }

    #[test]
    fn test_footer_button_shares_variant() {
        let card = render(Card::new().variant(ColorVariant::Warning).button_class("cta"));
        let button = footer_button(&card);

        assert_eq!(button.class_name(), "button button--warning cta");
        assert_eq!(button.text_content(), "Action");
    }

    #[test]
    fn test_disabled_card_disables_action() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);

        let card = render(
            Card::new()
                .variant(ColorVariant::Disabled)
                .on_action(move || counter.set(counter.get() + 1)),
        );

        assert!(card.has_class("card--disabled"));
        assert_eq!(card.get_attribute("aria-disabled"), Some("true"));

        let button = footer_button(&card);
        assert!(button.is_disabled());
        assert!(!button.click());
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_action_fires_when_enabled() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);

        let card = render(Card::new().on_action(move || counter.set(counter.get() + 1)));

        assert!(footer_button(&card).click());
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_class_hooks() {
        let card = render(
            Card::new()
                .class_name("outer")
                .header_class("h")
                .title_class("t")
                .body_class("b")
                .footer_class("f"),
        );

        assert!(card.has_class("outer"));
        for class in ["h", "t", "b", "f"] {
            assert!(card.find(&|e: &Element| e.has_class(class)).is_some());
        }
    }
}
