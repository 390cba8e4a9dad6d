use std::rc::Rc;

use smallvec::SmallVec;

use crate::{
    element::{Attribute, ClickHandler, Element, Node, RenderOnce},
    theme::{ColorVariant, ComponentSize, ThemeContext},
    utils::component_class_name,
};

/// Primary UI component for user interaction.
///
/// A `disabled` variant always renders an inert button, whatever
/// [`Button::disabled`] says.
pub struct Button {
    label: String,
    variant: Option<ColorVariant>,
    size: Option<ComponentSize>,
    disabled: bool,
    class_name: Option<String>,
    style: Option<String>,
    on_click: Option<ClickHandler>,
    attributes: SmallVec<[Attribute; 2]>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: None,
            size: Some(ComponentSize::Medium),
            disabled: false,
            class_name: None,
            style: None,
            on_click: None,
            attributes: SmallVec::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn variant(mut self, variant: impl Into<Option<ColorVariant>>) -> Self {
        self.variant = variant.into();
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

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn on_click(mut self, on_click: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    pub(crate) fn on_click_handler(mut self, on_click: Option<ClickHandler>) -> Self {
        self.on_click = on_click;
        self
    }

    /// Passes a native attribute through to the `<button>`.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.variant == Some(ColorVariant::Disabled) || self.disabled
    }
}

impl RenderOnce for Button {
    fn render(self, _cx: &ThemeContext) -> Node {
        let is_disabled = self.is_disabled();
        let class_name = component_class_name(
            "button",
            self.variant,
            self.size,
            is_disabled,
            self.class_name.as_deref(),
        );

        Element::new("button")
            .attr("type", "button")
            .class(class_name)
            .when_some(self.style, Element::style)
            .attributes(self.attributes)
            .when(is_disabled, |this| this.flag("disabled"))
            .when_some(self.on_click, Element::on_click)
            .child(self.label)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn render(button: Button) -> Element {
        match button.render(&ThemeContext::root()) {
            Node::Element(element) => element,
            other => panic!("expected an element, got {other:?}"),
        }
    }

    #[test]
    fn test_default_button() {
        let button = render(Button::new("Save"));

        assert_eq!(
            button.to_html(),
            r#"<button type="button" class="button button--medium">Save</button>"#
        );
    }

    #[test]
    fn test_variant_size_and_custom_class() {
        let button = render(
            Button::new("Go")
                .variant(ColorVariant::Danger)
                .size(ComponentSize::Small)
                .class_name("wide"),
        );

        assert_eq!(button.class_name(), "button button--danger button--small wide");
        assert!(!button.is_disabled());
    }

    #[test]
    fn test_size_can_be_cleared() {
        let button = render(Button::new("Go").size(None));
        assert_eq!(button.class_name(), "button");
    }

    #[test]
    fn test_disabled_variant_is_inert_regardless_of_flag() {
        for flag in [false, true] {
            let clicks = Rc::new(Cell::new(0));
            let counter = Rc::clone(&clicks);

            let button = render(
                Button::new("Nope")
                    .variant(ColorVariant::Disabled)
                    .disabled(flag)
                    .on_click(move || counter.set(counter.get() + 1)),
            );

            assert!(button.is_disabled());
            assert!(button.has_class("button--disabled"));
            assert!(!button.click());
            assert_eq!(clicks.get(), 0);
        }
    }

    #[test]
    fn test_disabled_flag_without_variant() {
        let button = render(Button::new("Wait").disabled(true));

        assert!(button.is_disabled());
        assert_eq!(button.class_name(), "button button--medium button--disabled");
    }

    #[test]
    fn test_click_reaches_handler() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);

        let button = render(
            Button::new("Go")
                .variant(ColorVariant::Primary)
                .on_click(move || counter.set(counter.get() + 1)),
        );

        assert!(button.click());
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_pass_through_attributes_cannot_re_enable() {
        let button = render(
            Button::new("Go")
                .variant(ColorVariant::Disabled)
                .attr("aria-label", "go")
                .attr("disabled", "false")
                .style("margin: 0"),
        );

        assert_eq!(button.get_attribute("aria-label"), Some("go"));
        assert_eq!(button.get_attribute("disabled"), Some(""));
        assert_eq!(button.get_attribute("style"), Some("margin: 0"));
        assert!(!button.click());
    }
}
