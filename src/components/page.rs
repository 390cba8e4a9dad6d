use smallvec::SmallVec;

use crate::{
    components::{Header, User},
    element::{AnyElement, Attribute, Element, IntoElement, Node, RenderOnce},
    theme::{ColorVariant, ComponentSize, ThemeContext},
    utils::component_class_name,
};

/// A page layout: a [`Header`] followed by a section holding the children.
pub struct Page {
    header: Header,
    variant: Option<ColorVariant>,
    size: Option<ComponentSize>,
    disabled: bool,
    class_name: Option<String>,
    style: Option<String>,
    attributes: SmallVec<[Attribute; 2]>,
    children: SmallVec<[AnyElement; 2]>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            header: Header::new(),
            variant: None,
            size: None,
            disabled: false,
            class_name: None,
            style: None,
            attributes: SmallVec::new(),
            children: SmallVec::new(),
        }
    }

    pub fn user(mut self, user: impl Into<Option<User>>) -> Self {
        self.header = self.header.user(user);
        self
    }

    /// Customizes the page's header, e.g. to wire its callbacks.
    pub fn header(mut self, customize: impl FnOnce(Header) -> Header) -> Self {
        self.header = customize(self.header);
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

    /// Disables the page, including its header actions.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.variant == Some(ColorVariant::Disabled) || self.disabled
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
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
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Page {
    fn render(self, cx: &ThemeContext) -> Node {
        let is_disabled = self.is_disabled();
        let class_name = component_class_name(
            "page",
            self.variant,
            self.size,
            is_disabled,
            self.class_name.as_deref(),
        );

        Element::new("article")
            .class(class_name)
            .when_some(self.style, Element::style)
            .attributes(self.attributes)
            .child(self.header.disabled(is_disabled).render(cx))
            .child(
                Element::new("section")
                    .class("page__content")
                    .children(self.children.into_iter().map(|child| child.render(cx))),
            )
            .into()
    }
}
