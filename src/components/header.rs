use std::rc::Rc;

use smallvec::SmallVec;

use crate::{
    components::Button,
    element::{Attribute, ClickHandler, Element, Node, RenderOnce, div},
    theme::{ColorVariant, ComponentSize, ThemeContext},
    utils::component_class_name,
};

/// The signed-in user shown by [`Header`] and [`crate::components::Page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Site header with a brand title and account actions.
#[derive(Clone)]
pub struct Header {
    title: String,
    user: Option<User>,
    variant: Option<ColorVariant>,
    size: Option<ComponentSize>,
    disabled: bool,
    class_name: Option<String>,
    style: Option<String>,
    on_login: Option<ClickHandler>,
    on_logout: Option<ClickHandler>,
    on_create_account: Option<ClickHandler>,
    attributes: SmallVec<[Attribute; 2]>,
}

impl Header {
    pub fn new() -> Self {
        Self {
            title: "Acme".to_owned(),
            user: None,
            variant: None,
            size: None,
            disabled: false,
            class_name: None,
            style: None,
            on_login: None,
            on_logout: None,
            on_create_account: None,
            attributes: SmallVec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn user(mut self, user: impl Into<Option<User>>) -> Self {
        self.user = user.into();
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

    /// Disables every account action.
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

    pub fn on_login(mut self, on_login: impl Fn() + 'static) -> Self {
        self.on_login = Some(Rc::new(on_login));
        self
    }

    pub fn on_logout(mut self, on_logout: impl Fn() + 'static) -> Self {
        self.on_logout = Some(Rc::new(on_logout));
        self
    }

    pub fn on_create_account(mut self, on_create_account: impl Fn() + 'static) -> Self {
        self.on_create_account = Some(Rc::new(on_create_account));
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Header {
    fn render(self, cx: &ThemeContext) -> Node {
        let is_disabled = self.is_disabled();
        let class_name = component_class_name(
            "header",
            self.variant,
            self.size,
            is_disabled,
            self.class_name.as_deref(),
        );

        let actions = match self.user {
            Some(user) => div()
                .class("header__actions")
                .child(
                    Element::new("span")
                        .class("header__welcome")
                        .child("Welcome, ")
                        .child(Element::new("b").child(user.name))
                        .child("!"),
                )
                .child(
                    Button::new("Log out")
                        .size(ComponentSize::Small)
                        .disabled(is_disabled)
                        .on_click_handler(self.on_logout)
                        .render(cx),
                ),
            None => div()
                .class("header__actions")
                .child(
                    Button::new("Log in")
                        .size(ComponentSize::Small)
                        .disabled(is_disabled)
                        .on_click_handler(self.on_login)
                        .render(cx),
                )
                .child(
                    Button::new("Sign up")
                        .variant(ColorVariant::Primary)
                        .size(ComponentSize::Small)
                        .disabled(is_disabled)
                        .on_click_handler(self.on_create_account)
                        .render(cx),
                ),
        };

        Element::new("header")
            .class(class_name)
            .when_some(self.style, Element::style)
            .attributes(self.attributes)
            .child(
                div()
                    .class("header__brand")
                    .child(Element::new("h1").child(self.title)),
            )
            .child(actions)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn render(header: Header) -> Element {
        match header.render(&ThemeContext::root()) {
            Node::Element(element) => element,
            other => panic!("expected an element, got {other:?}"),
        }
    }

    fn button<'a>(header: &'a Element, label: &str) -> Option<&'a Element> {
        header.find(&|e: &Element| e.tag() == "button" && e.text_content() == label)
    }

    #[test]
    fn test_logged_out() {
        let header = render(Header::new());

        assert_eq!(header.tag(), "header");
        assert_eq!(header.class_name(), "header");
        assert!(header.text_content().starts_with("Acme"));
        assert!(button(&header, "Log in").is_some());
        assert!(button(&header, "Sign up").is_some());
        assert!(button(&header, "Log out").is_none());
    }

    #[test]
    fn test_logged_in() {
        let header = render(Header::new().user(User::new("Jane Doe")));

        let welcome = header
            .find(&|e: &Element| e.has_class("header__welcome"))
            .expect("a user should be greeted");
        assert_eq!(welcome.text_content(), "Welcome, Jane Doe!");
        assert!(button(&header, "Log out").is_some());
        assert!(button(&header, "Log in").is_none());
    }

    #[test]
    fn test_callbacks_are_wired() {
        let logins = Rc::new(Cell::new(0));
        let signups = Rc::new(Cell::new(0));
        let (login_counter, signup_counter) = (Rc::clone(&logins), Rc::clone(&signups));

        let header = render(
            Header::new()
                .on_login(move || login_counter.set(login_counter.get() + 1))
                .on_create_account(move || signup_counter.set(signup_counter.get() + 1)),
        );

        assert!(button(&header, "Log in").is_some_and(Element::click));
        assert!(button(&header, "Sign up").is_some_and(Element::click));
        assert_eq!((logins.get(), signups.get()), (1, 1));
    }

    #[test]
    fn test_disabled_variant_disables_actions() {
        let header = render(Header::new().variant(ColorVariant::Disabled));

        assert!(header.has_class("header--disabled"));
        assert!(button(&header, "Log in").is_some_and(Element::is_disabled));
    }

    #[test]
    fn test_disabled_flag_alone_disables_actions() {
        let logins = Rc::new(Cell::new(0));
        let counter = Rc::clone(&logins);

        let header = render(
            Header::new()
                .disabled(true)
                .on_login(move || counter.set(counter.get() + 1)),
        );

        assert_eq!(header.class_name(), "header header--disabled");
        for label in ["Log in", "Sign up"] {
            assert!(button(&header, label).is_some_and(Element::is_disabled));
        }
        assert!(!button(&header, "Log in").is_some_and(Element::click));
        assert_eq!(logins.get(), 0);
    }
}
