//! A small retained element tree that components render into.
//!
//! Elements carry a tag, attributes, children and an optional click handler,
//! and serialize to HTML. Rendering is driven by [`RenderOnce`], which receives
//! the [`ThemeContext`] of the enclosing scope explicitly.

use std::{
    borrow::Cow,
    fmt::{self, Write},
    rc::Rc,
};

use smallvec::SmallVec;

use crate::theme::ThemeContext;

/// Callback invoked when an element is clicked.
pub type ClickHandler = Rc<dyn Fn()>;

/// Elements that never have children or a closing tag.
const VOID_TAGS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

/// A component that consumes itself to produce a node.
pub trait RenderOnce: 'static {
    fn render(self, cx: &ThemeContext) -> Node;
}

/// Anything that can be deferred until the theme scope it renders in is known.
pub trait IntoElement {
    fn into_any_element(self) -> AnyElement;
}

impl<T: RenderOnce> IntoElement for T {
    fn into_any_element(self) -> AnyElement {
        AnyElement::new(move |cx| self.render(cx))
    }
}

/// A type-erased, not yet rendered element.
pub struct AnyElement(Box<dyn FnOnce(&ThemeContext) -> Node>);

impl AnyElement {
    pub fn new(render: impl FnOnce(&ThemeContext) -> Node + 'static) -> Self {
        Self(Box::new(render))
    }
}

impl RenderOnce for AnyElement {
    fn render(self, cx: &ThemeContext) -> Node {
        (self.0)(cx)
    }
}

impl fmt::Debug for AnyElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AnyElement")
    }
}

impl RenderOnce for &'static str {
    fn render(self, _cx: &ThemeContext) -> Node {
        Node::Text(self.to_owned())
    }
}

impl RenderOnce for String {
    fn render(self, _cx: &ThemeContext) -> Node {
        Node::Text(self)
    }
}

impl RenderOnce for Element {
    fn render(self, _cx: &ThemeContext) -> Node {
        Node::Element(self)
    }
}

impl RenderOnce for Node {
    fn render(self, _cx: &ThemeContext) -> Node {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: Cow<'static, str>,
    /// `None` renders a boolean attribute such as `disabled`.
    pub value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn flag(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// A rendered node: text, an element, or a transparent group of nodes.
#[derive(Debug, Clone)]
pub enum Node {
    Text(String),
    Element(Element),
    Fragment(Vec<Node>),
}

impl Node {
    /// The first element of this node, looking through fragments.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Fragment(nodes) => nodes.iter().find_map(Node::as_element),
            Node::Text(_) => None,
        }
    }

    /// Depth-first search for the first element matching `predicate`.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        match self {
            Node::Element(element) => element.find(predicate),
            Node::Fragment(nodes) => nodes.iter().find_map(|node| node.find(predicate)),
            Node::Text(_) => None,
        }
    }

    /// Collects every element matching `predicate`, in document order.
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect(predicate, &mut found);
        found
    }

    fn collect<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        match self {
            Node::Element(element) => {
                if predicate(element) {
                    found.push(element);
                }
                for child in &element.children {
                    child.collect(predicate, found);
                }
            }
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.collect(predicate, found);
                }
            }
            Node::Text(_) => {}
        }
    }

    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.write_text(&mut text);
        text
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.write_text(out);
                }
            }
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.write_text(out);
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => write_escaped(f, text),
            Node::Element(element) => fmt::Display::fmt(element, f),
            Node::Fragment(nodes) => nodes
                .iter()
                .try_for_each(|node| fmt::Display::fmt(node, f)),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_owned())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[derive(Clone)]
pub struct Element {
    tag: Cow<'static, str>,
    attributes: SmallVec<[Attribute; 4]>,
    children: Vec<Node>,
    on_click: Option<ClickHandler>,
}

/// Whether `tag` can be written as an element name: non-empty ASCII letters,
/// digits and `-`, starting with a letter.
pub fn is_valid_tag_name(tag: &str) -> bool {
    tag.starts_with(|ch: char| ch.is_ascii_alphabetic())
        && tag.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
}

/// Shorthand for a `<div>`.
pub fn div() -> Element {
    Element::new("div")
}

impl Element {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            attributes: SmallVec::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Sets an attribute, replacing any previous value with the same name.
    pub fn attr(self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.attribute(Attribute::new(name, value))
    }

    /// Sets a boolean attribute.
    pub fn flag(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.attribute(Attribute::flag(name))
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        match self
            .attributes
            .iter()
            .position(|existing| existing.name == attribute.name)
        {
            Some(index) => self.attributes[index].value = attribute.value,
            None => self.attributes.push(attribute),
        }
        self
    }

    pub fn attributes(self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        attributes.into_iter().fold(self, Element::attribute)
    }

    /// Sets the `class` attribute. An empty class name leaves the element unclassed.
    pub fn class(self, class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        if class_name.is_empty() {
            return self;
        }
        self.attr("class", class_name)
    }

    /// Sets the inline `style` attribute. Empty styles are skipped.
    pub fn style(self, style: impl Into<String>) -> Self {
        let style = style.into();
        if style.is_empty() {
            return self;
        }
        self.attr("style", style)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn on_click(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn when(self, condition: bool, then: impl FnOnce(Self) -> Self) -> Self {
        if condition { then(self) } else { self }
    }

    pub fn when_some<T>(self, option: Option<T>, then: impl FnOnce(Self, T) -> Self) -> Self {
        match option {
            Some(value) => then(self, value),
            None => self,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the attribute value; boolean attributes read as `""`.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_deref().unwrap_or(""))
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    pub fn class_name(&self) -> &str {
        self.get_attribute("class").unwrap_or("")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_name().split(' ').any(|candidate| candidate == class)
    }

    pub fn get_children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_disabled(&self) -> bool {
        self.has_attribute("disabled") || self.get_attribute("aria-disabled") == Some("true")
    }

    /// Dispatches a click. Disabled elements and elements without a handler ignore it.
    ///
    /// Returns whether a handler ran.
    pub fn click(&self) -> bool {
        if self.is_disabled() {
            tracing::trace!(tag = %self.tag, "ignoring click on disabled element");
            return false;
        }

        match &self.on_click {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            child.write_text(&mut text);
        }
        text
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;

        for attribute in &self.attributes {
            write!(f, " {}", attribute.name)?;
            if let Some(value) = &attribute.value {
                f.write_str("=\"")?;
                write_escaped(f, value)?;
                f.write_char('"')?;
            }
        }

        f.write_char('>')?;

        if VOID_TAGS.contains(&self.tag()) {
            return Ok(());
        }

        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }

        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

fn write_escaped(f: &mut impl Write, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&#39;")?,
            _ => f.write_char(ch)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_html_serialization() {
        let element = div()
            .class("card")
            .attr("data-id", "1")
            .child(Element::new("h3").child("Title"))
            .child("body");

        assert_eq!(
            element.to_html(),
            r#"<div class="card" data-id="1"><h3>Title</h3>body</div>"#
        );
    }

    #[test]
    fn test_deeply_nested_tree() {
        let mut element = Element::new("span").child("leaf");
        for _ in 0..64 {
            element = div().child(element);
        }

        let node = Node::from(element);
        assert_eq!(node.text_content(), "leaf");
        assert_eq!(node.find_all(&|e: &Element| e.tag() == "div").len(), 64);
        assert!(node.to_html().ends_with("leaf</span></div></div>"));
    }

    #[test]
    fn test_tag_name_validation() {
        assert!(is_valid_tag_name("h1"));
        assert!(is_valid_tag_name("my-element"));
        assert!(!is_valid_tag_name(""));
        assert!(!is_valid_tag_name("1p"));
        assert!(!is_valid_tag_name("p onclick=x"));
        assert!(!is_valid_tag_name("<script>"));
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let element = div().attr("title", "a \"b\" & c").child("<div>test</div>");

        assert_eq!(
            element.to_html(),
            r#"<div title="a &quot;b&quot; &amp; c">&lt;div&gt;test&lt;/div&gt;</div>"#
        );
        assert_eq!(element.text_content(), "<div>test</div>");
    }

    #[test]
    fn test_boolean_and_void_elements() {
        let element = Element::new("input").flag("disabled").child("ignored");
        assert_eq!(element.to_html(), "<input disabled>");
        assert_eq!(element.get_attribute("disabled"), Some(""));
    }

    #[test]
    fn test_attribute_replaces_existing_value() {
        let element = div().attr("role", "a").attr("role", "b");
        assert_eq!(element.to_html(), r#"<div role="b"></div>"#);
    }

    #[test]
    fn test_empty_class_and_style_are_skipped() {
        let element = div().class("").style("");
        assert_eq!(element.to_html(), "<div></div>");
    }

    #[test]
    fn test_has_class_matches_whole_tokens() {
        let element = div().class("button button--primary");
        assert!(element.has_class("button"));
        assert!(element.has_class("button--primary"));
        assert!(!element.has_class("button--"));
    }

    #[test]
    fn test_click_runs_handler() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let element = Element::new("button").on_click(Rc::new(move || counter.set(counter.get() + 1)));

        assert!(element.click());
        assert!(element.click());
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn test_click_on_disabled_element_is_inert() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let element = Element::new("button")
            .flag("disabled")
            .on_click(Rc::new(move || counter.set(counter.get() + 1)));

        assert!(!element.click());
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_fragment_search_and_text() {
        let node = Node::Fragment(vec![
            Node::Text("a".into()),
            div().class("x").child(Element::new("span").class("y").child("b")).into(),
        ]);

        assert_eq!(node.as_element().map(Element::tag), Some("div"));
        assert_eq!(node.find(&|e: &Element| e.has_class("y")).map(Element::tag), Some("span"));
        assert_eq!(node.find_all(&|e: &Element| e.class_name().len() == 1).len(), 2);
        assert_eq!(node.text_content(), "ab");
        assert_eq!(node.to_html(), r#"a<div class="x"><span class="y">b</span></div>"#);
    }

    #[test]
    fn test_any_element_defers_rendering() {
        let element = "hello".into_any_element();
        let node = element.render(&ThemeContext::root());
        assert!(matches!(node, Node::Text(text) if text == "hello"));
    }
}
