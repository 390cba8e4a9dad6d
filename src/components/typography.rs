#![allow(missing_docs)] // Assoc generates undocumented methods.

use std::borrow::Cow;

use enum_assoc::Assoc;
use smallvec::SmallVec;

use crate::{
    cn,
    element::{AnyElement, Attribute, Element, IntoElement, Node, RenderOnce, is_valid_tag_name},
    theme::{
        ColorVariant, ComponentSize, ThemeContext, ThemeExt, ThemeFontSizeKind, ThemeFontWeightKind,
    },
    utils::{component_class_name, variant_class},
};

/// Text styles, each with a default element and a theme font size.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn element(&self) -> &'static str)]
#[func(pub fn font_size(&self) -> ThemeFontSizeKind)]
pub enum TypographyVariant {
    #[assoc(name = "h1")]
    #[assoc(element = "h1")]
    #[assoc(font_size = ThemeFontSizeKind::Xxl)]
    H1,
    #[assoc(name = "h2")]
    #[assoc(element = "h2")]
    #[assoc(font_size = ThemeFontSizeKind::Xl)]
    H2,
    #[assoc(name = "h3")]
    #[assoc(element = "h3")]
    #[assoc(font_size = ThemeFontSizeKind::Lg)]
    H3,
    #[assoc(name = "h4")]
    #[assoc(element = "h4")]
    #[assoc(font_size = ThemeFontSizeKind::Md)]
    H4,
    #[assoc(name = "h5")]
    #[assoc(element = "h5")]
    #[assoc(font_size = ThemeFontSizeKind::Sm)]
    H5,
    #[assoc(name = "h6")]
    #[assoc(element = "h6")]
    #[assoc(font_size = ThemeFontSizeKind::Xs)]
    H6,
    #[default]
    #[assoc(name = "body")]
    #[assoc(element = "p")]
    #[assoc(font_size = ThemeFontSizeKind::Md)]
    Body,
    #[assoc(name = "body2")]
    #[assoc(element = "p")]
    #[assoc(font_size = ThemeFontSizeKind::Sm)]
    Body2,
    #[assoc(name = "caption")]
    #[assoc(element = "p")]
    #[assoc(font_size = ThemeFontSizeKind::Xs)]
    Caption,
    #[assoc(name = "overline")]
    #[assoc(element = "p")]
    #[assoc(font_size = ThemeFontSizeKind::Xs)]
    Overline,
    #[assoc(name = "subtitle1")]
    #[assoc(element = "p")]
    #[assoc(font_size = ThemeFontSizeKind::Md)]
    Subtitle1,
    #[assoc(name = "subtitle2")]
    #[assoc(element = "p")]
    #[assoc(font_size = ThemeFontSizeKind::Sm)]
    Subtitle2,
}

impl TypographyVariant {
    pub const ALL: [TypographyVariant; 12] = [
        TypographyVariant::H1,
        TypographyVariant::H2,
        TypographyVariant::H3,
        TypographyVariant::H4,
        TypographyVariant::H5,
        TypographyVariant::H6,
        TypographyVariant::Body,
        TypographyVariant::Body2,
        TypographyVariant::Caption,
        TypographyVariant::Overline,
        TypographyVariant::Subtitle1,
        TypographyVariant::Subtitle2,
    ];
}

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
pub enum TypographyAlign {
    #[assoc(name = "left")]
    Left,
    #[assoc(name = "center")]
    Center,
    #[assoc(name = "right")]
    Right,
    #[assoc(name = "justify")]
    Justify,
}

impl TypographyAlign {
    pub const ALL: [TypographyAlign; 4] = [
        TypographyAlign::Left,
        TypographyAlign::Center,
        TypographyAlign::Right,
        TypographyAlign::Justify,
    ];
}

/// Text color roles, rendered as `typography--color-<name>`.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[func(pub fn name(&self) -> &'static str)]
pub enum TypographyColor {
    #[assoc(name = "primary")]
    Primary,
    #[assoc(name = "secondary")]
    Secondary,
    #[default]
    #[assoc(name = "text")]
    Text,
    #[assoc(name = "error")]
    Error,
    #[assoc(name = "warning")]
    Warning,
    #[assoc(name = "success")]
    Success,
    #[assoc(name = "info")]
    Info,
    #[assoc(name = "inherit")]
    Inherit,
}

/// Text with consistent styling.
///
/// Renders the variant's element (`h1`..`h6` for headings, `p` otherwise)
/// unless [`Typography::component`] picks another one. Font size and line
/// height come from the active theme, and so does the weight of bold text.
pub struct Typography {
    variant: TypographyVariant,
    align: Option<TypographyAlign>,
    color: TypographyColor,
    component: Option<Cow<'static, str>>,
    tone: Option<ColorVariant>,
    size: Option<ComponentSize>,
    disabled: bool,
    bold: bool,
    italic: bool,
    underline: bool,
    no_wrap: bool,
    class_name: Option<String>,
    style: Option<String>,
    attributes: SmallVec<[Attribute; 2]>,
    children: SmallVec<[AnyElement; 1]>,
}

impl Typography {
    pub fn new(variant: TypographyVariant) -> Self {
        Self {
            variant,
            align: None,
            color: TypographyColor::default(),
            component: None,
            tone: None,
            size: None,
            disabled: false,
            bold: false,
            italic: false,
            underline: false,
            no_wrap: false,
            class_name: None,
            style: None,
            attributes: SmallVec::new(),
            children: SmallVec::new(),
        }
    }

    pub fn body() -> Self {
        Self::new(TypographyVariant::Body)
    }

    pub fn variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn align(mut self, align: impl Into<Option<TypographyAlign>>) -> Self {
        self.align = align.into();
        self
    }

    pub fn color(mut self, color: TypographyColor) -> Self {
        self.color = color;
        self
    }

    /// Renders `tag` instead of the variant's default element.
    ///
    /// Tags other than ASCII letters, digits and `-` are ignored, leaving the
    /// variant's element in place.
    pub fn component(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        let tag = tag.into();
        if is_valid_tag_name(&tag) {
            self.component = Some(tag);
        } else {
            tracing::warn!(%tag, "ignoring invalid typography element");
            self.component = None;
        }
        self
    }

    /// Applies a semantic color variant as `typography--<tone>`.
    pub fn tone(mut self, tone: impl Into<Option<ColorVariant>>) -> Self {
        self.tone = tone.into();
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

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
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
        self.tone == Some(ColorVariant::Disabled) || self.disabled
    }

    fn class_list(&self) -> String {
        let base = "typography";
        cn!(
            component_class_name(base, self.tone, self.size, self.is_disabled(), None),
            variant_class(base, self.variant.name()),
            self.align
                .map(|align| variant_class(base, &format!("align-{}", align.name()))),
            variant_class(base, &format!("color-{}", self.color.name())),
            self.bold.then_some("typography--bold"),
            self.italic.then_some("typography--italic"),
            self.underline.then_some("typography--underline"),
            self.no_wrap.then_some("typography--no-wrap"),
            self.class_name.as_deref(),
        )
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self::body()
    }
}

impl RenderOnce for Typography {
    fn render(self, cx: &ThemeContext) -> Node {
        let theme = cx.get_theme();
        let class_name = self.class_list();

        let font_size = self.variant.font_size();
        let mut style = format!(
            "font-size: {}; line-height: {}",
            font_size.resolve(theme),
            font_size.line_height().resolve(theme),
        );
        if self.bold {
            style.push_str(&format!(
                "; font-weight: {}",
                ThemeFontWeightKind::Bold.resolve(theme)
            ));
        }
        if let Some(extra) = self.style.as_deref().filter(|extra| !extra.is_empty()) {
            style.push_str("; ");
            style.push_str(extra);
        }

        let tag = self
            .component
            .unwrap_or(Cow::Borrowed(self.variant.element()));

        Element::new(tag)
            .class(class_name)
            .style(style)
            .attributes(self.attributes)
            .children(self.children.into_iter().map(|child| child.render(cx)))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(typography: Typography) -> Element {
        match typography.render(&ThemeContext::root()) {
            Node::Element(element) => element,
            other => panic!("expected an element, got {other:?}"),
        }
    }

    #[test]
    fn test_headings_render_their_own_element() {
        let headings = ["h1", "h2", "h3", "h4", "h5", "h6"];

        for (variant, tag) in TypographyVariant::ALL.iter().zip(headings) {
            assert_eq!(render(Typography::new(*variant)).tag(), tag);
        }
    }

    #[test]
    fn test_other_variants_render_paragraphs() {
        for variant in &TypographyVariant::ALL[6..] {
            let element = render(Typography::new(*variant).child("x"));
            assert_eq!(element.tag(), "p");
            assert!(element.has_class(&format!("typography--{}", variant.name())));
        }
    }

    #[test]
    fn test_component_overrides_element() {
        let element = render(Typography::new(TypographyVariant::H1).component("span"));

        assert_eq!(element.tag(), "span");
        assert!(element.has_class("typography--h1"));
    }

    #[test]
    fn test_default_classes() {
        let element = render(Typography::body().child("Hello"));

        assert_eq!(element.class_name(), "typography typography--body typography--color-text");
        assert_eq!(element.text_content(), "Hello");
    }

    #[test]
    fn test_modifier_classes_keep_order() {
        let element = render(
            Typography::new(TypographyVariant::Caption)
                .align(TypographyAlign::Center)
                .color(TypographyColor::Error)
                .bold(true)
                .italic(true)
                .underline(true)
                .no_wrap(true)
                .class_name("extra"),
        );

        assert_eq!(
            element.class_name(),
            "typography typography--caption typography--align-center typography--color-error \
             typography--bold typography--italic typography--underline typography--no-wrap extra"
        );
    }

    #[test]
    fn test_size_and_tone_use_the_shared_class_rule() {
        let element = render(
            Typography::body()
                .tone(ColorVariant::Info)
                .size(ComponentSize::Small)
                .disabled(true),
        );

        assert_eq!(
            element.class_name(),
            "typography typography--info typography--small typography--disabled \
             typography--body typography--color-text"
        );
    }

    #[test]
    fn test_invalid_component_keeps_variant_element() {
        let element = render(
            Typography::body()
                .component(String::from("p onmouseover=alert(1)"))
                .child("x"),
        );

        assert_eq!(element.tag(), "p");
        assert!(element.to_html().starts_with("<p class="));
        assert!(!element.to_html().contains("onmouseover"));

        let heading = render(Typography::new(TypographyVariant::H2).component("<script>"));
        assert_eq!(heading.tag(), "h2");

        let custom = render(Typography::body().component(String::from("my-label")));
        assert_eq!(custom.tag(), "my-label");
    }

    #[test]
    fn test_bold_weight_comes_from_theme() {
        let element = render(Typography::body().bold(true));

        assert!(element.has_class("typography--bold"));
        assert_eq!(
            element.get_attribute("style"),
            Some("font-size: 16px; line-height: 16px; font-weight: 700")
        );
    }

    #[test]
    fn test_disabled_tone() {
        let element = render(Typography::body().tone(ColorVariant::Disabled));

        assert!(element.has_class("typography--disabled"));
        assert!(Typography::body().disabled(true).is_disabled());
        assert!(!Typography::body().tone(ColorVariant::Info).is_disabled());
    }

    #[test]
    fn test_font_metrics_come_from_theme() {
        let element = render(Typography::new(TypographyVariant::H1).style("margin: 0"));

        assert_eq!(
            element.get_attribute("style"),
            Some("font-size: 22px; line-height: 22px; margin: 0")
        );
    }

    #[test]
    fn test_children_are_escaped() {
        let element = render(Typography::body().child("<div>test</div>"));

        assert_eq!(element.text_content(), "<div>test</div>");
        assert!(element.to_html().contains("&lt;div&gt;test&lt;/div&gt;"));
    }
}
