//! The preview catalog.
//!
//! Every story renders one component configuration in isolation, wrapped in
//! the preview decorator and the default theme, so the whole component set can
//! be reviewed (or snapshot) without a browser.

use std::fmt;

use crate::{
    components::{
        Button, Card, Header, Page, RenderedDocument, Root, Typography, TypographyAlign,
        TypographyColor, TypographyVariant, User,
    },
    element::{AnyElement, IntoElement, RenderOnce, div},
    theme::{ColorVariant, ComponentSize},
    utils::capitalize,
};

/// Inline style of the preview decorator.
pub const PREVIEW_STYLE: &str = "padding: 2rem; margin: 0; display: flex; \
    align-items: flex-start; justify-content: flex-start; width: 100%; box-sizing: border-box";

/// A single named component configuration.
pub struct Story {
    /// Catalog section, e.g. `Example/Card`.
    pub title: &'static str,
    pub name: String,
    render: Box<dyn Fn() -> AnyElement>,
}

impl Story {
    fn new<E: IntoElement>(
        title: &'static str,
        name: impl Into<String>,
        render: impl Fn() -> E + 'static,
    ) -> Self {
        Self {
            title,
            name: name.into(),
            render: Box::new(move || render().into_any_element()),
        }
    }

    /// `<title>/<name>`, unique within the catalog.
    pub fn id(&self) -> String {
        format!("{}/{}", self.title, self.name)
    }

    /// The story's component, without the decorator.
    pub fn element(&self) -> AnyElement {
        (self.render)()
    }
}

impl fmt::Debug for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Story")
            .field("title", &self.title)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn card_stories() -> impl Iterator<Item = Story> {
    ColorVariant::ALL.into_iter().map(|variant| {
        // The first four stories use plain text bodies, the rest markup-looking text.
        let body = match variant {
            ColorVariant::Primary
            | ColorVariant::Secondary
            | ColorVariant::Success
            | ColorVariant::Danger => "test",
            _ => "<div>test</div>",
        };

        Story::new("Example/Card", capitalize(variant.name()), move || {
            Card::new().variant(variant).child(body)
        })
    })
}

fn typography_stories() -> Vec<Story> {
    const TITLE: &str = "Example/Typography";

    let variants = [
        ("headingOne", TypographyVariant::H1, "test"),
        ("headingTwo", TypographyVariant::H2, "test"),
        ("headingThree", TypographyVariant::H3, "test"),
        ("headingFour", TypographyVariant::H4, "test"),
        ("headingFive", TypographyVariant::H5, "<div>test</div>"),
        ("HeadingSix", TypographyVariant::H6, "<div>test</div>"),
        ("BodyOne", TypographyVariant::Body, "test"),
        ("BodyTwo", TypographyVariant::Body2, "test"),
        ("Caption", TypographyVariant::Caption, "<div>test</div>"),
        ("Overline", TypographyVariant::Overline, "test"),
        ("Subtitle1", TypographyVariant::Subtitle1, "test"),
        ("Subtitle2", TypographyVariant::Subtitle2, "test"),
    ];

    let mut stories: Vec<Story> = variants
        .into_iter()
        .map(|(name, variant, body)| {
            Story::new(TITLE, name, move || Typography::new(variant).child(body))
        })
        .collect();

    stories.extend(TypographyAlign::ALL.into_iter().map(|align| {
        Story::new(TITLE, format!("Align{}", capitalize(align.name())), move || {
            Typography::body().align(align).child("test")
        })
    }));

    stories.push(Story::new(TITLE, "ThemeColor", || {
        Typography::body().color(TypographyColor::Primary).child("test")
    }));

    stories
}

fn button_stories() -> Vec<Story> {
    const TITLE: &str = "Example/Button";

    let mut stories: Vec<Story> = ColorVariant::ALL
        .into_iter()
        .map(|variant| {
            Story::new(TITLE, capitalize(variant.name()), move || {
                Button::new("Button").variant(variant)
            })
        })
        .collect();

    stories.extend(ComponentSize::ALL.into_iter().map(|size| {
        Story::new(TITLE, capitalize(size.name()), move || {
            Button::new("Button").size(size)
        })
    }));

    stories.push(Story::new(TITLE, "DisabledFlag", || {
        Button::new("Button").disabled(true)
    }));

    stories
}

fn layout_stories() -> Vec<Story> {
    vec![
        Story::new("Example/Header", "LoggedIn", || {
            Header::new().user(User::new("Jane Doe"))
        }),
        Story::new("Example/Header", "LoggedOut", Header::new),
        Story::new("Example/Page", "LoggedIn", || {
            Page::new()
                .user(User::new("Jane Doe"))
                .child(Typography::new(TypographyVariant::H2).child("Pages in Storybook"))
        }),
        Story::new("Example/Page", "LoggedOut", || {
            Page::new().child(Typography::new(TypographyVariant::H2).child("Pages in Storybook"))
        }),
    ]
}

/// Every story, grouped by component.
pub fn catalog() -> Vec<Story> {
    let mut stories: Vec<Story> = card_stories().collect();
    stories.extend(typography_stories());
    stories.extend(button_stories());
    stories.extend(layout_stories());
    stories
}

/// Renders `story` inside the preview decorator with the default theme.
pub fn render_story(story: &Story) -> RenderedDocument {
    tracing::debug!(story = %story.id(), "rendering story");

    let element = story.element();
    let decorated = AnyElement::new(move |cx| {
        div()
            .class("preview")
            .style(PREVIEW_STYLE)
            .child(element.render(cx))
            .into()
    });

    Root::new().render(decorated)
}
