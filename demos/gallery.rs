use std::env;

use anyhow::bail;
use tracing_subscriber::EnvFilter;

use custom_ui::{
    CustomUiAssets, assets, stylesheet,
    stories::{catalog, render_story},
};

/// Prints every story as HTML, followed by the projected variables and the
/// bundled stylesheet. Pass a story id (e.g. `Example/Card/Danger`) to print
/// just that story.
fn main() -> anyhow::Result<()> {
    // Initialize tracing with RUST_LOG env var support
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let filter = env::args().nth(1);
    let stories: Vec<_> = catalog()
        .into_iter()
        .filter(|story| filter.as_deref().is_none_or(|id| story.id() == id))
        .collect();

    if stories.is_empty() {
        bail!("no story matches {:?}", filter.unwrap_or_default());
    }

    let mut root_css = String::new();
    for story in &stories {
        let document = render_story(story);
        println!("<!-- {} -->\n{}\n", story.id(), document.body);
        root_css = document.root_css;
    }

    let assets = assets![CustomUiAssets];
    tracing::info!(stylesheets = assets.list("styles/")?.len(), "loaded assets");

    println!("<style>\n{root_css}</style>");
    println!("<style>\n{}</style>", stylesheet());

    Ok(())
}
