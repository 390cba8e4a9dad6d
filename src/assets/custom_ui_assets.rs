#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::borrow::Cow;

use anyhow::Result;
use enum_assoc::Assoc;
use rust_embed::RustEmbed;

use crate::assets::assets::AssetProvider;

/// Component stylesheets bundled with the crate.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "styles/**/*.css"]
#[exclude = "*.DS_Store"]
pub struct CustomUiAssets;

impl AssetProvider for CustomUiAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<String>> {
        Ok(CustomUiAssets::iter()
            .filter(|p| p.starts_with(path))
            .map(Cow::into_owned)
            .collect())
    }
}

/// Built-in stylesheets, one per component plus the shared globals.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn path(&self) -> &'static str)]
pub enum StylesheetKind {
    /// Font and reset rules every component relies on.
    #[assoc(path = "styles/global.css")]
    Global,
    #[assoc(path = "styles/button.css")]
    Button,
    #[assoc(path = "styles/card.css")]
    Card,
    #[assoc(path = "styles/typography.css")]
    Typography,
    #[assoc(path = "styles/header.css")]
    Header,
    #[assoc(path = "styles/page.css")]
    Page,
}

impl StylesheetKind {
    pub const ALL: [StylesheetKind; 6] = [
        StylesheetKind::Global,
        StylesheetKind::Button,
        StylesheetKind::Card,
        StylesheetKind::Typography,
        StylesheetKind::Header,
        StylesheetKind::Page,
    ];

    pub fn contents(&self) -> Option<Cow<'static, str>> {
        let file = <CustomUiAssets as RustEmbed>::get(self.path())?;
        match file.data {
            Cow::Borrowed(bytes) => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            Cow::Owned(bytes) => String::from_utf8(bytes).ok().map(Cow::Owned),
        }
    }
}

/// Every built-in stylesheet, concatenated in [`StylesheetKind::ALL`] order.
pub fn stylesheet() -> String {
    StylesheetKind::ALL
        .iter()
        .filter_map(StylesheetKind::contents)
        .collect::<Vec<_>>()
        .join("\n")
}
