use std::borrow::Cow;

use anyhow::{Context, Result, anyhow};
use smallvec::SmallVec;

/// A chain of asset providers, queried in order.
pub struct Assets<const N: usize> {
    providers: SmallVec<[Box<dyn AssetProvider>; N]>,
}

impl<const N: usize> Assets<N> {
    pub fn new(providers: [Box<dyn AssetProvider>; N]) -> Assets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }

    /// Loads `path` from the first provider that has it.
    ///
    /// An empty path loads nothing; a path no provider knows is an error.
    pub fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        for provider in &self.providers {
            let asset = provider.get(path);

            if asset.is_some() {
                return Ok(asset);
            }
        }

        Err(anyhow!("could not find asset at path \"{path}\""))
    }

    /// Loads `path` as UTF-8 text.
    pub fn load_str(&self, path: &str) -> Result<String> {
        let bytes = self
            .load(path)?
            .with_context(|| format!("empty asset path \"{path}\""))?;

        String::from_utf8(bytes.into_owned())
            .with_context(|| format!("asset \"{path}\" is not valid UTF-8"))
    }

    /// Lists every asset path under `path` across all providers.
    pub fn list(&self, path: &str) -> Result<Vec<String>> {
        Ok(self
            .providers
            .iter()
            .flat_map(|assets| assets.list(path).into_iter())
            .flatten()
            .collect())
    }
}

#[macro_export]
macro_rules! assets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::Assets::new([
            $( Box::new($item) as Box<dyn $crate::AssetProvider> ),*
        ])
    };
}

pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticProvider(&'static [(&'static str, &'static str)]);

    impl AssetProvider for StaticProvider {
        fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
            self.0
                .iter()
                .find(|(name, _)| *name == path)
                .map(|(_, data)| Cow::Borrowed(data.as_bytes()))
        }

        fn list(&self, path: &str) -> Result<Vec<String>> {
            Ok(self
                .0
                .iter()
                .filter(|(name, _)| name.starts_with(path))
                .map(|(name, _)| (*name).to_owned())
                .collect())
        }
    }

    #[test]
    fn test_first_provider_wins() {
        let assets = assets![
            StaticProvider(&[("styles/a.css", "first")]),
            StaticProvider(&[("styles/a.css", "second"), ("styles/b.css", "b")]),
        ];

        assert_eq!(assets.load_str("styles/a.css").unwrap(), "first");
        assert_eq!(assets.load_str("styles/b.css").unwrap(), "b");
        assert_eq!(
            assets.list("styles/").unwrap(),
            ["styles/a.css", "styles/a.css", "styles/b.css"]
        );
    }

    #[test]
    fn test_missing_and_empty_paths() {
        let assets = assets![StaticProvider(&[])];

        assert!(assets.load("").unwrap().is_none());
        let err = assets.load("nope.css").unwrap_err();
        assert_eq!(err.to_string(), "could not find asset at path \"nope.css\"");
    }
}
