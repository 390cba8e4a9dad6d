mod assets;
pub use assets::*;
use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "assets")] {
        mod custom_ui_assets;
        pub use custom_ui_assets::*;
    }
);
