//! Design tokens for `custom_ui`: colors, typography, spacing, radii, shadows
//! and breakpoints, loaded from JSON and overridable by deep merge.

mod schema;
pub use schema::*;

mod deserializers;

mod merge;
pub use merge::deep_merge;

mod error;
pub use error::ThemeError;
