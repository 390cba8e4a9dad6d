//! Pure style derivation helpers shared by the components.

mod cn;
pub use cn::*;

mod styles;
pub use styles::*;

mod helpers;
pub use helpers::*;
