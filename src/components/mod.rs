mod button;
pub use button::*;

mod card;
pub use card::*;

mod header;
pub use header::*;

mod page;
pub use page::*;

mod root;
pub use root::{RenderedDocument, Root};

mod typography;
pub use typography::*;
