pub mod node;
pub mod ready;
pub mod router;

pub use ready::on_content_ready;
pub use router::{ClickRouter, ThumbnailClick};
