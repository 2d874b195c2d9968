pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod sample;
pub mod types;

pub use catalog::{ArticleCatalog, RECENT_ARTICLE_COUNT};
pub use config::{load_site, parse_site_toml};
pub use content::{BlockKind, ContentBlock, TextToBlocks, classify};
pub use error::{Error, Result};
pub use nav::{MenuState, Navigation, is_active};
pub use types::*;
