//! Neuralist Match — color-histogram features and cosine-similarity retrieval.

pub mod histogram;
pub mod similarity;
pub mod types;

pub use histogram::{channel_block, extract_color_histogram, extract_from_image};
pub use similarity::{
    checked_similarity, cosine_similarity, find_best_match, find_top_k, find_top_k_above,
};
pub use types::*;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
