//! # KissBot Leaderboard
//!
//! Leaderboard helpers for the bot command surface:
//! - Cascading name resolution (exact, abbreviation, ordered word containment)
//! - Metric path trees for scoring categories
//! - Collapsing of fully held category branches into short labels
//! - Embed field rendering for record listings
//! - Interfaces: Rust library, Python bindings, CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use kissbot_leaderboard::{build_tree, collapse_and_format, resolve, Category, Metric};
//!
//! let puzzles = ["Three Sided Symmetry", "Triplex"];
//! assert_eq!(resolve("TSS", &puzzles), vec![&"Three Sided Symmetry"]);
//!
//! let cost = Metric::new("cost", "G", 0);
//! let cycles = Metric::new("cycles", "C", 1);
//! let area = Metric::new("area", "A", 2);
//! let gc = Category::new("GC", "GC", vec![cost.clone(), cycles]).unwrap();
//! let ga = Category::new("GA", "GA", vec![cost, area]).unwrap();
//!
//! let reference = build_tree([&gc, &ga]);
//! assert_eq!(collapse_and_format([&gc, &ga], &reference), "G");
//! assert_eq!(collapse_and_format([&gc], &reference), "GC");
//! ```

pub mod catalog;
pub mod core;
pub mod embed;
pub mod error;
pub mod format;
pub mod resolver;
pub mod tree;

// Re-export primary types
pub use catalog::{Catalog, CatalogConfig};
pub use crate::core::{Category, CategoryRecord, DisplayContext, Metric, Record, StringFormat};
pub use embed::{embed_category_records, embed_records, EmbedField};
pub use error::{LeaderboardError, Result};
pub use resolver::{resolve, resolve_by, resolve_one, Named};
pub use tree::{build_tree, collapse_and_format, PathTree};

// Python bindings
#[cfg(feature = "python")]
pub mod python;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
