//! # classorder
//!
//! Reorders utility classes (`p-0 sm:flex hover:underline ...`) found in HTML
//! class attributes and CSS `@apply` rules into a canonical order.
//!
//! The order itself comes from a ranking engine reached through
//! [`sorting::RankResolver`]. This crate only extracts candidate tokens, asks
//! for their ranks, sorts them and splices the result back into the original
//! string, leaving whitespace and template placeholders intact.
//!
//! ```ignore
//! use classorder::ranking::TableRanker;
//! use classorder::sorting::{sort_classes, RankResolver, SortOptions};
//!
//! let config = classorder::config::load_defaults()?;
//! let table = TableRanker::from_config(&config.ranking)?;
//! let sorted = sort_classes("sm:p-0 p-0", &RankResolver::single(&table), SortOptions::default());
//! assert_eq!(sorted, "p-0 sm:p-0");
//! ```

pub mod config;
pub mod ranking;
pub mod sorting;
pub mod targets;

pub use sorting::{sort_class_list, sort_classes, RankResolver, SortOptions};
pub use targets::{sort_target, Target};
