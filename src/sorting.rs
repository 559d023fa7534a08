//! Utility-class sorting
//!
//! Reorders the classes of a class attribute or `@apply` rule into the order
//! defined by a ranking engine, touching nothing but the order of the tokens.

pub mod class_list;
pub mod class_string;
pub mod compare;
pub mod context;
pub mod expression;
pub mod rank;

pub use class_list::sort_class_list;
pub use class_string::{sort_classes, SortOptions, ESCAPE_MARKER};
pub use context::{BatchRanker, GeneratedRule, Prefix, RankResolver, RuleGenerator};
pub use rank::Rank;
