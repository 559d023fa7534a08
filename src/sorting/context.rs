//! Ranking context: the seam between the sorter and the ranking engine
//!
//! The engine that knows the canonical order of utility classes lives outside
//! this crate. It is reached through one of two interfaces:
//!
//! - [`BatchRanker`]: the engine ranks a whole list of classes at once.
//! - [`RuleGenerator`]: the engine can only generate rules for a set of
//!   candidate classes. Ranks are derived one class at a time from the
//!   heaviest generated rule.
//!
//! The interface is chosen once, when the [`RankResolver`] is built.

use crate::sorting::compare::compare_weights;
use crate::sorting::rank::Rank;
use num_bigint::BigInt;
use std::collections::BTreeSet;
use std::fmt;

/// Literal names of classes that have no rule of their own but are required
/// by other utilities (`group-hover:*`, `peer-checked:*`, ...).
pub const PARASITE_UTILITIES: [&str; 2] = ["group", "peer"];

/// An engine that ranks a full class list in one call.
///
/// Implementations must return one pair per input class, in input order.
pub trait BatchRanker {
    fn class_order(&self, classes: &[&str]) -> Vec<(String, Rank)>;
}

/// A rule produced by the engine for a candidate class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRule {
    /// Ordering weight of the rule. Larger weights come later.
    pub weight: BigInt,
    /// Engine-specific description of the rule (selector, layer, ...).
    pub rule: String,
}

impl GeneratedRule {
    pub fn new(weight: impl Into<BigInt>, rule: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            rule: rule.into(),
        }
    }
}

/// An engine that can only generate rules for candidate classes.
pub trait RuleGenerator {
    /// Generate every rule matching one of `candidates`.
    fn generate_rules(&self, candidates: &BTreeSet<String>) -> Vec<GeneratedRule>;

    /// The prefix configured for utility names.
    fn prefix(&self) -> &Prefix;

    /// The weight at which the `components` layer starts.
    fn components_layer_start(&self) -> BigInt;
}

/// Prefix applied to utility names, either a fixed string or a function.
pub enum Prefix {
    Literal(String),
    Computed(Box<dyn Fn(&str) -> String + Send + Sync>),
}

impl Prefix {
    pub fn none() -> Self {
        Prefix::Literal(String::new())
    }

    pub fn apply(&self, name: &str) -> String {
        match self {
            Prefix::Literal(prefix) => format!("{}{}", prefix, name),
            Prefix::Computed(compute) => compute(name),
        }
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prefix::Literal(prefix) => f.debug_tuple("Literal").field(prefix).finish(),
            Prefix::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Resolves ranks for class tokens through the engine interface it was built with.
#[derive(Clone, Copy)]
pub enum RankResolver<'a> {
    Batch(&'a dyn BatchRanker),
    Single(&'a dyn RuleGenerator),
}

impl<'a> RankResolver<'a> {
    pub fn batch(ranker: &'a dyn BatchRanker) -> Self {
        RankResolver::Batch(ranker)
    }

    pub fn single(generator: &'a dyn RuleGenerator) -> Self {
        RankResolver::Single(generator)
    }

    /// Pair every class with its rank.
    pub fn resolve(&self, classes: &[&str]) -> Vec<(String, Rank)> {
        match self {
            RankResolver::Batch(ranker) => ranker.class_order(classes),
            RankResolver::Single(generator) => resolve_one_by_one(*generator, classes),
        }
    }
}

impl fmt::Debug for RankResolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankResolver::Batch(_) => f.write_str("RankResolver::Batch"),
            RankResolver::Single(_) => f.write_str("RankResolver::Single"),
        }
    }
}

fn resolve_one_by_one(generator: &dyn RuleGenerator, classes: &[&str]) -> Vec<(String, Rank)> {
    let parasites: BTreeSet<String> = PARASITE_UTILITIES
        .iter()
        .map(|name| generator.prefix().apply(name))
        .collect();

    classes
        .iter()
        .map(|class| {
            let candidates = BTreeSet::from([class.to_string()]);
            let heaviest = generator
                .generate_rules(&candidates)
                .into_iter()
                .max_by(|a, b| compare_weights(&a.weight, &b.weight));

            let rank = match heaviest {
                Some(rule) => Rank::Ranked(rule.weight),
                None if parasites.contains(*class) => {
                    tracing::trace!(class, "anchoring parasite utility at components layer start");
                    Rank::Ranked(generator.components_layer_start())
                }
                None => Rank::Unranked,
            };

            (class.to_string(), rank)
        })
        .collect()
}
