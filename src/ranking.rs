//! Table-driven ranking engine
//!
//! A small [`RuleGenerator`] that knows a fixed list of classes, grouped in
//! layers, plus an ordered list of variants. It lets the sorter run without an
//! external engine (the CLI uses it) and mirrors how real engines build their
//! weights out of bit fields:
//!
//! ```text
//!   layer bit (LAYER_SHIFT + layer index)
//! + variant bits (VARIANT_SHIFT + variant index, one per stacked variant)
//! + position of the class inside its layer, starting at 1
//! ```
//!
//! The start of the `components` layer is its bare layer bit, which sits after
//! every base class and before every component.

use crate::config::RankingConfig;
use crate::sorting::{GeneratedRule, Prefix, RuleGenerator};
use num_bigint::BigInt;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// First bit used by variants. Class positions live below it.
pub const VARIANT_SHIFT: usize = 64;

/// First bit used by layers. Variants live below it.
pub const LAYER_SHIFT: usize = 96;

/// Layer whose start anchors companion-only classes.
pub const COMPONENTS_LAYER: &str = "components";

/// Errors raised while building a [`TableRanker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A class list refers to a layer that is not declared.
    UnknownLayer(String),
    /// The same (prefixed) class appears twice.
    DuplicateClass(String),
    /// A required layer is not declared.
    MissingLayer(String),
    /// More variants than bits available between the variant and layer fields.
    TooManyVariants(usize),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::UnknownLayer(name) => write!(f, "Unknown layer '{}'", name),
            TableError::DuplicateClass(name) => write!(f, "Class '{}' is listed twice", name),
            TableError::MissingLayer(name) => write!(f, "Required layer '{}' is missing", name),
            TableError::TooManyVariants(count) => write!(
                f,
                "{} variants configured, at most {} are supported",
                count,
                LAYER_SHIFT - VARIANT_SHIFT
            ),
        }
    }
}

impl std::error::Error for TableError {}

/// Ranking engine backed by configured class and variant tables.
#[derive(Debug)]
pub struct TableRanker {
    prefix: Prefix,
    classes: HashMap<String, BigInt>,
    variants: HashMap<String, BigInt>,
    components_start: BigInt,
}

impl TableRanker {
    /// Build from configuration, using its literal prefix.
    pub fn from_config(config: &RankingConfig) -> Result<Self, TableError> {
        Self::new(config, Prefix::Literal(config.prefix.clone()))
    }

    /// Build from configuration with an explicit prefix (e.g. a computed one).
    pub fn new(config: &RankingConfig, prefix: Prefix) -> Result<Self, TableError> {
        if config.variants.len() > LAYER_SHIFT - VARIANT_SHIFT {
            return Err(TableError::TooManyVariants(config.variants.len()));
        }

        let layer_bits: HashMap<&str, BigInt> = config
            .layers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), BigInt::from(1) << (LAYER_SHIFT + index)))
            .collect();

        let components_start = layer_bits
            .get(COMPONENTS_LAYER)
            .cloned()
            .ok_or_else(|| TableError::MissingLayer(COMPONENTS_LAYER.to_string()))?;

        let mut classes = HashMap::new();
        for (layer, names) in &config.classes {
            let layer_bit = layer_bits
                .get(layer.as_str())
                .ok_or_else(|| TableError::UnknownLayer(layer.clone()))?;

            for (position, name) in names.iter().enumerate() {
                let class = prefix.apply(name);
                let weight = layer_bit + BigInt::from(position + 1);
                if classes.insert(class.clone(), weight).is_some() {
                    return Err(TableError::DuplicateClass(class));
                }
            }
        }

        let variants = config
            .variants
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), BigInt::from(1) << (VARIANT_SHIFT + index)))
            .collect();

        tracing::debug!(
            classes = classes.len(),
            variants = config.variants.len(),
            "built ranking table"
        );

        Ok(Self {
            prefix,
            classes,
            variants,
            components_start,
        })
    }

    /// Weight of a full candidate (variants included), if it is known.
    pub fn weight_of(&self, candidate: &str) -> Option<BigInt> {
        let (variants, utility) = split_variants(candidate);
        let mut weight = self.classes.get(utility)?.clone();
        for variant in variants {
            weight += self.variants.get(variant)?;
        }
        Some(weight)
    }
}

impl RuleGenerator for TableRanker {
    fn generate_rules(&self, candidates: &BTreeSet<String>) -> Vec<GeneratedRule> {
        candidates
            .iter()
            .filter_map(|candidate| {
                let weight = self.weight_of(candidate)?;
                Some(GeneratedRule::new(weight, format!(".{}", candidate)))
            })
            .collect()
    }

    fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    fn components_layer_start(&self) -> BigInt {
        self.components_start.clone()
    }
}

/// Split `sm:hover:p-0` into `(["sm", "hover"], "p-0")`.
///
/// Colons inside square brackets (arbitrary values) do not separate variants.
fn split_variants(candidate: &str) -> (Vec<&str>, &str) {
    let mut variants = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (offset, c) in candidate.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                variants.push(&candidate[start..offset]);
                start = offset + 1;
            }
            _ => {}
        }
    }

    (variants, &candidate[start..])
}
