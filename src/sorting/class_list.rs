//! Sorting of pre-tokenized class lists

use crate::sorting::context::RankResolver;
use crate::sorting::rank::Rank;

/// Sort `classes` into canonical order.
///
/// Unranked classes come first. Classes with equal ranks keep their relative
/// input order.
pub fn sort_class_list<S: AsRef<str>>(classes: &[S], resolver: &RankResolver<'_>) -> Vec<String> {
    let classes: Vec<&str> = classes.iter().map(AsRef::as_ref).collect();
    sort_by_rank(resolver.resolve(&classes))
}

/// Stable sort of arbitrary payloads by their rank, dropping the ranks.
pub(crate) fn sort_by_rank<T>(mut ranked: Vec<(T, Rank)>) -> Vec<T> {
    // `sort_by` is stable, ties keep input order
    ranked.sort_by(|(_, a), (_, b)| a.cmp(b));
    ranked.into_iter().map(|(item, _)| item).collect()
}
