//! Sorting of raw class strings
//!
//! The input is the raw value of a class attribute or the parameters of an
//! `@apply` rule. The pipeline is:
//!
//! 1. Tokenize on whitespace runs, keeping the runs.
//! 2. Optionally set the first and/or last token aside (the envelope).
//! 3. Glue template placeholders back into single items.
//! 4. Rank and sort the items.
//! 5. Reassemble: every item is followed by the whitespace run found at its
//!    new position in the original layout.
//!
//! Placeholders are carried through the sort as items, so their text is put
//! back exactly as written.

use crate::sorting::class_list::sort_by_rank;
use crate::sorting::context::RankResolver;
use crate::sorting::expression::{merge_expressions, ClassItem};
use crate::sorting::rank::Rank;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// Strings containing this marker carry interpolation the sorter can't see
/// through, so they are returned untouched.
pub const ESCAPE_MARKER: &str = "{{";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\r\x0C\n ]+").unwrap());

/// Knobs for [`sort_classes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// Keep the first token (and the whitespace after it) in place.
    pub ignore_first: bool,
    /// Keep the last token (and the whitespace before it) in place.
    pub ignore_last: bool,
}

/// A class string split into tokens and the whitespace runs between them.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClassParts<'s> {
    classes: Vec<&'s str>,
    whitespace: Vec<&'s str>,
}

impl<'s> ClassParts<'s> {
    fn tokenize(text: &'s str) -> Self {
        let mut classes = Vec::new();
        let mut whitespace = Vec::new();
        let mut last = 0;

        for run in WHITESPACE.find_iter(text) {
            classes.push(&text[last..run.start()]);
            whitespace.push(run.as_str());
            last = run.end();
        }
        classes.push(&text[last..]);

        if classes.last() == Some(&"") {
            classes.pop();
        }

        Self {
            classes,
            whitespace,
        }
    }

    /// Remove the exempt first/last tokens, returning the text to put back
    /// before and after the sorted region.
    fn split_envelope(&mut self, options: SortOptions) -> (String, String) {
        let mut prefix = String::new();
        if options.ignore_first {
            prefix.push_str(take_first(&mut self.classes));
            prefix.push_str(take_first(&mut self.whitespace));
        }

        let mut suffix = String::new();
        if options.ignore_last {
            suffix.push_str(self.whitespace.pop().unwrap_or(""));
            suffix.push_str(self.classes.pop().unwrap_or(""));
        }

        (prefix, suffix)
    }
}

fn take_first<'s>(parts: &mut Vec<&'s str>) -> &'s str {
    if parts.is_empty() {
        ""
    } else {
        parts.remove(0)
    }
}

/// Sort the classes of a whitespace separated class string.
///
/// Empty strings and strings containing [`ESCAPE_MARKER`] are returned as is.
#[tracing::instrument(level = "debug", skip(text, resolver), fields(len = text.len()))]
pub fn sort_classes(text: &str, resolver: &RankResolver<'_>, options: SortOptions) -> String {
    if text.is_empty() || text.contains(ESCAPE_MARKER) {
        tracing::trace!("class string passed through unsorted");
        return text.to_string();
    }

    let mut parts = ClassParts::tokenize(text);
    let (prefix, suffix) = parts.split_envelope(options);

    let merged = merge_expressions(&parts.classes, &parts.whitespace);
    let items: Vec<ClassItem> = merged.tokens.into_iter().map(ClassItem::reduce).collect();

    let ranks = {
        let keys: Vec<&str> = items.iter().map(ClassItem::sort_key).collect();
        resolver.resolve(&keys)
    };
    if ranks.len() != items.len() {
        tracing::debug!(
            expected = items.len(),
            received = ranks.len(),
            "ranking engine returned a mismatched number of ranks"
        );
    }

    let ranked = items
        .into_iter()
        .zip(
            ranks
                .into_iter()
                .map(|(_, rank)| rank)
                .chain(std::iter::repeat(Rank::Unranked)),
        )
        .collect();
    let sorted = sort_by_rank(ranked);

    let mut result = prefix;
    for (index, item) in sorted.iter().enumerate() {
        result.push_str(&item.text);
        result.push_str(merged.whitespace.get(index).copied().unwrap_or(""));
    }
    result.push_str(&suffix);
    result
}
