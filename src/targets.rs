//! Where class strings come from
//!
//! Host formatters hand over two kinds of class strings: the value of a class
//! attribute, and the parameter list of an `@apply` rule. The latter may end
//! with an importance flag, which belongs to the rule and must stay last.

use crate::sorting::{sort_classes, RankResolver, SortOptions};

/// Trailing `@apply` tokens that are flags, not classes.
pub const IMPORTANT_MARKERS: [&str; 2] = ["!important", "#{!important}"];

/// Kind of string being sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Value of an HTML `class` attribute.
    ClassAttribute,
    /// Parameters of a CSS, SCSS or LESS `@apply` rule.
    ApplyDirective,
}

impl Target {
    /// Options to sort `text` with, given the caller's defaults.
    pub fn options_for(self, text: &str, options: SortOptions) -> SortOptions {
        match self {
            Target::ClassAttribute => options,
            Target::ApplyDirective if ends_with_important(text) => SortOptions {
                ignore_last: true,
                ..options
            },
            Target::ApplyDirective => options,
        }
    }
}

/// Sort the classes of `text` according to where it came from.
///
/// When an importance flag is pinned in place, whitespace after it is set
/// aside first so it stays at the end of the output.
pub fn sort_target(
    target: Target,
    text: &str,
    resolver: &RankResolver<'_>,
    options: SortOptions,
) -> String {
    let options = target.options_for(text, options);
    if target != Target::ApplyDirective || !ends_with_important(text) {
        return sort_classes(text, resolver, options);
    }

    let (body, trailing) = split_trailing_whitespace(text);
    let mut sorted = sort_classes(body, resolver, options);
    sorted.push_str(trailing);
    sorted
}

fn ends_with_important(text: &str) -> bool {
    text.split_ascii_whitespace()
        .next_back()
        .is_some_and(|last| IMPORTANT_MARKERS.contains(&last))
}

fn split_trailing_whitespace(text: &str) -> (&str, &str) {
    let body = text.trim_end_matches(['\t', '\r', '\x0C', '\n', ' ']);
    text.split_at(body.len())
}
