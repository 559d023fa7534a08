//! Property-based tests for class string sorting
//!
//! These tests ensure that sorting only ever moves whole classes around:
//! nothing is lost, nothing is invented, and a second pass changes nothing.

use classorder::config::load_defaults;
use classorder::ranking::TableRanker;
use classorder::sorting::{sort_classes, RankResolver, SortOptions};
use proptest::prelude::*;

fn table() -> TableRanker {
    let config = load_defaults().expect("defaults to deserialize");
    TableRanker::from_config(&config.ranking).expect("defaults to build a table")
}

fn utility_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("block"),
        Just("flex"),
        Just("p-0"),
        Just("p-4"),
        Just("text-sm"),
        Just("uppercase"),
        Just("container"),
        Just("group"),
        Just("peer"),
    ]
}

/// Template placeholders written without inner whitespace
fn compact_placeholder_strategy() -> impl Strategy<Value = String> {
    (utility_strategy(), any::<bool>()).prop_map(|(u, ternary)| {
        if ternary {
            format!("${{on?'{}':''}}", u)
        } else {
            format!("${{'{}'|toggle:on}}", u)
        }
    })
}

/// Known utilities, optionally behind variants, placeholders, plus classes
/// the table can't rank
fn class_strategy() -> impl Strategy<Value = String> {
    let variant = prop_oneof![Just(""), Just("sm:"), Just("md:hover:"), Just("dark:")];

    prop_oneof![
        3 => (variant, utility_strategy()).prop_map(|(v, u)| format!("{}{}", v, u)),
        1 => compact_placeholder_strategy(),
        1 => "[a-z][a-z0-9-]{0,8}",
    ]
}

/// Template placeholders spread over several whitespace separated fragments
fn spaced_placeholder_strategy() -> impl Strategy<Value = String> {
    let run = prop_oneof![Just(" "), Just("  "), Just("\n    ")];
    (utility_strategy(), any::<bool>(), prop::collection::vec(run, 6)).prop_map(
        |(u, ternary, runs)| {
            let literal = format!("'{}'", u);
            let fragments: Vec<&str> = if ternary {
                vec!["${", "on", "?", literal.as_str(), ":", "''", "}"]
            } else {
                vec!["${", literal.as_str(), "|", "toggle:on", "}"]
            };
            let mut text = fragments[0].to_string();
            for (fragment, run) in fragments[1..].iter().zip(runs) {
                text.push_str(run);
                text.push_str(fragment);
            }
            text
        },
    )
}

fn whitespace_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("  ".to_string()),
        Just("\n    ".to_string()),
        Just("\t".to_string()),
    ]
}

/// A class string with arbitrary whitespace runs between the classes
fn class_string_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((class_strategy(), whitespace_strategy()), 1..12).prop_map(|pairs| {
        let mut text = String::new();
        let last = pairs.len() - 1;
        for (index, (class, run)) in pairs.into_iter().enumerate() {
            text.push_str(&class);
            if index < last {
                text.push_str(&run);
            }
        }
        text
    })
}

fn sorted_chars(text: &str) -> Vec<char> {
    let mut chars: Vec<char> = text.chars().collect();
    chars.sort_unstable();
    chars
}

proptest! {
    #[test]
    fn sorting_is_idempotent(text in class_string_strategy()) {
        let table = table();
        let resolver = RankResolver::single(&table);
        let once = sort_classes(&text, &resolver, SortOptions::default());
        let twice = sort_classes(&once, &resolver, SortOptions::default());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sorting_preserves_characters(text in class_string_strategy()) {
        let table = table();
        let sorted = sort_classes(&text, &RankResolver::single(&table), SortOptions::default());
        prop_assert_eq!(sorted_chars(&sorted), sorted_chars(&text));
    }

    #[test]
    fn sorting_preserves_whitespace_layout(text in class_string_strategy()) {
        let table = table();
        let sorted = sort_classes(&text, &RankResolver::single(&table), SortOptions::default());
        let runs = |s: &str| -> Vec<String> {
            s.split(|c: char| !c.is_whitespace())
                .filter(|run| !run.is_empty())
                .map(str::to_string)
                .collect()
        };
        prop_assert_eq!(runs(&sorted), runs(&text));
    }

    #[test]
    fn ignore_first_pins_the_first_class(text in class_string_strategy()) {
        let table = table();
        let options = SortOptions { ignore_first: true, ignore_last: false };
        let sorted = sort_classes(&text, &RankResolver::single(&table), options);
        prop_assert_eq!(
            sorted.split_whitespace().next(),
            text.split_whitespace().next()
        );
    }

    #[test]
    fn interpolation_is_passed_through(text in class_string_strategy()) {
        let table = table();
        let escaped = format!("{} {{{{ value }}}}", text);
        let sorted = sort_classes(&escaped, &RankResolver::single(&table), SortOptions::default());
        prop_assert_eq!(sorted, escaped);
    }

    #[test]
    fn ignore_last_pins_the_last_class(text in class_string_strategy()) {
        let table = table();
        let options = SortOptions { ignore_first: false, ignore_last: true };
        let sorted = sort_classes(&text, &RankResolver::single(&table), options);
        prop_assert_eq!(
            sorted.split_whitespace().next_back(),
            text.split_whitespace().next_back()
        );
        prop_assert_eq!(sorted_chars(&sorted), sorted_chars(&text));
    }

    #[test]
    fn placeholders_keep_their_text(
        before in class_string_strategy(),
        placeholder in spaced_placeholder_strategy(),
        after in class_string_strategy(),
    ) {
        let table = table();
        let text = format!("{} {} {}", before, placeholder, after);
        let sorted = sort_classes(&text, &RankResolver::single(&table), SortOptions::default());
        prop_assert!(sorted.contains(&placeholder), "{:?} lost {:?}", sorted, placeholder);
        prop_assert_eq!(sorted_chars(&sorted), sorted_chars(&text));
    }
}
