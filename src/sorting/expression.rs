//! Template placeholder expressions inside class lists
//!
//! Class attributes written for template engines may contain placeholders
//! such as `${ active ? 'font-bold' : '' }` or `${ 'hidden' | toggle:open }`.
//! Splitting the attribute on whitespace tears these apart, so the pieces are
//! glued back into one unit before sorting. A unit is then ranked by a class
//! literal it contributes, while its full text is what ends up in the output.
//!
//! Only the shapes below are understood, everything else is kept as an opaque
//! (and therefore unranked) token:
//!
//! - value converter: `${ 'class' | converter:arg }` ranks by `class`
//! - ternary: `${ cond ? 'class-a' : 'class-b' }` ranks by the first branch
//!   literal that looks like a class name

use once_cell::sync::Lazy;
use regex::Regex;

/// Token that opens a placeholder once split on whitespace.
pub const OPEN_MARKER: &str = "${";

/// Token that closes a placeholder once split on whitespace.
pub const CLOSE_MARKER: &str = "}";

static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"["'`]"#).unwrap());

static TERNARY_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r#"["'` ]:["'` ]"#).unwrap());

static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[0-9A-Za-z_\-:&/'`\[\]().]+$"#).unwrap());

/// One sortable unit of a class list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassItem {
    /// Text written to the output.
    pub text: String,
    /// Class literal used for ranking, when it differs from `text`.
    pub key: Option<String>,
}

impl ClassItem {
    /// Wrap a token, extracting a ranking literal if it is a placeholder.
    pub fn reduce(text: String) -> Self {
        let key = if text.starts_with(OPEN_MARKER) {
            representative_class(&text)
        } else {
            None
        };
        Self { text, key }
    }

    /// The string the ranking engine sees for this item.
    pub fn sort_key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.text)
    }
}

/// Tokens with placeholders glued back together, and the whitespace runs that
/// still separate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged<'s> {
    pub tokens: Vec<String>,
    pub whitespace: Vec<&'s str>,
}

/// Join every `${` ... `}` token span back into a single token.
///
/// `whitespace[i]` is the run between `tokens[i]` and `tokens[i + 1]`. Runs
/// that end up inside a joined token are dropped from the returned list. A
/// placeholder that is never closed swallows the rest of the list.
pub fn merge_expressions<'s>(tokens: &[&str], whitespace: &[&'s str]) -> Merged<'s> {
    let mut merged: Vec<String> = Vec::with_capacity(tokens.len());
    let mut consumed = vec![false; whitespace.len()];
    let mut inside = false;

    for (index, token) in tokens.iter().enumerate() {
        if let (true, Some(current)) = (inside, merged.last_mut()) {
            let separator = index - 1;
            if let Some(run) = whitespace.get(separator) {
                current.push_str(run);
                consumed[separator] = true;
            }
            current.push_str(token);
            if *token == CLOSE_MARKER {
                inside = false;
            }
            continue;
        }

        merged.push(token.to_string());
        if *token == OPEN_MARKER {
            inside = true;
        }
    }

    let whitespace = whitespace
        .iter()
        .zip(consumed)
        .filter(|(_, consumed)| !consumed)
        .map(|(run, _)| *run)
        .collect();

    Merged {
        tokens: merged,
        whitespace,
    }
}

/// Extract the class literal a placeholder expression stands for.
///
/// Returns `None` when the expression has neither a value converter nor a
/// ternary, or when no usable literal is found inside it.
pub fn representative_class(expression: &str) -> Option<String> {
    let literal = if !lone_positions(expression, '|').is_empty() {
        converter_literal(expression)
    } else if !lone_positions(expression, '?').is_empty() && TERNARY_COLON.is_match(expression) {
        ternary_literal(expression)
    } else {
        None
    };

    literal.filter(|class| !class.is_empty()).map(str::to_string)
}

/// `${ 'class' | converter }`: first quoted literal left of the first pipe.
fn converter_literal(expression: &str) -> Option<&str> {
    let head = expression
        .split_once('|')
        .map_or(expression, |(head, _)| head);
    QUOTE.split(head).nth(1)
}

/// `${ cond ? 'a' : 'b' }`: first branch literal shaped like a class name.
fn ternary_literal(expression: &str) -> Option<&str> {
    let marks = lone_positions(expression, '?');
    let start = marks.first()? + 1;
    let end = marks.get(1).copied().unwrap_or(expression.len());

    QUOTE
        .split(&expression[start..end])
        .enumerate()
        .filter(|(index, _)| *index == 1 || *index == 3)
        .map(|(_, segment)| segment)
        .find(|segment| CLASS_NAME.is_match(segment))
}

/// Byte offsets of `mark` characters not directly preceded or followed by
/// another `mark` (so `||` and `??` operators are skipped).
fn lone_positions(text: &str, mark: char) -> Vec<usize> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    chars
        .iter()
        .enumerate()
        .filter(|(i, (_, c))| {
            *c == mark
                && (*i == 0 || chars[i - 1].1 != mark)
                && chars.get(i + 1).map_or(true, |(_, next)| *next != mark)
        })
        .map(|(_, (offset, _))| *offset)
        .collect()
}
