/// The token marking a vertex without children.
pub const LEAF_MARKER: &str = "-";

/// The outcome of parsing a single whitespace-delimited token.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Token {
    /// The token is exactly [`LEAF_MARKER`].
    LeafMarker,
    /// The token is a non-negative decimal integer.
    Value(usize),
    /// Anything else: empty, negative, fractional, trailing garbage, or too
    /// large to be a vertex id.
    Invalid,
}

/// Parses a token into a [`Token`].
///
/// A value is a run of ASCII digits, optionally preceded by a minus sign
/// provided the value is zero (so `-0` is `0`, but `-3` is invalid). Partial
/// parses such as `3x` and non-integral values such as `3.5` are invalid.
///
/// # Examples
/// ```
/// # use tree_analyzer::parser::{parse_token, Token};
/// assert_eq!(parse_token("-"), Token::LeafMarker);
/// assert_eq!(parse_token("42"), Token::Value(42));
/// assert_eq!(parse_token("3.5"), Token::Invalid);
/// ```
pub fn parse_token(token: &str) -> Token {
    if token == LEAF_MARKER {
        return Token::LeafMarker;
    }

    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Token::Invalid;
    }

    match digits.parse::<usize>() {
        Ok(0) => Token::Value(0),
        Ok(_) if negative => Token::Invalid,
        Ok(value) => Token::Value(value),
        Err(_) => Token::Invalid,
    }
}
