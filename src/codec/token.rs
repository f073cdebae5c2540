//! Token stream serialization.
//!
//! On disk a stream is a single line `[tok1,tok2,...,tokN]`; in memory it is
//! an ordered list of opaque token strings.

/// Trailing marker on hex fallback tokens. Not a hex digit, so a fallback
/// token can never collide with another fallback token's hex body.
pub const FALLBACK_MARKER: char = 'x';

/// An ordered sequence of codec tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<String>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Parse serialized form: strip all whitespace, strip one `[` `]` pair if
    /// both are present, then split on `,`. Empty inner text yields an empty
    /// stream, so `[]` round-trips cleanly.
    pub fn parse(raw: &str) -> Self {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let inner = match compact.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            Some(inner) => inner,
            None => compact.as_str(),
        };
        if inner.is_empty() {
            return Self::new();
        }
        Self {
            tokens: inner.split(',').map(str::to_string).collect(),
        }
    }

    /// Serialize as one line. An empty stream is `[]`.
    pub fn to_line(&self) -> String {
        format!("[{}]", self.tokens.join(","))
    }

    pub fn push(&mut self, token: String) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Hex fallback token for text absent from the dictionary: lowercase hex of
/// the UTF-8 bytes plus the trailing marker.
pub fn fallback_token(text: &str) -> String {
    format!("{}{FALLBACK_MARKER}", hex::encode(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_token_hex_of_utf8_bytes() {
        assert_eq!(fallback_token("xyz"), "78797ax");
        assert_eq!(fallback_token(""), "x");
        // Multibyte input is hex of the raw UTF-8 bytes.
        assert_eq!(fallback_token("é"), "c3a9x");
    }

    #[test]
    fn test_parse_strips_brackets_and_whitespace() {
        let stream = TokenStream::parse(" [1, 2,\n3] ");
        assert_eq!(stream.tokens(), ["1", "2", "3"]);
    }

    #[test]
    fn test_parse_without_brackets() {
        let stream = TokenStream::parse("1,2");
        assert_eq!(stream.tokens(), ["1", "2"]);
    }

    #[test]
    fn test_parse_unbalanced_bracket_kept() {
        // Only a matched pair is stripped.
        let stream = TokenStream::parse("[1,2");
        assert_eq!(stream.tokens(), ["[1", "2"]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(TokenStream::parse("[]").is_empty());
        assert!(TokenStream::parse("").is_empty());
    }

    #[test]
    fn test_parse_keeps_empty_tokens_from_stray_commas() {
        let stream = TokenStream::parse("[1,,2]");
        assert_eq!(stream.tokens(), ["1", "", "2"]);
    }

    #[test]
    fn test_to_line_round_trips() {
        let stream = TokenStream::from_tokens(vec!["10".into(), "20".into()]);
        assert_eq!(stream.to_line(), "[10,20]");
        assert_eq!(TokenStream::parse(&stream.to_line()), stream);
    }

    #[test]
    fn test_to_line_empty() {
        assert_eq!(TokenStream::new().to_line(), "[]");
    }
}
