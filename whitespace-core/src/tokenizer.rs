// whitespace-core/src/tokenizer.rs

//! `tokenizer.rs`
//! Turns program text into the three-symbol token stream.
//!
//! Only space (0x20), tab (0x09), and linefeed (0x0A) are meaningful;
//! every other character is a comment and is skipped. Each token records
//! the byte offset it was found at, for diagnostics.

use std::fmt;

/// The three meaningful characters of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Space,
    Tab,
    Newline,
}

impl TokenKind {
    /// Single-letter form used in diagnostics and label rendering.
    pub fn letter(self) -> char {
        match self {
            TokenKind::Space => 'S',
            TokenKind::Tab => 'T',
            TokenKind::Newline => 'N',
        }
    }

    fn from_char(c: char) -> Option<TokenKind> {
        match c {
            ' ' => Some(TokenKind::Space),
            '\t' => Some(TokenKind::Tab),
            '\n' => Some(TokenKind::Newline),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One meaningful character, with the byte offset it occupies in the
/// source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]->{}", self.position, self.kind)
    }
}

/// Scans `source` and returns every meaningful character as a token, in
/// order. Never fails; unrecognized characters are simply not tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    source
        .char_indices()
        .filter_map(|(position, c)| {
            TokenKind::from_char(c).map(|kind| Token { kind, position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_three_symbols() {
        let tokens = tokenize(" \t\n");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Space, TokenKind::Tab, TokenKind::Newline]
        );
    }

    #[test]
    fn skips_comment_characters_but_keeps_positions() {
        let tokens = tokenize("push: \tthen\n");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token { kind: TokenKind::Space, position: 5 });
        assert_eq!(tokens[1], Token { kind: TokenKind::Tab, position: 6 });
        assert_eq!(tokens[2], Token { kind: TokenKind::Newline, position: 11 });
    }

    #[test]
    fn empty_source_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("only-comment-characters!").is_empty());
    }

    #[test]
    fn tokens_render_with_position_and_letter() {
        let token = Token { kind: TokenKind::Tab, position: 7 };
        assert_eq!(token.to_string(), "[7]->T");
    }
}
