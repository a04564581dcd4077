//! # Lexer - splitting raw input into letters, digits and noise
//!
//! Raw input arrives from the host exactly as it was typed or stored:
//! `"12-345.678 z"`, `" x 1234567 l"`, `"A-58.818.501"`. Before anything can
//! be checked, the significant characters have to be separated from the
//! punctuation and spacing around them.
//!
//! The lexer is lossless: **every byte of the input appears in exactly one
//! token**, so concatenating the token texts gives back the original input.
//!
//! ```
//! use nifvalido_engine::lexer::{lex, TokenKind};
//!
//! let tokens = lex("12-345 z");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Digits, TokenKind::Noise, TokenKind::Digits, TokenKind::Noise, TokenKind::Letters]
//! );
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(reconstructed, "12-345 z");
//! ```
//!
//! Letters and digits are ASCII only, matching the predicates in
//! [`classify`](crate::classify). Anything Logos cannot match becomes
//! [`TokenKind::Noise`].

use logos::Logos;

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of ASCII letters, either case
    #[regex(r"[A-Za-z]+")]
    Letters,

    /// A run of ASCII digits
    #[regex(r"[0-9]+")]
    Digits,

    /// Anything else: spaces, separators, non-ASCII characters
    #[regex(r"[^A-Za-z0-9]+")]
    Noise,
}

impl TokenKind {
    /// Whether tokens of this kind survive stripping.
    pub fn is_significant(self) -> bool {
        matches!(self, TokenKind::Letters | TokenKind::Digits)
    }
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(TokenKind::Noise);
        tokens.push(Token {
            kind,
            text: lexer.slice(),
        });
    }

    tokens
}
