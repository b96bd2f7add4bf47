use std::sync::Arc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Receives the lexer and the text the rule matched at the current position.
/// A handler is responsible for pushing its token and advancing the lexer.
pub type RegexHandler = fn(&mut Lexer, &str);

pub struct LexicalRule {
    pub regex: Regex,
    pub kind: TokenKind,
    pub handler: RegexHandler,
}

lazy_static! {
    /// Chunks are split on Unicode whitespace and on the ASCII information
    /// separators U+001C to U+001F.
    static ref CHUNK_PATTERN: Regex = Regex::new(r"[^\s\x1C-\x1F]+").unwrap();

    /// The rule table, in priority order. Every pattern is anchored so it can
    /// only match a prefix of the remaining chunk; keywords come before the
    /// general identifier rule so they win.
    pub static ref LEXICAL_RULES: Vec<LexicalRule> = vec![
        LexicalRule { regex: Regex::new(r"^\bdef\b").unwrap(), kind: TokenKind::Def, handler: MK_DEFAULT_HANDLER!(TokenKind::Def, "def") },
        LexicalRule { regex: Regex::new(r"^\bend\b").unwrap(), kind: TokenKind::End, handler: MK_DEFAULT_HANDLER!(TokenKind::End, "end") },
        LexicalRule { regex: Regex::new(r"^\b[a-zA-Z]+\b").unwrap(), kind: TokenKind::Identifier, handler: identifier_handler },
        LexicalRule { regex: Regex::new(r"^\b[0-9]+\b").unwrap(), kind: TokenKind::Integer, handler: integer_handler },
        LexicalRule { regex: Regex::new(r"^\(").unwrap(), kind: TokenKind::OpenParen, handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        LexicalRule { regex: Regex::new(r"^\)").unwrap(), kind: TokenKind::CloseParen, handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        LexicalRule { regex: Regex::new(r"^,").unwrap(), kind: TokenKind::Comma, handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
    ];
}

pub struct Lexer {
    rules: &'static [LexicalRule],
    tokens: Vec<Token>,
    source: String,
    /// Absolute byte offset into `source`.
    pos: usize,
    /// End of the chunk currently being matched.
    chunk_end: usize,
    file: Arc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        Lexer::with_rules(source, file, LEXICAL_RULES.as_slice())
    }

    pub fn with_rules(source: String, file: Option<String>, rules: &'static [LexicalRule]) -> Lexer {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        Lexer {
            rules,
            tokens: vec![],
            source,
            pos: 0,
            chunk_end: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The unmatched rest of the current chunk.
    pub fn remainder(&self) -> &str {
        &self.source[self.pos..self.chunk_end]
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Arc::clone(&self.file))
    }

    /// Span covering the next `len` bytes from the current position.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Arc::clone(&self.file)),
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        let chunks: Vec<(usize, usize)> = CHUNK_PATTERN
            .find_iter(&self.source)
            .map(|chunk| (chunk.start(), chunk.end()))
            .collect();

        for (start, end) in chunks {
            self.pos = start;
            self.chunk_end = end;
            self.tokenize_chunk()?;
        }

        Ok(self.tokens)
    }

    /// Splits one chunk by repeated prefix matching: the first rule that
    /// matches the start of the remainder emits a token, then matching
    /// resumes right after it.
    fn tokenize_chunk(&mut self) -> Result<(), Error> {
        let rules = self.rules;

        while self.pos < self.chunk_end {
            let mut matched = None;

            for rule in rules.iter() {
                if let Some(found) = rule.regex.find(self.remainder()) {
                    if found.start() == 0 && !found.is_empty() {
                        matched = Some((rule, found.as_str().to_string()));
                        break;
                    }
                }
            }

            match matched {
                Some((rule, text)) => {
                    trace!("{} matched {:?} at {}", rule.kind, text, self.pos);
                    (rule.handler)(self, &text);
                }
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedToken { token: self.remainder().to_string() },
                        self.position(),
                    ));
                }
            }
        }

        Ok(())
    }
}

fn identifier_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Identifier, String::from(matched), span));
    lexer.advance_n(matched.len());
}

fn integer_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Integer, String::from(matched), span));
    lexer.advance_n(matched.len());
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source, file).tokenize()
}
