//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry
//! points. The parser is a recursive descent over the token buffer: the
//! buffer itself is never modified, only the cursor moves forward.
//!
//! Expressions are dispatched through a lookup table keyed by the kind of
//! the token that starts them (see `lookups.rs`).

use std::{collections::HashMap, sync::Arc};

use log::{debug, warn};

use crate::{
    ast::statements::DefNode,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup},
    stmt::parse_def_stmt,
};

/// Calls nested deeper than this are rejected unless the options say otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Behaviour switches for a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject tokens left over after the definition instead of ignoring them.
    pub strict: bool,
    /// How deeply calls may nest inside each other.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the next unconsumed token
    pos: usize,
    /// The name of the source file being parsed
    file: Arc<String>,
    /// Lookup table for expression handlers, keyed by the leading token
    nud_lookup: NUDLookup,
    /// Number of calls currently open
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Shared string containing the source file name
    pub fn new(tokens: Vec<Token>, file: Arc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            nud_lookup: HashMap::new(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a parser that follows `options`.
    pub fn with_options(tokens: Vec<Token>, file: Arc<String>, options: ParseOptions) -> Self {
        let mut parser = Parser::new(tokens, file);
        parser.max_depth = options.max_depth;
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.peek_kind(0)
    }

    /// Returns the kind of the token `offset` positions past the current one.
    pub fn peek_kind(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + offset).map(|token| token.kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind with default error message.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_reporting(expected_kind, vec![expected_kind])
    }

    /// Expects a token of the specified kind, but on failure reports every
    /// kind in `reported` as acceptable. Used where the grammar would also
    /// have accepted another token at this point.
    pub fn expect_reporting(
        &mut self,
        expected_kind: TokenKind,
        reported: Vec<TokenKind>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != Some(expected_kind) {
            return Err(self.unexpected(reported));
        }

        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        Ok(token)
    }

    /// Builds the error for the current token not being one of `expected`.
    pub fn unexpected(&self, expected: Vec<TokenKind>) -> Error {
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    received: token.kind,
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ),
            None => Error::new(
                ErrorImpl::UnexpectedEndOfInput { expected },
                self.end_position(),
            ),
        }
    }

    /// Opens one level of call nesting. `token` is the callee name, where
    /// the error points when the limit is exceeded.
    pub fn enter_call(&mut self, token: &Token) -> Result<(), Error> {
        self.depth += 1;

        if self.depth > self.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.max_depth,
                },
                token.span.start.clone(),
            ));
        }

        Ok(())
    }

    pub fn exit_call(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Token kinds that can start an expression, in TokenKind order.
    pub fn expression_starts(&self) -> Vec<TokenKind> {
        let mut kinds: Vec<TokenKind> = self.nud_lookup.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Registers an expression handler for the token kind that starts it.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Position just past the last token, used for end of input errors.
    pub fn end_position(&self) -> Position {
        match self.tokens.last() {
            Some(token) => token.span.end.clone(),
            None => Position(0, Arc::clone(&self.file)),
        }
    }
}

/// Parses a comma separated list closed by `)`, consuming the `)`.
///
/// The list may be empty; trailing commas are not accepted.
pub fn parse_comma_separated_list<T>(
    parser: &mut Parser,
    parse_item: fn(&mut Parser) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    let mut items = vec![];

    if parser.current_token_kind() != Some(TokenKind::CloseParen) {
        items.push(parse_item(parser)?);

        while parser.current_token_kind() == Some(TokenKind::Comma) {
            parser.advance();
            items.push(parse_item(parser)?);
        }
    }

    parser.expect_reporting(
        TokenKind::CloseParen,
        vec![TokenKind::CloseParen, TokenKind::Comma],
    )?;

    Ok(items)
}

/// Parses a token sequence into a single definition, ignoring any tokens
/// that follow it.
pub fn parse(tokens: Vec<Token>, file: Arc<String>) -> Result<DefNode, Error> {
    parse_with(tokens, file, ParseOptions::default())
}

/// Parses a token sequence into a single definition.
///
/// With `options.strict` set, tokens after the closing `end` are an error.
/// Calls nested deeper than `options.max_depth` are always an error.
pub fn parse_with(tokens: Vec<Token>, file: Arc<String>, options: ParseOptions) -> Result<DefNode, Error> {
    let mut parser = Parser::with_options(tokens, file, options);
    create_token_lookups(&mut parser);

    let def = parse_def_stmt(&mut parser)?;

    if let Some(token) = parser.current_token() {
        if options.strict {
            return Err(Error::new(
                ErrorImpl::TrailingTokens {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }

        warn!(
            "ignoring {} token(s) after the definition of `{}`",
            parser.remaining(),
            def.name
        );
    }

    debug!("parsed definition `{}` with {} parameter(s)", def.name, def.parameters.len());

    Ok(def)
}
