use std::collections::HashMap;

use crate::{ast::expressions::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and names
    parser.nud(TokenKind::Integer, parse_integer_expr);
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
}

// Lookup table inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
