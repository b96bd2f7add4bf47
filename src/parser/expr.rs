use crate::{
    ast::expressions::{Expr, IntegerNode},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::{parse_comma_separated_list, Parser};

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let handler = parser
        .current_token_kind()
        .and_then(|kind| parser.get_nud_lookup().get(&kind).copied());

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected(parser.expression_starts())),
    }
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Integer)?;

    match IntegerNode::from_digits(&token.value) {
        Some(node) => Ok(Expr::Integer(node)),
        None => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.span.start,
        )),
    }
}

/// An identifier starts a call only when it is directly followed by `(`.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.peek_kind(1) == Some(TokenKind::OpenParen) {
        parse_call_expr(parser)
    } else {
        parse_var_ref_expr(parser)
    }
}

pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;

    parser.enter_call(&name)?;
    let arguments = parse_comma_separated_list(parser, parse_expr);
    parser.exit_call();

    Ok(Expr::call(name.value, arguments?))
}

pub fn parse_var_ref_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;

    Ok(Expr::var_ref(name))
}
