use crate::{ast::statements::DefNode, errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    expr::parse_expr,
    parser::{parse_comma_separated_list, Parser},
};

/// def := "def" IDENTIFIER "(" param_list ")" expression "end"
pub fn parse_def_stmt(parser: &mut Parser) -> Result<DefNode, Error> {
    parser.expect(TokenKind::Def)?;
    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;
    let parameters = parse_comma_separated_list(parser, parse_parameter)?;

    let body = parse_expr(parser)?;
    parser.expect(TokenKind::End)?;

    Ok(DefNode {
        name,
        parameters,
        body,
    })
}

fn parse_parameter(parser: &mut Parser) -> Result<String, Error> {
    Ok(parser.expect(TokenKind::Identifier)?.value)
}
