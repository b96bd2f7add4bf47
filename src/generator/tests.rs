//! Unit tests for code generation.

use std::sync::Arc;

use crate::{
    ast::{
        expressions::{CallNode, Expr, IntegerNode, VarRef},
        statements::DefNode,
    },
    lexer::lexer::tokenize,
    parser::parser::parse,
};

use super::generator::generate;

fn translate(source: &str) -> String {
    let tokens = tokenize(source.to_string(), None).unwrap();
    let def = parse(tokens, Arc::new("test.js".to_string())).unwrap();
    generate(&def)
}

#[test]
fn test_generate_identity_function() {
    assert_eq!(translate("def id(x) x end"), "def id(x): return x");
}

#[test]
fn test_generate_call_body() {
    assert_eq!(translate("def add(a,b) add(a,b) end"), "def add(a,b): return add(a,b)");
}

#[test]
fn test_generate_normalizes_whitespace() {
    assert_eq!(
        translate("def   f ( a ,\n b )\n  g( a , h( b ) , 3 )\nend"),
        "def f(a,b): return g(a,h(b),3)"
    );
}

#[test]
fn test_generate_no_parameters() {
    assert_eq!(translate("def answer() 42 end"), "def answer(): return 42");
}

#[test]
fn test_generate_empty_call() {
    let call = CallNode {
        name: "now".to_string(),
        arguments: vec![],
    };
    assert_eq!(generate(&call), "now()");
}

#[test]
fn test_generate_leaves() {
    assert_eq!(generate(&IntegerNode { value: "7".to_string() }), "7");
    assert_eq!(generate(&VarRef { name: "total".to_string() }), "total");
}

#[test]
fn test_integers_render_identically_everywhere() {
    // directly, as a call argument and in return position
    let direct = generate(&IntegerNode { value: "15".to_string() });
    let from_expr = generate(&Expr::integer(15));
    assert_eq!(direct, from_expr);

    let as_argument = translate("def f() g(15) end");
    assert_eq!(as_argument, format!("def f(): return g({direct})"));

    let as_body = translate("def f() 15 end");
    assert_eq!(as_body, format!("def f(): return {direct}"));
}

#[test]
fn test_generate_is_deterministic() {
    let def = DefNode {
        name: "f".to_string(),
        parameters: vec!["x".to_string(), "y".to_string()],
        body: Expr::call("g", vec![Expr::var_ref("x"), Expr::call("h", vec![Expr::integer(0)])]),
    };

    let first = generate(&def);
    let second = generate(&def);
    assert_eq!(first, second);
    assert_eq!(first, "def f(x,y): return g(x,h(0))");
}
