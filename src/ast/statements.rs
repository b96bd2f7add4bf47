use super::expressions::Expr;

/// Def Node
/// The root of every parse: `def name(parameters) body end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefNode {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Expr,
}
