/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: integer literals, variable references and calls
/// - statements: the top-level `def`
pub mod expressions;
pub mod statements;
