/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The Node trait, node kinds and the Element/Expr sums
/// - expressions: Identifiers, literals, calls and arguments
/// - statements: The program root, comments, imports and declarations
/// - types: Literal values and their type tags
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
