/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The trait shared by every node
/// - expressions: Expressions, function literals and their parameters
/// - statements: Declarations and statements
/// - types: Type annotations
///
/// Every node owns its children and renders back to source text through
/// `Display`; the rendering parses back to the same tree.
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
