/// Arithmetic operators.
///
/// `plus`, `minus`, `times` and `over`, including string concatenation with
/// `plus`.
pub mod arithmetic;

/// Equality and ordering comparisons.
pub mod comparison;

/// Binary operator dispatch.
///
/// Evaluates operands and routes each operator to its handler.
pub mod core;

/// Logical operators.
///
/// `and`, `or` and `nor`, all short-circuiting.
pub mod logic;
