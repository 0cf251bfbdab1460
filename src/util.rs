/// Decimal helpers.
///
/// Numbers are arbitrary-precision decimals. This module holds the parsing
/// and formatting rules shared by the lexer (number literals), the value
/// layer (string to number coercion, display) and the evaluator
/// (increment magnitudes, zero checks).
pub mod num;
