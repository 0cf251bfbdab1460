/// Type coercions.
///
/// Numeric conversion, loose equality and ordering between values of
/// possibly different types.
///
/// Equality never fails: values that cannot be compared are simply unequal.
/// Ordering fails with a runtime error when the operands have no common
/// order.
pub mod coercion;

pub mod core;
