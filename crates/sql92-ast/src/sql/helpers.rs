//! Helpers for building sql::ast types in certain shapes and patterns.
//! Everything here goes through the construction interfaces rather than
//! touching node fields.

use sql92_syntax::grammar::*;
use sql92_syntax::value::{ValuePayload, ValueSyntax};

use super::ast::*;
use super::value::Value;

// Expressions //

/// A `true` expression.
pub fn true_expr() -> Expression {
    value_expr(true)
}

/// A `false` expression.
pub fn false_expr() -> Expression {
    value_expr(false)
}

/// An empty `WHERE` clause: filtering on a true literal.
pub fn empty_where() -> Expression {
    true_expr()
}

/// Wrap a host value into a value expression.
pub fn value_expr<V: ValuePayload>(payload: V) -> Expression {
    Expression::value(Value::wrap(payload))
}

/// A bare column reference.
pub fn column(name: &str) -> Expression {
    Expression::field(FieldName::unqualified_field(name.to_string()))
}

/// A column reference qualified with its table.
pub fn table_column(table: &str, name: &str) -> Expression {
    Expression::field(FieldName::qualified_field(
        table.to_string(),
        name.to_string(),
    ))
}

// FROM clauses //

/// A named table as a FROM clause, without an alias.
pub fn from_named_table(name: &str) -> From {
    From::from_table(TableSource::table_named(name.to_string()), None)
}

// SELECTs //

/// Build a simple select with a projection and the rest defaulted.
pub fn simple_select(projection: Projection) -> Select {
    Select::select_stmt(projection, None, empty_where(), None, vec![], None, None)
}

/// Build a select over a FROM clause, everything else defaulted.
pub fn select_from(projection: Projection, from: From) -> Select {
    Select::select_stmt(
        projection,
        Some(from),
        empty_where(),
        None,
        vec![],
        None,
        None,
    )
}
