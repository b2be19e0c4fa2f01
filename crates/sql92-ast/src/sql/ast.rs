//! Type definitions of a SQL92 DML AST representation.
//!
//! Every node owns its children outright; trees are plain values with
//! structural equality and no sharing.

use super::value::Value;

/// A complete DML command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub projection: Projection,
    pub from: Option<From>,
    pub where_: Expression,
    pub group_by: Option<Grouping>,
    pub order_by: Vec<Ordering>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: TableName,
    pub fields: Vec<ColumnName>,
    pub values: InsertValues,
}

/// Source from which values would be inserted.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertValues {
    /// Literal rows of expressions
    Values(Vec<Vec<Expression>>),
    /// Rows produced by a query
    Select(Box<Select>),
}

/// An UPDATE statement. The SET list keeps the order it was built in.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: TableName,
    pub set: Vec<(FieldName, Expression)>,
    pub where_: Expression,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: TableName,
    pub where_: Expression,
}

/// A projection list: expressions with optional output aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub elements: Vec<(Expression, Option<String>)>,
}

/// A FROM clause
#[derive(Debug, Clone, PartialEq)]
pub enum From {
    /// Select from a table source
    Table {
        source: TableSource,
        alias: Option<String>,
    },
    /// Join two FROM clauses
    Join {
        kind: JoinKind,
        left: Box<From>,
        right: Box<From>,
        on: Option<Expression>,
    },
}

/// A source relation in a FROM clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableSource {
    /// refers to a db table object name
    Named(TableName),
}

/// The operator of a JOIN clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinKind {
    /// INNER JOIN
    Inner,
    /// LEFT OUTER JOIN
    Left,
    /// RIGHT OUTER JOIN
    Right,
    /// FULL OUTER JOIN
    Outer,
}

/// A GROUP BY clause, currently a structureless marker
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {}

/// A single element in an ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct Ordering {
    pub target: Expression,
    pub direction: OrderingDirection,
}

/// A direction for a single ORDER BY element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderingDirection {
    Asc,
    Desc,
}

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// An irreducible value
    Value(Value),
    /// A parenthesized list of expressions
    ValueList(Vec<Expression>),
    /// A field reference
    FieldName(FieldName),
    /// An IS NULL test
    IsNull(Box<Expression>),
    /// An IS NOT NULL test
    IsNotNull(Box<Expression>),
    /// A searched CASE expression; the default is the ELSE branch
    Case {
        cases: Vec<(Expression, Expression)>,
        default: Box<Expression>,
    },
    /// A binary operation on two scalar expressions
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    /// An unary operation on a scalar expression
    UnaryOperation {
        expression: Box<Expression>,
        operator: UnaryOperator,
    },
    /// A scalar function call
    FunctionCall {
        function: Function,
        args: Vec<Expression>,
    },
    /// An EXISTS clause
    Exists { select: Box<Select> },
}

/// A reference to a field, used in expressions and UPDATE SET lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// refers to a column qualified by its table
    Qualified { table: TableName, name: ColumnName },
    /// refers to a bare column
    Unqualified(ColumnName),
}

/// Represents the name of a binary operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOperator(pub String);

/// Represents the name of an unary operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryOperator(pub String);

/// Represents the name of a scalar function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function(pub String);

/// A database table name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(pub String);

/// A database table's column name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(pub String);
