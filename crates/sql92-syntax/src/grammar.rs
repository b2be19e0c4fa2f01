//! One construction trait per syntax category of the SQL92 DML grammar.
//!
//! The traits are wired together with associated types so that a whole
//! family of implementing types shares one expression type, one field-name
//! type and so on. Every operation is total: arguments are taken as given
//! and recorded, never checked.

use crate::value::ValueSyntax;

// Statements //

/// A complete DML command, one of the four statement kinds.
pub trait CommandSyntax: Sized {
    type Select: SelectSyntax;
    type Insert: InsertSyntax;
    type Update: UpdateSyntax;
    type Delete: DeleteSyntax;

    fn select_command(select: Self::Select) -> Self;
    fn insert_command(insert: Self::Insert) -> Self;
    fn update_command(update: Self::Update) -> Self;
    fn delete_command(delete: Self::Delete) -> Self;
}

/// A SELECT statement.
///
/// `Grouping` deliberately has no interface of its own; it marks the
/// presence of a GROUP BY clause without giving it structure.
pub trait SelectSyntax: Sized {
    type Expression: ExpressionSyntax<Select = Self>;
    type Projection: ProjectionSyntax<Expression = Self::Expression>;
    type From: FromSyntax<Expression = Self::Expression>;
    type Grouping;
    type Ordering: OrderingSyntax<Expression = Self::Expression>;

    /// Assemble a SELECT from its clauses. The where-expression is always
    /// present; builders that want no filtering pass a true literal.
    fn select_stmt(
        projection: Self::Projection,
        from: Option<Self::From>,
        where_: Self::Expression,
        group_by: Option<Self::Grouping>,
        order_by: Vec<Self::Ordering>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Self;
}

/// An INSERT statement.
pub trait InsertSyntax: Sized {
    type Values: InsertValuesSyntax;

    /// Insert into the named table. Whether the field list and the rows
    /// agree in length is the caller's business, not checked here.
    fn insert_stmt(table: String, fields: Vec<String>, values: Self::Values) -> Self;
}

/// The source of rows for an INSERT: literal rows or a query.
pub trait InsertValuesSyntax: Sized {
    type Expression: ExpressionSyntax;
    type Select: SelectSyntax<Expression = Self::Expression>;

    fn values(rows: Vec<Vec<Self::Expression>>) -> Self;
    fn from_select(select: Self::Select) -> Self;
}

/// An UPDATE statement.
pub trait UpdateSyntax: Sized {
    type FieldName: FieldNameSyntax;
    type Expression: ExpressionSyntax<FieldName = Self::FieldName>;

    /// Update the named table. The SET list keeps its order.
    fn update_stmt(
        table: String,
        set: Vec<(Self::FieldName, Self::Expression)>,
        where_: Self::Expression,
    ) -> Self;
}

/// A DELETE statement.
pub trait DeleteSyntax: Sized {
    type Expression: ExpressionSyntax;

    fn delete_stmt(table: String, where_: Self::Expression) -> Self;
}

// Clauses //

/// The projected columns of a SELECT, each with an optional output alias.
pub trait ProjectionSyntax: Sized {
    type Expression: ExpressionSyntax;

    fn project(elements: Vec<(Self::Expression, Option<String>)>) -> Self;
}

/// A single element in an ORDER BY clause.
pub trait OrderingSyntax: Sized {
    type Expression: ExpressionSyntax;

    fn asc(target: Self::Expression) -> Self;
    fn desc(target: Self::Expression) -> Self;
}

/// A relation to select from.
pub trait TableSourceSyntax: Sized {
    fn table_named(name: String) -> Self;
}

/// A FROM clause: a table source, or a join of two FROM clauses.
///
/// Joins nest arbitrarily on both sides, so a FROM clause is a full binary
/// tree of joins with table sources at the leaves.
pub trait FromSyntax: Sized {
    type TableSource: TableSourceSyntax;
    type Expression: ExpressionSyntax;

    fn from_table(source: Self::TableSource, alias: Option<String>) -> Self;

    fn inner_join(self, right: Self, on: Option<Self::Expression>) -> Self;
    fn left_join(self, right: Self, on: Option<Self::Expression>) -> Self;
    fn right_join(self, right: Self, on: Option<Self::Expression>) -> Self;
}

/// FULL OUTER JOIN support, opt-in on top of [`FromSyntax`].
pub trait FromOuterJoinSyntax: FromSyntax {
    fn outer_join(self, right: Self, on: Option<Self::Expression>) -> Self;
}

/// A reference to a field, optionally qualified by its table.
pub trait FieldNameSyntax: Sized {
    fn qualified_field(table: String, name: String) -> Self;
    fn unqualified_field(name: String) -> Self;
}

// Expressions //

/// A scalar expression.
///
/// Binary and unary operations are methods on the receiver so that
/// predicates chain left to right at the call site.
pub trait ExpressionSyntax: Sized {
    type Select: SelectSyntax<Expression = Self>;
    type FieldName: FieldNameSyntax;
    type Value: ValueSyntax;

    /// An irreducible wrapped value.
    fn value(value: Self::Value) -> Self;
    /// A parenthesized list of expressions, as on the right of IN.
    fn value_list(values: Vec<Self>) -> Self;
    /// A field reference.
    fn field(field: Self::FieldName) -> Self;

    fn is_null(self) -> Self;
    fn is_not_null(self) -> Self;

    /// A searched CASE. Each pair is a WHEN condition and its result; the
    /// default is the ELSE branch.
    fn case_when(cases: Vec<(Self, Self)>, default: Self) -> Self;

    fn eq(self, other: Self) -> Self;
    fn neq(self, other: Self) -> Self;
    fn lt(self, other: Self) -> Self;
    fn lte(self, other: Self) -> Self;
    fn gt(self, other: Self) -> Self;
    fn gte(self, other: Self) -> Self;

    fn and(self, other: Self) -> Self;
    fn or(self, other: Self) -> Self;
    fn not(self) -> Self;

    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn mul(self, other: Self) -> Self;
    fn div(self, other: Self) -> Self;
    fn modulo(self, other: Self) -> Self;
    fn negate(self) -> Self;

    /// A call of the named scalar function.
    fn function_call(function: String, args: Vec<Self>) -> Self;

    /// An EXISTS test over a subquery.
    fn exists(select: Self::Select) -> Self;

    fn abs(self) -> Self {
        Self::function_call("ABS".to_string(), vec![self])
    }
}

// Associated type shorthands //

pub type CommandSelect<C> = <C as CommandSyntax>::Select;
pub type CommandInsert<C> = <C as CommandSyntax>::Insert;
pub type CommandUpdate<C> = <C as CommandSyntax>::Update;
pub type CommandDelete<C> = <C as CommandSyntax>::Delete;

pub type SelectExpression<S> = <S as SelectSyntax>::Expression;
pub type SelectProjection<S> = <S as SelectSyntax>::Projection;
pub type SelectFrom<S> = <S as SelectSyntax>::From;
pub type SelectGrouping<S> = <S as SelectSyntax>::Grouping;
pub type SelectOrdering<S> = <S as SelectSyntax>::Ordering;

pub type InsertValuesOf<I> = <I as InsertSyntax>::Values;
pub type InsertRowExpression<V> = <V as InsertValuesSyntax>::Expression;
pub type InsertSelect<V> = <V as InsertValuesSyntax>::Select;

pub type UpdateFieldName<U> = <U as UpdateSyntax>::FieldName;
pub type UpdateExpression<U> = <U as UpdateSyntax>::Expression;
pub type DeleteExpression<D> = <D as DeleteSyntax>::Expression;

pub type ExpressionSelect<E> = <E as ExpressionSyntax>::Select;
pub type ExpressionField<E> = <E as ExpressionSyntax>::FieldName;
pub type ExpressionValue<E> = <E as ExpressionSyntax>::Value;

pub type ProjectionExpression<P> = <P as ProjectionSyntax>::Expression;
pub type OrderingExpression<O> = <O as OrderingSyntax>::Expression;
pub type FromSource<F> = <F as FromSyntax>::TableSource;
pub type FromExpression<F> = <F as FromSyntax>::Expression;
