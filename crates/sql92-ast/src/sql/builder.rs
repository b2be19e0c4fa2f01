//! Implementations of the construction interfaces for the tree encoding.
//! Every operation allocates the corresponding node and nothing else.

use sql92_syntax::grammar::*;

use super::ast::*;
use super::value::Value;

// Statements //

impl CommandSyntax for Command {
    type Select = Select;
    type Insert = Insert;
    type Update = Update;
    type Delete = Delete;

    fn select_command(select: Select) -> Self {
        Command::Select(select)
    }

    fn insert_command(insert: Insert) -> Self {
        Command::Insert(insert)
    }

    fn update_command(update: Update) -> Self {
        Command::Update(update)
    }

    fn delete_command(delete: Delete) -> Self {
        Command::Delete(delete)
    }
}

impl SelectSyntax for Select {
    type Expression = Expression;
    type Projection = Projection;
    type From = From;
    type Grouping = Grouping;
    type Ordering = Ordering;

    fn select_stmt(
        projection: Projection,
        from: Option<From>,
        where_: Expression,
        group_by: Option<Grouping>,
        order_by: Vec<Ordering>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Self {
        Select {
            projection,
            from,
            where_,
            group_by,
            order_by,
            limit,
            offset,
        }
    }
}

impl InsertSyntax for Insert {
    type Values = InsertValues;

    fn insert_stmt(table: String, fields: Vec<String>, values: InsertValues) -> Self {
        Insert {
            table: TableName(table),
            fields: fields.into_iter().map(ColumnName).collect(),
            values,
        }
    }
}

impl InsertValuesSyntax for InsertValues {
    type Expression = Expression;
    type Select = Select;

    fn values(rows: Vec<Vec<Expression>>) -> Self {
        InsertValues::Values(rows)
    }

    fn from_select(select: Select) -> Self {
        InsertValues::Select(Box::new(select))
    }
}

impl UpdateSyntax for Update {
    type FieldName = FieldName;
    type Expression = Expression;

    fn update_stmt(
        table: String,
        set: Vec<(FieldName, Expression)>,
        where_: Expression,
    ) -> Self {
        Update {
            table: TableName(table),
            set,
            where_,
        }
    }
}

impl DeleteSyntax for Delete {
    type Expression = Expression;

    fn delete_stmt(table: String, where_: Expression) -> Self {
        Delete {
            table: TableName(table),
            where_,
        }
    }
}

// Clauses //

impl ProjectionSyntax for Projection {
    type Expression = Expression;

    fn project(elements: Vec<(Expression, Option<String>)>) -> Self {
        Projection { elements }
    }
}

impl OrderingSyntax for Ordering {
    type Expression = Expression;

    fn asc(target: Expression) -> Self {
        Ordering {
            target,
            direction: OrderingDirection::Asc,
        }
    }

    fn desc(target: Expression) -> Self {
        Ordering {
            target,
            direction: OrderingDirection::Desc,
        }
    }
}

impl TableSourceSyntax for TableSource {
    fn table_named(name: String) -> Self {
        TableSource::Named(TableName(name))
    }
}

impl FromSyntax for From {
    type TableSource = TableSource;
    type Expression = Expression;

    fn from_table(source: TableSource, alias: Option<String>) -> Self {
        From::Table { source, alias }
    }

    fn inner_join(self, right: Self, on: Option<Expression>) -> Self {
        join(JoinKind::Inner, self, right, on)
    }

    fn left_join(self, right: Self, on: Option<Expression>) -> Self {
        join(JoinKind::Left, self, right, on)
    }

    fn right_join(self, right: Self, on: Option<Expression>) -> Self {
        join(JoinKind::Right, self, right, on)
    }
}

impl FromOuterJoinSyntax for From {
    fn outer_join(self, right: Self, on: Option<Expression>) -> Self {
        join(JoinKind::Outer, self, right, on)
    }
}

impl FieldNameSyntax for FieldName {
    fn qualified_field(table: String, name: String) -> Self {
        FieldName::Qualified {
            table: TableName(table),
            name: ColumnName(name),
        }
    }

    fn unqualified_field(name: String) -> Self {
        FieldName::Unqualified(ColumnName(name))
    }
}

// Expressions //

impl ExpressionSyntax for Expression {
    type Select = Select;
    type FieldName = FieldName;
    type Value = Value;

    fn value(value: Value) -> Self {
        Expression::Value(value)
    }

    fn value_list(values: Vec<Expression>) -> Self {
        Expression::ValueList(values)
    }

    fn field(field: FieldName) -> Self {
        Expression::FieldName(field)
    }

    fn is_null(self) -> Self {
        Expression::IsNull(Box::new(self))
    }

    fn is_not_null(self) -> Self {
        Expression::IsNotNull(Box::new(self))
    }

    fn case_when(cases: Vec<(Expression, Expression)>, default: Expression) -> Self {
        Expression::Case {
            cases,
            default: Box::new(default),
        }
    }

    fn eq(self, other: Self) -> Self {
        binary(self, "==", other)
    }

    fn neq(self, other: Self) -> Self {
        binary(self, "<>", other)
    }

    fn lt(self, other: Self) -> Self {
        binary(self, "<", other)
    }

    fn lte(self, other: Self) -> Self {
        binary(self, "<=", other)
    }

    fn gt(self, other: Self) -> Self {
        binary(self, ">", other)
    }

    fn gte(self, other: Self) -> Self {
        binary(self, ">=", other)
    }

    fn and(self, other: Self) -> Self {
        binary(self, "AND", other)
    }

    fn or(self, other: Self) -> Self {
        binary(self, "OR", other)
    }

    fn not(self) -> Self {
        unary("NOT", self)
    }

    fn add(self, other: Self) -> Self {
        binary(self, "+", other)
    }

    fn sub(self, other: Self) -> Self {
        binary(self, "-", other)
    }

    fn mul(self, other: Self) -> Self {
        binary(self, "*", other)
    }

    fn div(self, other: Self) -> Self {
        binary(self, "/", other)
    }

    fn modulo(self, other: Self) -> Self {
        binary(self, "%", other)
    }

    fn negate(self) -> Self {
        unary("-", self)
    }

    fn function_call(function: String, args: Vec<Expression>) -> Self {
        Expression::FunctionCall {
            function: Function(function),
            args,
        }
    }

    fn exists(select: Select) -> Self {
        Expression::Exists {
            select: Box::new(select),
        }
    }
}

fn binary(left: Expression, operator: &str, right: Expression) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(left),
        operator: BinaryOperator(operator.to_string()),
        right: Box::new(right),
    }
}

fn unary(operator: &str, expression: Expression) -> Expression {
    Expression::UnaryOperation {
        expression: Box::new(expression),
        operator: UnaryOperator(operator.to_string()),
    }
}

fn join(kind: JoinKind, left: From, right: From, on: Option<Expression>) -> From {
    From::Join {
        kind,
        left: Box::new(left),
        right: Box::new(right),
        on,
    }
}
