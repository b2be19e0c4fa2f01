//! Building scalar expressions and checking their shapes and operator tags.

use sql92_ast::sql::ast::*;
use sql92_ast::sql::helpers::*;
use sql92_ast::sql::value::Value;
use sql92_syntax::grammar::*;
use sql92_syntax::value::ValueSyntax;

#[test]
fn comparison_operators_carry_their_symbols() {
    let built = vec![
        (column("a").eq(column("b")), "=="),
        (column("a").neq(column("b")), "<>"),
        (column("a").lt(column("b")), "<"),
        (column("a").lte(column("b")), "<="),
        (column("a").gt(column("b")), ">"),
        (column("a").gte(column("b")), ">="),
    ];

    for (expression, symbol) in built {
        match expression {
            Expression::BinaryOperation { operator, .. } => {
                assert_eq!(operator, BinaryOperator(symbol.to_string()));
            }
            other => panic!("expected a binary operation, got {other:?}"),
        }
    }
}

#[test]
fn arithmetic_operators_carry_their_symbols() {
    let built = vec![
        (column("a").add(column("b")), "+"),
        (column("a").sub(column("b")), "-"),
        (column("a").mul(column("b")), "*"),
        (column("a").div(column("b")), "/"),
        (column("a").modulo(column("b")), "%"),
    ];

    for (expression, symbol) in built {
        match expression {
            Expression::BinaryOperation { operator, .. } => {
                assert_eq!(operator, BinaryOperator(symbol.to_string()));
            }
            other => panic!("expected a binary operation, got {other:?}"),
        }
    }
}

#[test]
fn logical_operators_nest_left_to_right() {
    let expression = column("age")
        .gte(value_expr(18_i64))
        .and(column("active").eq(value_expr(true)));

    match expression {
        Expression::BinaryOperation {
            left, operator, ..
        } => {
            assert_eq!(operator, BinaryOperator("AND".to_string()));
            match *left {
                Expression::BinaryOperation { operator, .. } => {
                    assert_eq!(operator, BinaryOperator(">=".to_string()));
                }
                other => panic!("expected a comparison on the left, got {other:?}"),
            }
        }
        other => panic!("expected a conjunction, got {other:?}"),
    }
}

#[test]
fn disjunctions_carry_the_or_tag() {
    let expression = column("a").or(column("b"));

    match expression {
        Expression::BinaryOperation { operator, .. } => {
            assert_eq!(operator, BinaryOperator("OR".to_string()));
        }
        other => panic!("expected a disjunction, got {other:?}"),
    }
}

#[test]
fn unary_operators_wrap_their_operand() {
    assert_eq!(
        column("flag").not(),
        Expression::UnaryOperation {
            expression: Box::new(column("flag")),
            operator: UnaryOperator("NOT".to_string()),
        }
    );
    assert_eq!(
        column("delta").negate(),
        Expression::UnaryOperation {
            expression: Box::new(column("delta")),
            operator: UnaryOperator("-".to_string()),
        }
    );
}

#[test]
fn null_tests_produce_dedicated_nodes() {
    assert_eq!(
        column("email").is_null(),
        Expression::IsNull(Box::new(column("email")))
    );
    assert_eq!(
        column("email").is_not_null(),
        Expression::IsNotNull(Box::new(column("email")))
    );
}

#[test]
fn abs_lowers_to_a_function_call() {
    assert_eq!(
        column("delta").abs(),
        Expression::FunctionCall {
            function: Function("ABS".to_string()),
            args: vec![column("delta")],
        }
    );
}

#[test]
fn function_calls_keep_their_arguments_in_order() {
    let call = Expression::function_call(
        "COALESCE".to_string(),
        vec![column("nickname"), column("name"), value_expr("anonymous")],
    );

    assert_eq!(
        call,
        Expression::FunctionCall {
            function: Function("COALESCE".to_string()),
            args: vec![column("nickname"), column("name"), value_expr("anonymous")],
        }
    );
}

#[test]
fn value_lists_keep_their_elements_in_order() {
    let list = Expression::value_list(vec![
        value_expr(1_i64),
        value_expr(2_i64),
        value_expr(3_i64),
    ]);

    assert_eq!(
        list,
        Expression::ValueList(vec![
            Expression::Value(Value::wrap(1_i64)),
            Expression::Value(Value::wrap(2_i64)),
            Expression::Value(Value::wrap(3_i64)),
        ])
    );
}

#[test]
fn a_case_nested_as_a_default_is_not_flattened() {
    let inner = Expression::case_when(
        vec![(column("age").lt(value_expr(13_i64)), value_expr("child"))],
        value_expr("teenager"),
    );
    let outer = Expression::case_when(
        vec![(column("age").gte(value_expr(18_i64)), value_expr("adult"))],
        inner.clone(),
    );

    match outer {
        Expression::Case { cases, default } => {
            assert_eq!(cases.len(), 1);
            assert_eq!(*default, inner);
        }
        other => panic!("expected a case expression, got {other:?}"),
    }
}

#[test]
fn exists_embeds_a_whole_select() {
    let subquery = select_from(
        Projection::project(vec![(column("user_id"), None)]),
        from_named_table("orders"),
    );

    assert_eq!(
        Expression::exists(subquery.clone()),
        Expression::Exists {
            select: Box::new(subquery),
        }
    );
}

#[test]
fn qualified_and_unqualified_fields_are_distinct() {
    assert_ne!(table_column("users", "id"), column("id"));
    assert_eq!(
        table_column("users", "id"),
        Expression::FieldName(FieldName::Qualified {
            table: TableName("users".to_string()),
            name: ColumnName("id".to_string()),
        })
    );
}
