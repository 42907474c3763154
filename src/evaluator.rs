//! Tree-walking evaluator: `Node + Environment -> Object`, with errors as
//! ordinary return values that short-circuit evaluation.

use std::rc::Rc;

use crate::ast::*;
use crate::environment::Environment;
use crate::object::{new_error, FunctionObject, Object};

pub fn eval_program(program: &Program, env: &Environment) -> Object {
    let mut result = Object::Null;
    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Object::ReturnValue(inner) => return *inner,
            Object::Error(_) => return result,
            _ => {}
        }
    }
    result
}

/// Like `eval_program` but leaves `ReturnValue` wrapped, so a `return`
/// inside a nested block still escapes the enclosing function body.
fn eval_block_statement(block: &BlockStatement, env: &Environment) -> Object {
    let mut result = Object::Null;
    for statement in &block.statements {
        result = eval_statement(statement, env);
        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_statement(statement: &Statement, env: &Environment) -> Object {
    match statement {
        Statement::Expression(stmt) => eval_expression(&stmt.expression, env),
        Statement::Return(stmt) => {
            let value = eval_expression(&stmt.return_value, env);
            if value.is_error() {
                value
            } else {
                Object::ReturnValue(Box::new(value))
            }
        }
        Statement::Var(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.set(&stmt.name.value, value);
            Object::Null
        }
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

fn eval_expression(expression: &Expression, env: &Environment) -> Object {
    match expression {
        Expression::IntegerLiteral(lit) => Object::Integer(lit.value),
        Expression::Boolean(b) => Object::Boolean(b.value),
        Expression::Identifier(id) => eval_identifier(&id.value, env),
        Expression::Prefix(expr) => {
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(&expr.operator, right)
        }
        Expression::Infix(expr) => {
            let left = eval_expression(&expr.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(&expr.operator, left, right)
        }
        Expression::If(expr) => eval_if_expression(expr, env),
        Expression::Function(func) => Object::Function(Rc::new(FunctionObject {
            parameters: func.parameters.clone(),
            body: func.body.clone(),
            env: env.clone(),
        })),
        Expression::Call(call) => eval_call_expression(call, env),
        Expression::Invalid => Object::Null,
    }
}

fn eval_identifier(name: &str, env: &Environment) -> Object {
    match env.get(name) {
        Some(value) => value,
        None => new_error("identifikuesi nuk gjindet", &[name]),
    }
}

fn eval_prefix_expression(operator: &str, right: Object) -> Object {
    match operator {
        "!" => Object::Boolean(!right.is_truthy()),
        "-" => match right {
            Object::Integer(value) => Object::Integer(value.wrapping_neg()),
            other => new_error("operator i panjohur", &["-", other.type_tag()]),
        },
        other => new_error("operator i panjohur", &[other, right.type_tag()]),
    }
}

fn eval_infix_expression(operator: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::Boolean(l), Object::Boolean(r)) => match operator {
            "==" => Object::Boolean(l == r),
            "!=" => Object::Boolean(l != r),
            other => new_error(
                "operator i panjohur",
                &[left.type_tag(), other, right.type_tag()],
            ),
        },
        _ if left.type_tag() != right.type_tag() => new_error(
            "mospërputhje i tipit",
            &[left.type_tag(), operator, right.type_tag()],
        ),
        _ => new_error(
            "operator i panjohur",
            &[left.type_tag(), operator, right.type_tag()],
        ),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Object {
    match operator {
        "+" => Object::Integer(left.wrapping_add(right)),
        "-" => Object::Integer(left.wrapping_sub(right)),
        "*" => Object::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                Object::Integer(0)
            } else {
                Object::Integer(left.wrapping_div(right))
            }
        }
        "<" => Object::Boolean(left < right),
        ">" => Object::Boolean(left > right),
        "<=" => Object::Boolean(left <= right),
        ">=" => Object::Boolean(left >= right),
        "==" => Object::Boolean(left == right),
        "!=" => Object::Boolean(left != right),
        other => new_error("operator i panjohur", &["INTEGJER", other, "INTEGJER"]),
    }
}

fn eval_if_expression(expr: &IfExpression, env: &Environment) -> Object {
    let condition = eval_expression(&expr.condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block_statement(&expr.consequence, env)
    } else if let Some(alternative) = &expr.alternative {
        eval_block_statement(alternative, env)
    } else {
        Object::Null
    }
}

fn eval_call_expression(call: &CallExpression, env: &Environment) -> Object {
    let function = eval_expression(&call.function, env);
    if function.is_error() {
        return function;
    }

    let mut arguments = Vec::with_capacity(call.arguments.len());
    for arg_expr in &call.arguments {
        let value = eval_expression(arg_expr, env);
        if value.is_error() {
            return value;
        }
        arguments.push(value);
    }

    apply_function(&function, &arguments)
}

fn apply_function(function: &Object, arguments: &[Object]) -> Object {
    let Object::Function(func) = function else {
        return new_error("not a function", &[function.type_tag()]);
    };

    if func.parameters.len() != arguments.len() {
        let expected = func.parameters.len().to_string();
        let got = arguments.len().to_string();
        return new_error("numër i gabuar argumentesh", &[expected.as_str(), got.as_str()]);
    }

    let call_env = Environment::new_enclosed(&func.env);
    for (param, value) in func.parameters.iter().zip(arguments) {
        call_env.set(&param.value, value.clone());
    }

    let evaluated = eval_block_statement(&func.body, &call_env);
    match evaluated {
        Object::ReturnValue(inner) => *inner,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn eval(input: &str) -> Object {
        let mut parser = Parser::from_source(input);
        let program = parser.parse_program();
        assert!(parser.errors.is_empty(), "parse errors: {:?}", parser.errors);
        let env = Environment::new();
        eval_program(&program, &env)
    }

    #[test]
    fn integer_arithmetic() {
        let cases = [
            ("5", 5),
            ("10", 10),
            ("-5", -5),
            ("5 + 5 + 5 + 5 - 10", 10),
            ("2 * 2 * 2 * 2 * 2", 32),
            ("5 * 2 + 10", 20),
            ("5 + 2 * 10", 25),
            ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ];
        for (input, expected) in cases {
            assert!(matches!(eval(input), Object::Integer(v) if v == expected), "input: {input}");
        }
    }

    #[test]
    fn boolean_expressions() {
        let cases = [
            ("vertet", true),
            ("falso", false),
            ("1 < 2", true),
            ("1 > 2", false),
            ("1 <= 1", true),
            ("1 >= 2", false),
            ("1 == 1", true),
            ("1 != 1", false),
            ("vertet == vertet", true),
            ("vertet != falso", true),
            ("(1 < 2) == vertet", true),
        ];
        for (input, expected) in cases {
            assert!(matches!(eval(input), Object::Boolean(v) if v == expected), "input: {input}");
        }
    }

    #[test]
    fn bang_operator() {
        let cases = [("!vertet", false), ("!falso", true), ("!5", false), ("!!vertet", true)];
        for (input, expected) in cases {
            assert!(matches!(eval(input), Object::Boolean(v) if v == expected), "input: {input}");
        }
    }

    #[test]
    fn if_else_expressions() {
        assert!(matches!(eval("nese (vertet) { 10 }"), Object::Integer(10)));
        assert!(matches!(eval("nese (falso) { 10 }"), Object::Null));
        assert!(matches!(eval("nese (1) { 10 }"), Object::Integer(10)));
        assert!(matches!(eval("nese (1 < 2) { 10 } perndryshe { 20 }"), Object::Integer(10)));
        assert!(matches!(eval("nese (1 > 2) { 10 } perndryshe { 20 }"), Object::Integer(20)));
    }

    #[test]
    fn return_statements_escape_nested_blocks() {
        let input = "
            nese (10 > 1) {
                nese (10 > 1) {
                    kthen 10;
                }
                kthen 1;
            }
        ";
        assert!(matches!(eval(input), Object::Integer(10)));
    }

    #[test]
    fn error_handling() {
        let cases = [
            ("5 + vertet;", "mospërputhje i tipit: INTEGJER + BOOLEAN"),
            ("5 + vertet; 5;", "mospërputhje i tipit: INTEGJER + BOOLEAN"),
            ("-vertet", "operator i panjohur: - BOOLEAN"),
            ("vertet + falso;", "operator i panjohur: BOOLEAN + BOOLEAN"),
            (
                "nese (10 > 1) { vertet + falso; }",
                "operator i panjohur: BOOLEAN + BOOLEAN",
            ),
            ("foobar;", "identifikuesi nuk gjindet: foobar"),
        ];
        for (input, expected_message) in cases {
            match eval(input) {
                Object::Error(message) => assert_eq!(message, expected_message, "input: {input}"),
                other => panic!("expected error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn var_statements() {
        let cases = [
            ("var a = 5; a;", 5),
            ("var a = 5 * 5; a;", 25),
            ("var a = 5; var b = a; b;", 5),
            ("var a = 5; var b = a; var c = a + b + 5; c;", 15),
        ];
        for (input, expected) in cases {
            assert!(matches!(eval(input), Object::Integer(v) if v == expected), "input: {input}");
        }
    }

    #[test]
    fn var_statement_overwrites_existing_binding() {
        assert!(matches!(eval("var a = 5; var a = 10; a;"), Object::Integer(10)));
    }

    #[test]
    fn function_literal_captures_environment() {
        let evaluated = eval("funksion(x) { x + 2; };");
        assert!(matches!(evaluated, Object::Function(_)));
    }

    #[test]
    fn function_application() {
        let cases = [
            ("var identitet = funksion(x) { x; }; identitet(5);", 5),
            ("var identitet = funksion(x) { kthen x; }; identitet(5);", 5),
            ("var dyfish = funksion(x) { x * 2; }; dyfish(5);", 10),
            ("var mbledh = funksion(x, y) { x + y; }; mbledh(5, 5);", 10),
            ("var mbledh = funksion(x, y) { x + y; }; mbledh(5 + 5, mbledh(5, 5));", 20),
            ("funksion(x) { x; }(5)", 5),
        ];
        for (input, expected) in cases {
            assert!(matches!(eval(input), Object::Integer(v) if v == expected), "input: {input}");
        }
    }

    #[test]
    fn closures() {
        let input = "
            var krijoShtues = funksion(x) {
                funksion(y) { x + y; };
            };
            var shtoDy = krijoShtues(2);
            shtoDy(3);
        ";
        assert!(matches!(eval(input), Object::Integer(5)));
    }

    #[test]
    fn division_by_zero_does_not_crash() {
        assert!(matches!(eval("5 / 0"), Object::Integer(0)));
    }

    #[test]
    fn negating_i64_min_wraps_instead_of_panicking() {
        let input = "-(9223372036854775807 + 1)";
        assert!(matches!(eval(input), Object::Integer(i64::MIN)));
    }

    #[test]
    fn calling_a_non_function_yields_error() {
        match eval("var x = 5; x(1);") {
            Object::Error(message) => assert_eq!(message, "not a function: INTEGJER"),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn arity_mismatch_yields_error() {
        match eval("var f = funksion(x, y) { x + y; }; f(1);") {
            Object::Error(_) => {}
            other => panic!("expected error, got {other:?}"),
        }
    }
}
