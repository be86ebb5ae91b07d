//! `evaluate` mode end-to-end tests (spec §8 scenarios 1-2).

mod common;

use common::run_evaluate;

#[test]
fn test_evaluate_arithmetic_precedence() {
    let result = run_evaluate("(1 + 2) * 3");
    assert_eq!(result.stdout, "9\n");
    assert_eq!(result.exit_code, 0);
}

#[test]
fn test_evaluate_string_concatenation() {
    let result = run_evaluate(r#""ab" + "cd""#);
    assert_eq!(result.stdout, "abcd\n");
    assert_eq!(result.exit_code, 0);
}

#[test]
fn test_evaluate_integral_number_prints_minimal_form() {
    let result = run_evaluate("3.0");
    assert_eq!(result.stdout, "3\n");
}

#[test]
fn test_evaluate_runtime_error_exits_70() {
    let result = run_evaluate(r#"-"a""#);
    assert_eq!(result.exit_code, 70);
    assert_eq!(result.stderr, "Operand must be a number.\n[line 1]\n");
}

#[test]
fn test_evaluate_ternary() {
    let result = run_evaluate("1 < 2 ? \"yes\" : \"no\"");
    assert_eq!(result.stdout, "yes\n");
}

#[test]
fn test_evaluate_comma_operator_returns_right() {
    let result = run_evaluate("1, 2, 3");
    assert_eq!(result.stdout, "3\n");
}
