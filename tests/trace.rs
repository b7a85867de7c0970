use pretty_assertions::assert_eq;
use stepwise::{
    error::{ErrorKind, EvalError},
    evaluate,
    interpreter::{
        evaluator::Evaluator,
        lexer::{Span, Token, TokenKind, tokenize},
        operator::{
            core::{Arity, Operator, Precedence},
            registry::OperatorRegistry,
        },
        reducer::{core::Reducer, stack::ReductionStack},
        trace::Step,
    },
    report::Response,
};

fn step(left: Option<f64>, right: f64, result: f64, symbol: &str) -> Step {
    Step { left_operand:  left,
           right_operand: right,
           result,
           symbol:        symbol.to_string(), }
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

fn spans(tokens: &[Token]) -> Vec<(usize, usize)> {
    tokens.iter().map(|t| (t.span.start, t.span.end)).collect()
}

#[test]
fn multiplication_before_addition() {
    let evaluation = evaluate("2+3*4").unwrap();

    assert_eq!(evaluation.steps,
               vec![step(Some(3.0), 4.0, 12.0, "*"), step(Some(2.0), 12.0, 14.0, "+")]);
    assert_eq!(evaluation.value, 14.0);
}

#[test]
fn prefix_square_root_has_no_left_operand() {
    let evaluation = evaluate("9?").unwrap();
    assert_eq!(evaluation.steps, vec![step(None, 9.0, 3.0, "?")]);
    assert_eq!(evaluation.value, 3.0);

    let evaluation = evaluate("?9").unwrap();
    assert_eq!(evaluation.steps, vec![step(None, 9.0, 3.0, "?")]);
}

#[test]
fn sign_chain_folds_into_right_operand() {
    let evaluation = evaluate("3+-5").unwrap();

    assert_eq!(evaluation.steps, vec![step(Some(3.0), -5.0, -2.0, "+")]);
    assert_eq!(evaluation.value, -2.0);
}

#[test]
fn leading_sign_is_a_step() {
    let evaluation = evaluate("-5*2").unwrap();

    assert_eq!(evaluation.steps,
               vec![step(Some(5.0), 2.0, 10.0, "*"), step(None, 10.0, -10.0, "-")]);
}

#[test]
fn stages_record_every_pass() {
    let evaluation = evaluate("2+3*4").unwrap();
    let labels: Vec<_> = evaluation.stages.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["INIT", "HIGH", "MEDIUM", "LOW"]);

    let init = &evaluation.stages[0].tokens;
    assert_eq!(texts(init), ["2", "+", "3", "*", "4"]);
    assert_eq!(spans(init), [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);

    assert_eq!(evaluation.stages[1].tokens, *init);

    let medium = &evaluation.stages[2].tokens;
    assert_eq!(texts(medium), ["2", "+", "12"]);
    assert_eq!(spans(medium), [(0, 0), (1, 1), (2, 4)]);

    let low = &evaluation.stages[3].tokens;
    assert_eq!(texts(low), ["14"]);
    assert_eq!(spans(low), [(0, 4)]);
    assert_eq!(low[0].kind, TokenKind::Number);
}

#[test]
fn tokenizer_indexes_tokens_not_characters() {
    let registry = OperatorRegistry::new();
    let tokens = tokenize("123.5*-?42", &registry).unwrap();

    assert_eq!(texts(&tokens), ["123.5", "*", "-", "?", "42"]);
    assert_eq!(spans(&tokens), [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    assert_eq!(tokens[0].value, Some(123.5));
    assert_eq!(tokens[1].value, None);
    assert_eq!(tokens[1].kind, TokenKind::Operator);
}

#[test]
fn tokenizer_keeps_unknown_remainder_as_one_token() {
    let registry = OperatorRegistry::new();
    let tokens = tokenize("1+~&2", &registry).unwrap();

    assert_eq!(texts(&tokens), ["1", "+", "~&", "2"]);
}

#[test]
fn tokenizer_reads_multibyte_symbol_runs_whole() {
    let registry = OperatorRegistry::new();
    let tokens = tokenize("6×÷2-√4", &registry).unwrap();

    assert_eq!(texts(&tokens), ["6", "×÷", "2", "-", "√", "4"]);
    assert_eq!(spans(&tokens), [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
}

#[test]
fn malformed_number_reports_literal() {
    assert_eq!(evaluate("1..2+3").unwrap_err(),
               EvalError::MalformedNumber { text:  "1..2".to_string(),
                                            index: 0, });
}

#[test]
fn unknown_operator_reports_symbol_and_span() {
    assert_eq!(evaluate("3~4").unwrap_err(),
               EvalError::UnknownOperator { symbol: "~".to_string(),
                                            start:  1,
                                            end:    1, });
}

#[test]
fn illegal_operator_reports_symbol_and_span() {
    assert_eq!(evaluate("2**3").unwrap_err(),
               EvalError::IllegalOperator { symbol: "*".to_string(),
                                            start:  2,
                                            end:    2, });
}

#[test]
fn error_messages() {
    assert_eq!(evaluate("3~4").unwrap_err().to_string(), "Unknown operator '~' in [1-1].");
    assert_eq!(evaluate("").unwrap_err().to_string(), "Expression cannot be empty.");
    assert!(evaluate("1/0").unwrap_err()
                           .to_string()
                           .contains("divide by 0"));
}

#[test]
fn operator_table() {
    let registry = OperatorRegistry::new();

    for operator in Operator::ALL {
        assert_eq!(registry.resolve(operator.symbol()), Some(operator));
        assert!(registry.is_valid_symbol(operator.symbol()));
    }
    assert!(!registry.is_valid_symbol("~"));
    assert!(!registry.is_valid_symbol("**"));

    assert!(registry.is_self_compounding("+"));
    assert!(registry.is_self_compounding("-"));
    for symbol in ["*", "/", "%", "?", "~"] {
        assert!(!registry.is_self_compounding(symbol), "{symbol}");
    }

    assert_eq!(Operator::SquareRoot.arity(), Arity::Prefix);
    assert_eq!(Operator::Remainder.arity(), Arity::Infix);
    assert!(Precedence::High < Precedence::Medium && Precedence::Medium < Precedence::Low);
    assert_eq!(Operator::SquareRoot.precedence(), Precedence::High);
    assert_eq!(Operator::Divide.precedence(), Precedence::Medium);
    assert_eq!(Operator::Minus.precedence(), Precedence::Low);
}

#[test]
fn operators_do_not_reject_invalid_arithmetic() {
    assert!(Operator::Divide.apply(Some(1.0), 0.0).is_nan());
    assert!(Operator::Remainder.apply(Some(1.0), 0.0).is_nan());
    assert!(Operator::SquareRoot.apply(None, -1.0).is_nan());
    assert!(Operator::Multiply.apply(None, 2.0).is_nan());
    assert_eq!(Operator::Plus.apply(None, 2.0), 2.0);
    assert_eq!(Operator::Remainder.apply(Some(-7.0), 3.0), -1.0);
}

#[test]
fn shared_and_fresh_registries_agree() {
    let fresh = OperatorRegistry::new();
    for src in ["2+3*4", "?2", "-1%3", "1/3"] {
        assert_eq!(Evaluator::new(&fresh).evaluate(src).unwrap(), evaluate(src).unwrap());
    }
}

#[test]
fn reducer_skips_unrelated_classes() {
    let registry = OperatorRegistry::new();
    let tokens = tokenize("1+2", &registry).unwrap();

    let mut reducer = Reducer::new(&registry);
    let high = reducer.reduce(&tokens, Precedence::High).unwrap();
    assert_eq!(high, tokens);
    assert!(reducer.steps().is_empty());

    let low = reducer.reduce(&high, Precedence::Low).unwrap();
    assert_eq!(texts(&low), ["3"]);
    assert_eq!(reducer.into_steps(), vec![step(Some(1.0), 2.0, 3.0, "+")]);
}

#[test]
fn stack_ignores_covered_tokens() {
    let mut stack = ReductionStack::new();
    assert!(stack.pop().is_none());

    assert!(stack.push(Token::number("5", 5.0, Span { start: 0, end: 2 })));
    assert!(!stack.push(Token::number("2", 2.0, Span::at(2))));
    assert!(stack.push(Token::operator("+", Span::at(3))));
    assert_eq!(stack.covered_through(), Some(3));

    assert!(!stack.push(Token::number("1", 1.0, Span { start: 1, end: 4 })));
    assert!(stack.push(Token::number("1", 1.0, Span::at(4))));

    let tokens = stack.into_tokens();
    assert_eq!(texts(&tokens), ["5", "+", "1"]);
}

#[test]
fn spans_join_and_overlap() {
    let joined = Span::at(4).join(Span { start: 1, end: 2 });
    assert_eq!(joined, Span { start: 1, end: 4 });
    assert!(joined.overlaps(Span::at(4)));
    assert!(!joined.overlaps(Span::at(5)));
    assert_eq!(joined.to_string(), "[1-4]");
}

#[test]
fn step_rendering() {
    assert_eq!(step(Some(3.0), 4.0, 12.0, "*").to_string(), "3 * 4 = 12");
    assert_eq!(step(None, 9.0, 3.0, "?").to_string(), "? 9 = 3");
}

#[test]
fn response_envelope() {
    let failure = Response::from(evaluate("3~4"));
    assert!(!failure.is_success());
    let json: serde_json::Value = serde_json::from_str(&failure.to_json().unwrap()).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["kind"], "unknown-operator");
    assert_eq!(json["message"], "Unknown operator '~' in [1-1].");

    let success = Response::from(evaluate("9?"));
    assert!(success.is_success());
    let json: serde_json::Value = serde_json::from_str(&success.to_json().unwrap()).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["value"], 3.0);
    assert_eq!(json["steps"][0]["leftOperand"], serde_json::Value::Null);
    assert_eq!(json["steps"][0]["rightOperand"], 9.0);
    assert_eq!(json["steps"][0]["symbol"], "?");
    assert_eq!(json["stages"][0]["label"], "INIT");
    assert_eq!(json["stages"][0]["tokens"][1]["kind"], "operator");
    assert_eq!(json["stages"][0]["tokens"][1]["start"], 1);
}

#[test]
fn error_kinds_are_distinct() {
    let kinds = ["1..2", "3~4", "2**3", "3+", "1/0", ""].map(|src| evaluate(src).unwrap_err().kind());
    assert_eq!(kinds,
               [ErrorKind::MalformedNumber,
                ErrorKind::UnknownOperator,
                ErrorKind::IllegalOperator,
                ErrorKind::NonCompliantExpression,
                ErrorKind::IllegalArithmetic,
                ErrorKind::EmptyExpression]);
}
