use super::*;
use pretty_assertions::assert_eq;

fn name(text: &str) -> Name {
    match Name::new(text) {
        Ok(name) => name,
        Err(err) => panic!("invalid test name {text:?}: {err}"),
    }
}

#[test]
fn ident_without_sigil_is_variable() {
    assert_eq!(Term::ident("x"), Ok(Term::Variable(name("x"))));
}

#[test]
fn ident_with_sigil_is_bound_variable() {
    assert_eq!(Term::ident("$x"), Ok(Term::bound(name("x"))));
}

#[test]
fn ident_rejects_empty_text() {
    assert_eq!(Term::ident(""), Err(NamingError::Empty));
    assert_eq!(Term::try_from(""), Err(NamingError::Empty));
}

#[test]
fn integers_convert_to_numbers() {
    assert_eq!(Term::from(7), Term::Number(7));
    assert_eq!(Term::from(-3).as_number(), Some(-3));
}

#[test]
fn structural_equality_is_recursive() {
    let a = Term::function(name("x"), Term::add(Term::variable(name("x")), Term::number(1)));
    let b = Term::function(name("x"), Term::add(Term::variable(name("x")), Term::number(1)));
    let c = Term::function(name("x"), Term::add(Term::variable(name("x")), Term::number(2)));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn variable_and_bound_variable_differ_structurally() {
    assert_ne!(Term::variable(name("x")), Term::bound(name("x")));
}

#[test]
fn operators_are_distinct_variants() {
    let add = Term::add(Term::number(1), Term::number(2));
    let sub = Term::subtract(Term::number(1), Term::number(2));
    assert_ne!(add, sub);
    assert_eq!(
        Term::multiply(Term::number(1), Term::number(2)),
        Term::binary(BinaryOp::Multiply, Term::number(1), Term::number(2))
    );
}

#[test]
fn shared_subterms_are_not_copied() {
    let shared = Arc::new(Term::add(Term::number(1), Term::number(2)));
    let term = Term::application(Arc::clone(&shared), Arc::clone(&shared));
    match &term {
        Term::Application { left, right } => {
            assert!(Arc::ptr_eq(left, &shared));
            assert!(Arc::ptr_eq(right, &shared));
        }
        other => panic!("expected application, got {other:?}"),
    }
}

#[test]
fn reference_covers_both_variable_kinds() {
    assert_eq!(Term::variable(name("f")).reference(), Some(&name("f")));
    assert_eq!(Term::bound(name("g")).reference(), Some(&name("g")));
    assert_eq!(Term::number(1).reference(), None);
}

#[test]
fn kinds_name_each_variant() {
    let x = name("x");
    assert_eq!(Term::fix(x.clone(), Term::number(0)).kind(), "fix");
    assert_eq!(
        Term::let_in(x.clone(), Term::number(0), Term::number(0)).kind(),
        "let"
    );
    assert_eq!(
        Term::if_zero(Term::number(0), Term::number(1), Term::number(2)).kind(),
        "ifz"
    );
    assert_eq!(Term::function(x, Term::number(0)).kind(), "function");
}

#[test]
fn operator_symbols() {
    let symbols: Vec<&str> = BinaryOp::ALL.iter().map(|op| op.as_symbol()).collect();
    assert_eq!(symbols, vec!["+", "-", "*", "/"]);
    assert!(BinaryOp::Multiply.precedence() > BinaryOp::Add.precedence());
}
