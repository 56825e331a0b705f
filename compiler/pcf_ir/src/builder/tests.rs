use super::*;
use crate::Name;
use pretty_assertions::assert_eq;

fn bv(text: &str) -> BoundVariable {
    match BoundVariable::new(text) {
        Ok(variable) => variable,
        Err(err) => panic!("invalid test identifier {text:?}: {err}"),
    }
}

fn var(text: &str) -> Term {
    match Name::new(text) {
        Ok(name) => Term::variable(name),
        Err(err) => panic!("invalid test identifier {text:?}: {err}"),
    }
}

#[test]
fn fun_builder_to_finishes() {
    let term = FunBuilder::new(bv("x")).to(var("x"));
    assert_eq!(term, Term::function(bv("x"), var("x")));
}

#[test]
fn fun_builder_without_body_fails() {
    assert_eq!(
        FunBuilder::new(bv("x")).build(),
        Err(ConstructionError::Missing {
            construct: "fun",
            part: "a body",
        })
    );
}

#[test]
fn fun_builder_with_body_builds() {
    let built = FunBuilder::new(bv("y")).with_body(Term::number(1)).build();
    assert_eq!(built, Ok(Term::function(bv("y"), Term::number(1))));
}

#[test]
fn ifz_builder_complete() {
    let built = IfzBuilder::new(var("n"))
        .then(Term::number(1))
        .otherwise(Term::number(2));
    assert_eq!(
        built,
        Ok(Term::if_zero(var("n"), Term::number(1), Term::number(2)))
    );
}

#[test]
fn ifz_builder_missing_then() {
    let built = IfzBuilder::new(var("n")).otherwise(Term::number(2));
    assert_eq!(
        built,
        Err(ConstructionError::Missing {
            construct: "ifz",
            part: "a then clause",
        })
    );
}

#[test]
fn ifz_builder_missing_else() {
    let built = IfzBuilder::new(var("n")).then(Term::number(1)).build();
    assert_eq!(
        built,
        Err(ConstructionError::Missing {
            construct: "ifz",
            part: "an else clause",
        })
    );
}

#[test]
fn fix_builder() {
    assert_eq!(
        FixBuilder::new(bv("f")).in_(var("f")),
        Term::fix(bv("f"), var("f"))
    );
    assert!(FixBuilder::new(bv("f")).build().is_err());
    assert_eq!(
        FixBuilder::new(bv("f")).with_body(Term::number(0)).build(),
        Ok(Term::fix(bv("f"), Term::number(0)))
    );
}

#[test]
fn let_builder_complete() {
    let built = LetBuilder::new(bv("x")).be(Term::number(5)).in_(var("x"));
    assert_eq!(
        built,
        Ok(Term::let_in(bv("x"), Term::number(5), var("x")))
    );
}

#[test]
fn let_builder_missing_value() {
    let built = LetBuilder::new(bv("x")).in_(var("x"));
    assert_eq!(
        built,
        Err(ConstructionError::Missing {
            construct: "let",
            part: "a value",
        })
    );
}

#[test]
fn let_builder_missing_body() {
    let built = LetBuilder::new(bv("x")).be(Term::number(5)).build();
    assert_eq!(
        built,
        Err(ConstructionError::Missing {
            construct: "let",
            part: "an in clause",
        })
    );
}

#[test]
fn terms_are_their_own_builders() {
    let term = Term::number(3);
    assert_eq!(term.build(), Ok(Term::number(3)));
}

#[test]
fn construction_error_message() {
    let err = ConstructionError::Missing {
        construct: "ifz",
        part: "an else clause",
    };
    assert_eq!(err.to_string(), "cannot build `ifz` without an else clause");
}
