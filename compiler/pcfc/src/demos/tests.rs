use pretty_assertions::assert_eq;

use super::*;

#[test]
fn every_demo_builds() {
    for demo in DEMOS {
        assert!(demo.term().is_ok(), "demo {} failed to build", demo.name);
        assert!(demo.signature().is_ok(), "demo {} has no signature", demo.name);
    }
}

#[test]
fn demo_names_are_unique() {
    let mut names: Vec<_> = DEMOS.iter().map(|demo| demo.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), DEMOS.len());
}

#[test]
fn find_known_and_unknown() {
    assert!(matches!(find("factorial"), Ok(demo) if demo.name == "factorial"));
    assert!(matches!(
        find("nope"),
        Err(CliError::UnknownDemo { name }) if name == "nope"
    ));
}

#[test]
fn curried_add_renders_as_written() {
    let term = find("curried-add").and_then(Demo::term);
    assert_eq!(
        term.map(|term| term.to_string()),
        Ok("(fun x -> fun y -> x + y) 3 4".to_string())
    );
}

#[test]
fn let_square_renders_as_written() {
    let term = find("let-square").and_then(Demo::term);
    assert_eq!(
        term.map(|term| term.to_string()),
        Ok("(fun x -> let f = fun y -> y * y in (x + 1) * f 4) 2".to_string())
    );
}

#[test]
fn lazy_argument_is_free() {
    let Ok(Term::Application { right, .. }) = find("lazy-argument").and_then(Demo::term) else {
        panic!("lazy-argument is not an application");
    };
    assert!(matches!(&*right, Term::Variable(name) if name.as_str() == "undefined"));
}

#[test]
fn signatures_render() {
    let rendered: Vec<_> = DEMOS
        .iter()
        .map(|demo| demo.signature().map(|ty| ty.to_string()))
        .collect();
    assert_eq!(rendered[0], Ok("Nat -> Nat -> Nat".to_string()));
    assert_eq!(rendered[3], Ok("(Nat -> Nat) -> Nat".to_string()));
}
