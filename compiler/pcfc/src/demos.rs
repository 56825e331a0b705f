//! Built-in demo programs.
//!
//! Each demo is built with the term constructors and staged builders, since
//! PCF has no surface syntax here. Identifiers written with the `$` sigil
//! are bound variables; anything else is a free reference.

use pcf_ir::{
    BoundVariable, FixBuilder, FunBuilder, IfzBuilder, LetBuilder, PcfType, Term,
};

use crate::CliError;

type Build<T> = fn() -> Result<T, CliError>;

/// A named demo program.
pub struct Demo {
    pub name: &'static str,
    pub description: &'static str,
    build: Build<Term>,
    signature: Build<PcfType>,
}

impl Demo {
    /// Construct the demo's term.
    pub fn term(&self) -> Result<Term, CliError> {
        (self.build)()
    }

    /// Intended type of the demo's function, before it is applied.
    pub fn signature(&self) -> Result<PcfType, CliError> {
        (self.signature)()
    }
}

/// Every demo, in listing order.
pub const DEMOS: &[Demo] = &[
    Demo {
        name: "curried-add",
        description: "(fun x -> fun y -> x + y) 3 4",
        build: curried_add,
        signature: nat_to_nat_to_nat,
    },
    Demo {
        name: "let-square",
        description: "(fun x -> let f = fun y -> y * y in (x + 1) * f 4) 2",
        build: let_square,
        signature: nat_to_nat,
    },
    Demo {
        name: "lazy-argument",
        description: "an unused argument is never evaluated, even if unbound",
        build: lazy_argument,
        signature: nat_to_nat,
    },
    Demo {
        name: "stuck-sum",
        description: "applying a number leaves a residual term instead of failing",
        build: stuck_sum,
        signature: higher_order,
    },
    Demo {
        name: "divide",
        description: "integer division truncates toward zero: (fun n -> n / 2) (0 - 7)",
        build: divide,
        signature: nat_to_nat,
    },
    Demo {
        name: "factorial",
        description: "(fix fact -> fun n -> ifz n then 1 else n * fact (n - 1)) 5",
        build: factorial,
        signature: nat_to_nat,
    },
];

/// Look up a demo by name.
pub fn find(name: &str) -> Result<&'static Demo, CliError> {
    DEMOS
        .iter()
        .find(|demo| demo.name == name)
        .ok_or_else(|| CliError::UnknownDemo {
            name: name.to_string(),
        })
}

// -- Construction helpers --

fn bound(text: &str) -> Result<BoundVariable, CliError> {
    Ok(BoundVariable::new(text)?)
}

fn ident(text: &str) -> Result<Term, CliError> {
    Ok(Term::ident(text)?)
}

fn nat() -> Result<PcfType, CliError> {
    Ok(PcfType::base("Nat")?)
}

fn nat_to_nat() -> Result<PcfType, CliError> {
    Ok(PcfType::function(nat()?, nat()?))
}

fn nat_to_nat_to_nat() -> Result<PcfType, CliError> {
    Ok(PcfType::function(nat()?, nat_to_nat()?))
}

fn higher_order() -> Result<PcfType, CliError> {
    Ok(PcfType::function(nat_to_nat()?, nat()?))
}

// -- Programs --

fn curried_add() -> Result<Term, CliError> {
    let sum = Term::add(ident("$x")?, ident("$y")?);
    let add = FunBuilder::new(bound("$x")?).to(FunBuilder::new(bound("$y")?).to(sum));
    Ok(Term::application(
        Term::application(add, Term::number(3)),
        Term::number(4),
    ))
}

fn let_square() -> Result<Term, CliError> {
    let square = FunBuilder::new(bound("$y")?).to(Term::multiply(ident("$y")?, ident("$y")?));
    let body = Term::multiply(
        Term::add(ident("$x")?, Term::number(1)),
        Term::application(ident("$f")?, Term::number(4)),
    );
    let local = LetBuilder::new(bound("$f")?).be(square).in_(body)?;
    Ok(Term::application(
        FunBuilder::new(bound("$x")?).to(local),
        Term::number(2),
    ))
}

fn lazy_argument() -> Result<Term, CliError> {
    let constant = FunBuilder::new(bound("$x")?).to(Term::number(42));
    Ok(Term::application(constant, ident("undefined")?))
}

fn stuck_sum() -> Result<Term, CliError> {
    let body = Term::add(
        Term::application(ident("$f")?, Term::number(1)),
        Term::number(1),
    );
    Ok(Term::application(
        FunBuilder::new(bound("$f")?).to(body),
        Term::number(5),
    ))
}

fn divide() -> Result<Term, CliError> {
    let half = FunBuilder::new(bound("$n")?).to(Term::divide(ident("$n")?, Term::number(2)));
    Ok(Term::application(
        half,
        Term::subtract(Term::number(0), Term::number(7)),
    ))
}

fn factorial() -> Result<Term, CliError> {
    let recurse = Term::application(
        ident("$fact")?,
        Term::subtract(ident("$n")?, Term::number(1)),
    );
    let step = IfzBuilder::new(ident("$n")?)
        .then(Term::number(1))
        .otherwise(Term::multiply(ident("$n")?, recurse))?;
    let fact = FixBuilder::new(bound("$fact")?).in_(FunBuilder::new(bound("$n")?).to(step));
    Ok(Term::application(fact, Term::number(5)))
}

#[cfg(test)]
mod tests;
