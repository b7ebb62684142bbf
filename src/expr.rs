//! The formula AST consumed by the evaluator.
//!
//! A handful of node kinds, recursive fields boxed, everything
//! `Clone + Debug + PartialEq` so tests can build formulas by hand and
//! compare them.
//!
//! Concrete formulas are produced by a parser that lives outside this
//! crate; this module only defines the shape the evaluator accepts.

/// A term: either a discourse variable or a rigid constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A discourse-anaphora variable (`x`, `y`, ...), resolved through
    /// the current referent system.
    Variable(String),
    /// A rigid constant, resolved directly against the model.
    Constant(String),
}

impl Term {
    pub fn var(name: impl Into<String>) -> Term {
        Term::Variable(name.into())
    }

    pub fn constant(name: impl Into<String>) -> Term {
        Term::Constant(name.into())
    }
}

/// Unary connectives: negation and the two epistemic modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// ¬φ
    Neg,
    /// ◇φ — epistemic possibility
    EpistemicPossibility,
    /// □φ — epistemic necessity
    EpistemicNecessity,
}

/// Binary connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// φ ∧ ψ
    Conjunction,
    /// φ ∨ ψ
    Disjunction,
    /// φ → ψ
    Conditional,
}

/// The two supported quantifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    Existential,
    Universal,
}

/// A formula in a six-connective fragment of quantified modal logic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Unary(UnaryOp, Box<Expression>),
    Binary(BinaryOp, Box<Expression>, Box<Expression>),
    Quantification(Quantifier, String, Box<Expression>),
    Identity(Term, Term),
    Predication(String, Vec<Term>),
}

impl Expression {
    pub fn neg(scope: Expression) -> Expression {
        Expression::Unary(UnaryOp::Neg, Box::new(scope))
    }

    pub fn possibly(scope: Expression) -> Expression {
        Expression::Unary(UnaryOp::EpistemicPossibility, Box::new(scope))
    }

    pub fn necessarily(scope: Expression) -> Expression {
        Expression::Unary(UnaryOp::EpistemicNecessity, Box::new(scope))
    }

    pub fn and(left: Expression, right: Expression) -> Expression {
        Expression::Binary(BinaryOp::Conjunction, Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Expression {
        Expression::Binary(BinaryOp::Disjunction, Box::new(left), Box::new(right))
    }

    pub fn if_then(antecedent: Expression, consequent: Expression) -> Expression {
        Expression::Binary(
            BinaryOp::Conditional,
            Box::new(antecedent),
            Box::new(consequent),
        )
    }

    pub fn exists(variable: impl Into<String>, scope: Expression) -> Expression {
        Expression::Quantification(Quantifier::Existential, variable.into(), Box::new(scope))
    }

    pub fn forall(variable: impl Into<String>, scope: Expression) -> Expression {
        Expression::Quantification(Quantifier::Universal, variable.into(), Box::new(scope))
    }

    pub fn identity(left: Term, right: Term) -> Expression {
        Expression::Identity(left, right)
    }

    pub fn predication(predicate: impl Into<String>, args: Vec<Term>) -> Expression {
        Expression::Predication(predicate.into(), args)
    }
}

/// Opaque formula-to-string rendering, supplied by the caller.
///
/// The evaluator only ever calls one of these to build error traces;
/// it never formats a formula itself.
pub trait FormulaPrinter {
    fn print(&self, expr: &Expression) -> String;
}

impl<F> FormulaPrinter for F
where
    F: Fn(&Expression) -> String,
{
    fn print(&self, expr: &Expression) -> String {
        self(expr)
    }
}

/// A minimal printer rendering the conventional glyphs, good enough
/// for error traces and test assertions when no richer formatter is
/// supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPrinter;

impl FormulaPrinter for DefaultPrinter {
    fn print(&self, expr: &Expression) -> String {
        print_expr(expr)
    }
}

fn print_term(term: &Term) -> String {
    match term {
        Term::Variable(v) => v.clone(),
        Term::Constant(c) => c.clone(),
    }
}

fn print_expr(expr: &Expression) -> String {
    match expr {
        Expression::Unary(op, scope) => {
            let glyph = match op {
                UnaryOp::Neg => "¬",
                UnaryOp::EpistemicPossibility => "◇",
                UnaryOp::EpistemicNecessity => "□",
            };
            format!("{glyph}{}", print_expr(scope))
        }
        Expression::Binary(op, left, right) => {
            let glyph = match op {
                BinaryOp::Conjunction => "∧",
                BinaryOp::Disjunction => "∨",
                BinaryOp::Conditional => "→",
            };
            format!("({} {glyph} {})", print_expr(left), print_expr(right))
        }
        Expression::Quantification(q, var, scope) => {
            let glyph = match q {
                Quantifier::Existential => "∃",
                Quantifier::Universal => "∀",
            };
            format!("{glyph}{var}.{}", print_expr(scope))
        }
        Expression::Identity(left, right) => {
            format!("{} = {}", print_term(left), print_term(right))
        }
        Expression::Predication(predicate, args) => {
            let joined = args.iter().map(print_term).collect::<Vec<_>>().join(", ");
            format!("{predicate}({joined})")
        }
    }
}
