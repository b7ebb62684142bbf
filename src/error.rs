//! Error taxonomy for the evaluator and semantic relations.
//!
//! Every evaluation error carries a trace: each recursive call that
//! fails wraps the failure in the printed form of its own expression,
//! so a caller sees a path from the outermost formula down to the
//! innermost one that actually failed.

/// Errors produced while updating an information state or deciding a
/// semantic relation.
///
/// Internally this is a tagged enum (clearer match arms, no string
/// parsing), but its [`Display`] impl renders exactly the
/// `"In evaluating formula <printed form>:\n<inner>"` trace, so
/// `to_string()` gives callers a plain error string on its own, with no
/// further formatting required.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GsvError {
    /// A variable referenced in an identity or predication has no peg
    /// in the current referent system.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    /// A constant term has no interpretation in the model at the
    /// relevant world.
    #[error("uninterpreted term: {0}")]
    UninterpretedTerm(String),

    /// A predicate has no interpretation in the model at the relevant
    /// world.
    #[error("uninterpreted predicate: {0}")]
    UninterpretedPredicate(String),

    /// An AST node carried a binary operator outside {∧, ∨, →}.
    #[error("invalid operator")]
    InvalidOperator,

    /// An AST node carried a quantifier outside {∃, ∀}.
    #[error("invalid quantifier")]
    InvalidQuantifier,

    /// A recursive evaluation failed; `formula` is the printed form of
    /// the enclosing expression, `inner` the wrapped failure.
    #[error("In evaluating formula {formula}:\n{inner}")]
    Wrapped {
        formula: String,
        #[source]
        inner: Box<GsvError>,
    },
}

impl GsvError {
    /// Wrap `self` as having occurred while evaluating `formula`,
    /// whose printed form is produced by a caller-supplied formatter —
    /// rendering a formula to text is kept out of this crate entirely.
    pub fn wrap(self, formula: String) -> GsvError {
        GsvError::Wrapped {
            formula,
            inner: Box::new(self),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type GsvResult<T> = Result<T, GsvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_nest_outer_to_inner() {
        let inner = GsvError::UnboundVariable("x".into());
        let wrapped = inner.wrap("P(x)".into());
        let wrapped = wrapped.wrap("∃y.P(x)".into());
        let message = wrapped.to_string();
        assert_eq!(
            message,
            "In evaluating formula ∃y.P(x):\nIn evaluating formula P(x):\nunbound variable: x"
        );
    }
}
