//! Single-step beta-reduction and the normal-form predicate.
//!
//! A term is either Normal (further `beta_reduce` calls fail) or Reducible,
//! in which case exactly one step is defined: the leftmost redex fires
//! first, and reduction proceeds under binders. There is no separate
//! "stuck" state distinct from Normal.

use crate::debug_trace;
use crate::error::ReduceError;
use crate::term::Term;

impl Term {
    /// Does this term contain no redex?
    pub fn is_normal(&self) -> bool {
        match self {
            Term::Variable { .. } => true,
            Term::Abstraction { body, .. } => body.is_normal(),
            Term::Application { function, argument } => {
                // An abstraction in function position is a redex
                if matches!(function.as_ref(), Term::Abstraction { .. }) {
                    return false;
                }
                function.is_normal() && argument.is_normal()
            }
        }
    }

    /// Perform exactly one beta-reduction step, or fail with
    /// [`ReduceError::NormalForm`] when none is available.
    pub fn beta_reduce(&self) -> Result<Term, ReduceError> {
        match self {
            // A variable never reduces
            Term::Variable { .. } => Err(ReduceError::NormalForm(self.to_string())),

            Term::Abstraction {
                param,
                param_ty,
                body,
            } => {
                if self.is_normal() {
                    return Err(ReduceError::NormalForm(self.to_string()));
                }
                // Reduction proceeds under the binder
                Ok(Term::Abstraction {
                    param: param.clone(),
                    param_ty: param_ty.clone(),
                    body: Box::new(body.beta_reduce()?),
                })
            }

            Term::Application { function, argument } => {
                // 1. The redex fires: (λx. body) a  ->  body{a/x}
                if let Term::Abstraction { param, body, .. } = function.as_ref() {
                    debug_trace!("reduce", "firing redex ({}) ({})", function, argument);
                    return Ok(body.substitute(param, argument));
                }
                // 2. Leftmost: step the function position first
                if !function.is_normal() {
                    return Ok(Term::app(function.beta_reduce()?, (**argument).clone()));
                }
                // 3. Then the argument position
                if !argument.is_normal() {
                    return Ok(Term::app((**function).clone(), argument.beta_reduce()?));
                }
                // 4. Both normal, no abstraction in function position
                Err(ReduceError::NormalForm(self.to_string()))
            }
        }
    }
}
