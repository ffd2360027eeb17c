use std::fmt;

use super::Term;

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable { name, .. } => write!(f, "{}", name),
            Term::Abstraction { param, body, .. } => write!(f, "λ{}. {}", param, body),
            Term::Application { function, argument } => {
                write!(f, "({}) ({})", function, argument)
            }
        }
    }
}
