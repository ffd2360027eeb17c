use super::Type;
use std::fmt;

// ============================================================================
// Type Syntax (hardcoded)
// ============================================================================
// The type language is deliberately small:
//   - Base types: bare identifiers ('Int', 'Bool', τ)
//   - Arrows: ->  (function types)
// An arrow nested inside an arrow renders parenthesized on either side, so
// `(Int -> Bool) -> (String -> Int)` reads back unambiguously by eye.
// ============================================================================

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Base(name) => write!(f, "{}", name),
            Type::Function { domain, codomain } => {
                write_arrow_part(f, domain)?;
                write!(f, " -> ")?;
                write_arrow_part(f, codomain)
            }
        }
    }
}

fn write_arrow_part(f: &mut fmt::Formatter<'_>, part: &Type) -> fmt::Result {
    match part {
        Type::Base(_) => write!(f, "{}", part),
        Type::Function { .. } => write!(f, "({})", part),
    }
}
