use crate::typing::Type;
use std::collections::HashMap;

// =============================================================================
// Context: Γ : String → Type
// =============================================================================

/// The typing environment. Entries own their types outright, so a context
/// never dangles even when it outlives the values it was seeded from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Context {
    bindings: HashMap<String, Type>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context pre-seeded with the given bindings
    pub fn with_bindings<I: IntoIterator<Item = (String, Type)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }

    pub fn lookup(&self, x: &str) -> Option<&Type> {
        self.bindings.get(x)
    }

    /// Γ[x:τ] - functional extension (immutable)
    ///
    /// Descending into an abstraction body must extend a copy, never the
    /// context an enclosing scope still holds.
    pub fn extend(&self, x: String, ty: Type) -> Self {
        let mut new = self.clone();
        new.bindings.insert(x, ty);
        new
    }

    /// Mutable extension: insert or replace the binding for `x`
    pub fn add(&mut self, x: String, ty: Type) {
        self.bindings.insert(x, ty);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Names bound in this context, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(|k| k.as_str())
    }
}
