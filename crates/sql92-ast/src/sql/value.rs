//! The type-erased value wrapper embedded in statement trees.

use std::fmt;

use sql92_syntax::value::{ValuePayload, ValueSyntax};

/// An opaque host value inside a statement tree.
///
/// Two values are equal only when their payloads have the same runtime type
/// and compare equal; a type mismatch is plain inequality. The payload
/// itself is never exposed, only equality and printing.
pub struct Value(Box<dyn ValuePayload>);

impl ValueSyntax for Value {
    fn wrap<V: ValuePayload>(payload: V) -> Self {
        Value(Box::new(payload))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_value(other.0.as_ref())
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Value(self.0.clone_value())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value").field(&self.0).finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({:?})", self.0)
    }
}
