//! The contract for host values embedded in statement trees.

use std::any::Any;
use std::fmt;

/// A host value that can live inside a statement tree.
///
/// Covered by a blanket implementation for every type that is comparable,
/// clonable, printable and thread-safe. Equality across erased payloads
/// checks the runtime type first: values of different types are unequal,
/// never an error.
pub trait ValuePayload: Any + fmt::Debug + Send + Sync {
    /// The payload as [`Any`], for runtime type tests.
    fn as_any(&self) -> &dyn Any;

    /// Compare against another erased payload.
    fn eq_value(&self, other: &dyn ValuePayload) -> bool;

    /// Clone into a fresh box.
    fn clone_value(&self) -> Box<dyn ValuePayload>;
}

impl<T> ValuePayload for T
where
    T: Any + PartialEq + Clone + fmt::Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_value(&self, other: &dyn ValuePayload) -> bool {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => self == other,
            None => false,
        }
    }

    fn clone_value(&self) -> Box<dyn ValuePayload> {
        Box::new(self.clone())
    }
}

/// The value category: embedding host values into a syntax.
pub trait ValueSyntax: Sized {
    fn wrap<V: ValuePayload>(payload: V) -> Self;
}
