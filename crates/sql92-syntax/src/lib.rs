//! Construction interfaces for SQL92 DML statements.
//!
//! Each syntax category of the grammar gets its own trait, wired together
//! through associated types. A backend implements the whole family to obtain
//! every statement shape a builder can produce; builders written against the
//! traits work with any such backend. The interfaces only build: there is no
//! validation and no rendering here.

pub mod grammar;
pub mod value;
