//! SQL92 DML statement trees: type definitions, the builder trait
//! implementations over them, and helpers for common shapes.

pub mod ast;
pub mod builder;
pub mod helpers;
pub mod value;
