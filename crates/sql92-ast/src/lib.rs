//! The tree encoding of the SQL92 construction interfaces: plain data
//! nodes that remember exactly what was built, ready for a renderer or
//! interpreter to take apart.

pub mod sql;
