//! ms-sql - SQL text layer for migsquash
//!
//! This crate works on migration SQL as plain text. It splits files into
//! statements, normalizes statements for comparison, and recognizes the
//! CREATE/DROP and ADD/DROP CONSTRAINT shapes used to detect redundant
//! statements. There is no parser here: statement boundaries are the only
//! syntax it understands.

pub mod extractor;
pub mod normalize;
pub mod object_ref;

pub use extractor::extract_statements;
pub use normalize::{normalize_statement, statements_equivalent};
pub use object_ref::{
    constraint_added, constraint_dropped, create_target, drop_target, ObjectKind, ObjectReference,
};
