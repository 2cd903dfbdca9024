//! Feature generators.
//!
//! Each generator is a stateless function from `(WorkItem, declaration
//! shape)` to an optional text fragment: absent when the governing flag is
//! unset, otherwise a syntactically self-contained member block that only
//! references the two private fields, the public factory, and other
//! fragments' well-known public members. The assembler composes fragments in
//! a fixed order, so adding or removing a feature never disturbs the rest of
//! the output.

pub mod casting;
pub mod comparable;
pub mod conversions;
pub mod debug;
pub mod equality;
pub mod factories;
pub mod hashing;
pub mod instances;
pub mod parsing;
pub mod static_abstracts;
pub mod string_comparers;
