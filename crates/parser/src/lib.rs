//! Text format for relation schemas.
//!
//! A document lists relations, each introduced by a header naming its
//! attributes and followed by its functional dependencies:
//!
//! ```text
//! // enrolment data
//! Enrolment(Student, Course, Instructor)
//! Student, Course -> Instructor
//! Instructor -> Course
//! ```
//!
//! [`parse_document`] yields one unvalidated [`RelationDecl`] (or a syntax
//! error) per relation and [`parse_relations`] the strict list, so that a caller
//! can validate and analyze each relation independently;
//! [`format_relations`] renders declarations back into canonical text.

pub mod display;
pub mod parser;

pub use display::format_relations;
pub use parser::{parse_document, parse_relations, DependencyDecl, ParseError, RelationDecl};
