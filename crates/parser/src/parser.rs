//! Winnow-based parser for the relation schema text DSL.
//!
//! Grammar:
//! ```text
//! document   = line*
//! line       = comment | blank | header | dependency
//! comment    = WS? ("//" | "#") REST_OF_LINE EOL
//! blank      = WS? NEWLINE
//! header     = NAME? "(" attributes ")" TAIL EOL
//! dependency = attributes "->" attributes TAIL EOL  -- only after a header
//! attributes = attribute ("," attribute)*
//! attribute  = (!("->" | "//") [^,()#\r\n])*       -- whitespace-trimmed
//! TAIL       = WS? (("//" | "#") REST_OF_LINE)?
//! EOL        = NEWLINE | end-of-input
//! ```
//!
//! Only the two-character `->` separates the sides of a dependency, so names
//! such as `e-mail` are plain attributes.
//!
//! An attribute list that is entirely blank parses as an empty list; schema
//! validation rejects it later, per relation. A blank entry inside a longer
//! list (`A,,B`) is a syntax error.
//!
//! [`parse_document`] recovers from syntax errors: the relation containing
//! the bad line becomes an error entry and parsing resumes at the next
//! header. [`parse_relations`] is the strict form and fails on the first
//! error.

use nfcheck_core::{FunctionalDependency, Schema, SchemaError};
use winnow::ascii::{line_ending, till_line_ending};
use winnow::combinator::{alt, cut_err, eof, not, opt, preceded, repeat, separated};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{literal, one_of, take_till, take_while};
use winnow::ModalResult;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A parse error with human-readable location information.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "parse error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// A dependency line as written, before validation.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDecl {
    pub lhs: Vec<String>,
    pub rhs: Vec<String>,
}

/// A relation header and the dependency lines that follow it, before
/// validation.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationDecl {
    pub name: String,
    /// 1-based line of the header.
    pub line: usize,
    pub attributes: Vec<String>,
    pub dependencies: Vec<DependencyDecl>,
}

impl RelationDecl {
    /// Validate the declaration into a [`Schema`].
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] for an empty relation, an empty dependency
    /// side or a dependency over an undeclared attribute.
    pub fn to_schema(&self) -> Result<Schema<String>, SchemaError<String>> {
        let dependencies = self
            .dependencies
            .iter()
            .map(|fd| FunctionalDependency::new(fd.lhs.iter().cloned(), fd.rhs.iter().cloned()))
            .collect();
        Schema::new(self.attributes.iter().cloned(), dependencies)
    }

    /// Declaration of an existing schema, attributes in schema order.
    #[must_use]
    pub fn from_schema(name: impl Into<String>, schema: &Schema<String>) -> Self {
        Self {
            name: name.into(),
            line: 0,
            attributes: schema.attributes().iter().cloned().collect(),
            dependencies: schema
                .dependencies()
                .iter()
                .map(|fd| DependencyDecl {
                    lhs: fd.lhs.iter().cloned().collect(),
                    rhs: fd.rhs.iter().cloned().collect(),
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Parse a schema document, one entry per relation in document order.
///
/// A syntax error inside a relation turns that relation into an `Err`
/// entry; the rest of it is skipped up to the next header line, which starts
/// a fresh entry. A broken header line is an `Err` entry of its own, as is a
/// dependency that appears before the first header.
#[must_use]
pub fn parse_document(input: &str) -> Vec<Result<RelationDecl, ParseError>> {
    let original = input;
    let mut stream: &str = input;
    let mut entries: Vec<Result<RelationDecl, ParseError>> = Vec::new();
    // The last entry failed; ignore lines until the next header.
    let mut skipping = false;

    while !stream.is_empty() {
        let offset = original.len() - stream.len();
        let line_start = stream;

        match schema_line.parse_next(&mut stream) {
            Ok(Line::Skip) => {}
            Ok(Line::Header { name, attributes }) => {
                skipping = false;
                entries.push(Ok(RelationDecl {
                    name,
                    line: offset_to_line_col(original, offset).0,
                    attributes,
                    dependencies: Vec::new(),
                }));
            }
            Ok(Line::Dependency(dependency)) => {
                if skipping {
                    continue;
                }
                if let Some(Ok(relation)) = entries.last_mut() {
                    relation.dependencies.push(dependency);
                } else {
                    let (line, column) = offset_to_line_col(original, offset);
                    entries.push(Err(ParseError {
                        message: "dependency declared before any relation header".to_string(),
                        line,
                        column,
                    }));
                    skipping = true;
                }
            }
            Err(e) => {
                let consumed = original.len().saturating_sub(stream.len());
                let (line, column) = offset_to_line_col(original, consumed);
                let error = ParseError {
                    message: error_message(e),
                    line,
                    column,
                };
                tracing::debug!(line, column, "skipping relation after syntax error");

                let mut retry = line_start;
                let broken_header =
                    matches!(header_line.parse_next(&mut retry), Err(ErrMode::Cut(_)));

                stream = line_start;
                skip_line(&mut stream);

                if broken_header || entries.is_empty() {
                    entries.push(Err(error));
                } else if !skipping {
                    if let Some(last) = entries.last_mut() {
                        *last = Err(error);
                    }
                }
                skipping = true;
            }
        }
    }

    tracing::debug!(entries = entries.len(), "parsed schema document");
    entries
}

/// Parse a schema document into its relation declarations.
///
/// # Errors
///
/// Returns the first [`ParseError`] in document order, with line/column
/// information, when the input does not conform to the grammar or when a
/// dependency appears before the first relation header.
pub fn parse_relations(input: &str) -> Result<Vec<RelationDecl>, ParseError> {
    parse_document(input).into_iter().collect()
}

/// Drop the rest of the current line, newline included.
fn skip_line(input: &mut &str) {
    let _: ModalResult<()> = (take_till(0.., '\n'), opt(literal("\n")))
        .void()
        .parse_next(input);
}

fn error_message(e: ErrMode<ContextError>) -> String {
    let message = match e.into_inner() {
        Ok(context) => context.to_string(),
        Err(other) => other.to_string(),
    };
    if message.is_empty() {
        "unexpected input".to_string()
    } else {
        message.replace('\n', "; ")
    }
}

// ---------------------------------------------------------------------------
// Line/column helper
// ---------------------------------------------------------------------------

/// Convert a byte offset into the original input to 1-based (line, column).
fn offset_to_line_col(input: &str, offset: usize) -> (usize, usize) {
    let safe_offset = offset.min(input.len());
    let prefix = &input[..safe_offset];
    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = prefix
        .rfind('\n')
        .map_or_else(|| prefix.chars().count() + 1, |pos| prefix[pos + 1..].chars().count() + 1);
    (line, column)
}

// ---------------------------------------------------------------------------
// Whitespace helpers
// ---------------------------------------------------------------------------

/// Optional inline whitespace.
fn opt_inline_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)
}

/// End of a line: a newline, or the end of the input for the last line.
fn end_of_line(input: &mut &str) -> ModalResult<()> {
    alt((line_ending.void(), eof.void()))
        .context(StrContext::Expected(StrContextValue::Description(
            "end of line",
        )))
        .parse_next(input)
}

/// Optional whitespace and `//` or `#` comment before the end of a line.
fn line_tail(input: &mut &str) -> ModalResult<()> {
    opt_inline_ws.parse_next(input)?;
    opt((alt((literal("//"), literal("#"))), till_line_ending))
        .void()
        .parse_next(input)
}

// ---------------------------------------------------------------------------
// Leaf parsers
// ---------------------------------------------------------------------------

const fn is_attribute_char(c: char) -> bool {
    !matches!(c, ',' | '(' | ')' | '#' | '\r' | '\n')
}

/// One attribute name, trimmed. Stops before `->` and `//` but not before a
/// lone `-`, `>` or `/`. May be empty; [`attribute_list`] decides whether
/// that is allowed.
fn attribute_name(input: &mut &str) -> ModalResult<String> {
    repeat(
        0..,
        preceded(not(alt(("->", "//"))), one_of(is_attribute_char)),
    )
    .map(|()| ())
    .take()
    .map(|s: &str| s.trim().to_string())
    .parse_next(input)
}

/// Comma-separated attribute names. A wholly blank list is empty.
fn attribute_list(input: &mut &str) -> ModalResult<Vec<String>> {
    let names: Vec<String> = separated(1.., attribute_name, ',').parse_next(input)?;

    if let [only] = names.as_slice() {
        if only.is_empty() {
            return Ok(Vec::new());
        }
    }
    if names.iter().any(String::is_empty) {
        return Err(ErrMode::Cut(ContextError::new()));
    }
    Ok(names)
}

// ---------------------------------------------------------------------------
// Line parsers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Skip,
    Header {
        name: String,
        attributes: Vec<String>,
    },
    Dependency(DependencyDecl),
}

/// `"//" | "#"` up to the end of the line.
fn comment_line(input: &mut &str) -> ModalResult<Line> {
    opt_inline_ws.parse_next(input)?;
    alt((literal("//"), literal("#"))).parse_next(input)?;
    till_line_ending.parse_next(input)?;
    end_of_line.parse_next(input)?;
    Ok(Line::Skip)
}

/// A line holding only whitespace. The document loop only runs on non-empty
/// input, so this always consumes something.
fn blank_line(input: &mut &str) -> ModalResult<Line> {
    opt_inline_ws.parse_next(input)?;
    end_of_line.parse_next(input)?;
    Ok(Line::Skip)
}

/// `Name(A, B, C)`. Everything after `(` is committed to.
fn header_line(input: &mut &str) -> ModalResult<Line> {
    let name = take_while(0.., is_attribute_char)
        .map(|s: &str| s.trim().to_string())
        .parse_next(input)?;
    literal("(").parse_next(input)?;
    let attributes = cut_err(attribute_list)
        .context(StrContext::Label("attribute list"))
        .parse_next(input)?;
    cut_err(literal(")"))
        .context(StrContext::Expected(StrContextValue::CharLiteral(')')))
        .parse_next(input)?;
    line_tail.parse_next(input)?;
    cut_err(end_of_line).parse_next(input)?;
    Ok(Line::Header { name, attributes })
}

/// `A, B -> C, D`. Everything after `->` is committed to.
fn dependency_line(input: &mut &str) -> ModalResult<Line> {
    let lhs = attribute_list.parse_next(input)?;
    literal("->").parse_next(input)?;
    let rhs = cut_err(attribute_list)
        .context(StrContext::Label("right-hand side"))
        .parse_next(input)?;
    line_tail.parse_next(input)?;
    cut_err(end_of_line).parse_next(input)?;
    Ok(Line::Dependency(DependencyDecl { lhs, rhs }))
}

fn schema_line(input: &mut &str) -> ModalResult<Line> {
    alt((comment_line, blank_line, header_line, dependency_line))
        .context(StrContext::Label("line"))
        .context(StrContext::Expected(StrContextValue::Description(
            "`Name(A, B, ...)`, `A, B -> C` or a comment",
        )))
        .parse_next(input)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
