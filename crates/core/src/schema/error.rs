use core::fmt::{Debug, Display, Formatter, Result};

/// Error validating a relation schema.
///
/// Dependencies are identified by their 0-based position in the input list.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError<A> {
    /// The relation declares no attributes.
    EmptySchema,
    /// A dependency has nothing on its left-hand side.
    EmptyDeterminant { dependency: usize },
    /// A dependency has nothing on its right-hand side.
    EmptyDependent { dependency: usize },
    /// A dependency mentions an attribute the relation does not declare.
    UnknownAttribute { dependency: usize, attribute: A },
}

impl<A> Display for SchemaError<A>
where
    A: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptySchema => write!(f, "relation declares no attributes"),
            Self::EmptyDeterminant { dependency } => write!(
                f,
                "dependency #{} has an empty left-hand side",
                dependency + 1
            ),
            Self::EmptyDependent { dependency } => write!(
                f,
                "dependency #{} has an empty right-hand side",
                dependency + 1
            ),
            Self::UnknownAttribute {
                dependency,
                attribute,
            } => write!(
                f,
                "dependency #{} references `{attribute}`, which is not an attribute of the relation",
                dependency + 1
            ),
        }
    }
}

impl<A> core::error::Error for SchemaError<A> where A: Debug + Display {}
