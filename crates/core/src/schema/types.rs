use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use super::error::SchemaError;

/// A set of attributes, kept ordered so enumeration and diagnostics are
/// deterministic.
pub type AttributeSet<Attribute> = BTreeSet<Attribute>;

/// Bounds every attribute type must satisfy.
///
/// Blanket-implemented; `String` and `&str` both qualify.
pub trait Attribute: Ord + Hash + Clone + Debug {}

impl<T> Attribute for T where T: Ord + Hash + Clone + Debug {}

/// A functional dependency `lhs -> rhs`.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "A: ::serde::Deserialize<'de> + Ord"))
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionalDependency<A> {
    /// Determinant side.
    pub lhs: AttributeSet<A>,
    /// Dependent side.
    pub rhs: AttributeSet<A>,
}

impl<A> FunctionalDependency<A>
where
    A: Ord,
{
    pub fn new(lhs: impl IntoIterator<Item = A>, rhs: impl IntoIterator<Item = A>) -> Self {
        Self {
            lhs: lhs.into_iter().collect(),
            rhs: rhs.into_iter().collect(),
        }
    }

    /// `true` if every dependent attribute already appears in the determinant.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.rhs.is_subset(&self.lhs)
    }
}

/// A validated relation schema: a non-empty attribute universe and the
/// functional dependencies declared over it.
///
/// Dependencies keep their input order; only diagnostics depend on it.
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema<A> {
    attributes: AttributeSet<A>,
    dependencies: Vec<FunctionalDependency<A>>,
}

impl<A> Schema<A>
where
    A: Attribute,
{
    /// Validate and build a schema.
    ///
    /// Repeated attribute names collapse into one.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the attribute set is empty, if a dependency
    /// has an empty side, or if a dependency mentions an attribute outside the
    /// schema. The first offending dependency in input order is reported.
    pub fn new(
        attributes: impl IntoIterator<Item = A>,
        dependencies: Vec<FunctionalDependency<A>>,
    ) -> Result<Self, SchemaError<A>> {
        let attributes: AttributeSet<A> = attributes.into_iter().collect();

        if attributes.is_empty() {
            return Err(SchemaError::EmptySchema);
        }

        for (dependency, fd) in dependencies.iter().enumerate() {
            if fd.lhs.is_empty() {
                return Err(SchemaError::EmptyDeterminant { dependency });
            }
            if fd.rhs.is_empty() {
                return Err(SchemaError::EmptyDependent { dependency });
            }
            if let Some(attribute) = fd
                .lhs
                .iter()
                .chain(&fd.rhs)
                .find(|attribute| !attributes.contains(*attribute))
            {
                return Err(SchemaError::UnknownAttribute {
                    dependency,
                    attribute: attribute.clone(),
                });
            }
        }

        tracing::trace!(
            attributes = attributes.len(),
            dependencies = dependencies.len(),
            "schema validated"
        );

        Ok(Self {
            attributes,
            dependencies,
        })
    }

    #[must_use]
    pub const fn attributes(&self) -> &AttributeSet<A> {
        &self.attributes
    }

    #[must_use]
    pub fn dependencies(&self) -> &[FunctionalDependency<A>] {
        &self.dependencies
    }

    /// Number of attributes in the schema.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn into_parts(self) -> (AttributeSet<A>, Vec<FunctionalDependency<A>>) {
        (self.attributes, self.dependencies)
    }
}
