use core::fmt::{Display, Formatter, Result};

use super::NormalForm;
use crate::schema::display::Braced;
use crate::schema::FunctionalDependency;

/// Why a dependency breaks a normal form.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationCause<A> {
    /// The dependency determines this non-prime attribute (2NF, 3NF).
    NonPrimeAttribute(A),
    /// The dependency's left-hand side is not a superkey (BCNF).
    NonSuperkeyDeterminant,
}

/// The first dependency, in input order, that breaks a normal form.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "A: ::serde::Deserialize<'de> + Ord"))
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation<A> {
    pub level: NormalForm,
    /// 0-based position of the dependency in the schema.
    pub index: usize,
    pub dependency: FunctionalDependency<A>,
    pub cause: ViolationCause<A>,
}

impl<A> Violation<A> {
    /// The offending attribute, if the cause names one.
    #[must_use]
    pub const fn attribute(&self) -> Option<&A> {
        match &self.cause {
            ViolationCause::NonPrimeAttribute(attribute) => Some(attribute),
            ViolationCause::NonSuperkeyDeterminant => None,
        }
    }
}

impl<A> Display for Violation<A>
where
    A: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} breaks {} requirements", self.dependency, self.level)?;
        match &self.cause {
            ViolationCause::NonPrimeAttribute(attribute) => {
                write!(f, " ({attribute} is non-prime)")
            }
            ViolationCause::NonSuperkeyDeterminant => {
                write!(f, " ({} is not a superkey)", Braced(&self.dependency.lhs))
            }
        }
    }
}

/// Outcome of one normal-form predicate.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "A: ::serde::Deserialize<'de> + Ord"))
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<A> {
    Satisfied,
    Violated(Violation<A>),
}

impl<A> Verdict<A> {
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }

    #[must_use]
    pub const fn violation(&self) -> Option<&Violation<A>> {
        match self {
            Self::Satisfied => None,
            Self::Violated(violation) => Some(violation),
        }
    }
}

impl<A> From<core::result::Result<(), Violation<A>>> for Verdict<A> {
    fn from(result: core::result::Result<(), Violation<A>>) -> Self {
        match result {
            Ok(()) => Self::Satisfied,
            Err(violation) => Self::Violated(violation),
        }
    }
}
