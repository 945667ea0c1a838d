use core::fmt::{Display, Formatter, Result};

use super::types::{AttributeSet, FunctionalDependency};

/// Displays an attribute set as a comma-separated list, without braces.
///
/// This is the form the schema DSL uses on either side of `->`.
pub struct Attributes<'a, A>(pub &'a AttributeSet<A>);

impl<A> Display for Attributes<'_, A>
where
    A: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, attribute) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{attribute}")?;
        }
        Ok(())
    }
}

/// Displays an attribute set in braces, e.g. `{A, C}`.
pub struct Braced<'a, A>(pub &'a AttributeSet<A>);

impl<A> Display for Braced<'_, A>
where
    A: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{{{}}}", Attributes(self.0))
    }
}

impl<A> Display for FunctionalDependency<A>
where
    A: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} -> {}", Attributes(&self.lhs), Attributes(&self.rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_display() {
        let fd = FunctionalDependency::new(["B", "A"], ["C"]);
        assert_eq!(fd.to_string(), "A, B -> C");
    }

    #[test]
    fn test_braced_display() {
        let set: AttributeSet<&str> = ["C", "A"].into_iter().collect();
        assert_eq!(Braced(&set).to_string(), "{A, C}");
        assert_eq!(Braced(&AttributeSet::<&str>::new()).to_string(), "{}");
    }
}
