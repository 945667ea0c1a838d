use core::fmt::Write;

use crate::parser::RelationDecl;

/// Format relation declarations as the schema text DSL.
///
/// Each relation is a `Name(A, B, C)` header followed by one dependency per
/// line; relations are separated by a blank line. The output always ends
/// with a trailing newline and parses back to the same declarations.
#[must_use]
pub fn format_relations(relations: &[RelationDecl]) -> String {
    let mut output = String::new();
    for (i, relation) in relations.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let _ = writeln!(output, "{}({})", relation.name, relation.attributes.join(", "));
        for dependency in &relation.dependencies {
            let _ = writeln!(
                output,
                "{} -> {}",
                dependency.lhs.join(", "),
                dependency.rhs.join(", ")
            );
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_relations, DependencyDecl};

    fn relation(name: &str, attributes: &[&str], dependencies: &[(&[&str], &[&str])]) -> RelationDecl {
        let owned = |names: &[&str]| names.iter().map(ToString::to_string).collect();
        RelationDecl {
            name: name.to_string(),
            line: 0,
            attributes: owned(attributes),
            dependencies: dependencies
                .iter()
                .map(|(lhs, rhs)| DependencyDecl {
                    lhs: owned(lhs),
                    rhs: owned(rhs),
                })
                .collect(),
        }
    }

    #[test]
    fn test_format_single_relation() {
        let relations = vec![relation(
            "R",
            &["A", "B", "C"],
            &[(&["A"], &["B"]), (&["A", "B"], &["C"])],
        )];
        assert_eq!(
            format_relations(&relations),
            "R(A, B, C)\nA -> B\nA, B -> C\n"
        );
    }

    #[test]
    fn test_format_two_relations() {
        let relations = vec![
            relation("R", &["A", "B"], &[(&["A"], &["B"])]),
            relation("S", &["X"], &[]),
        ];
        assert_eq!(format_relations(&relations), "R(A, B)\nA -> B\n\nS(X)\n");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_relations(&[]), "");
    }

    #[test]
    fn test_messy_input_reformats_and_reparses() {
        let input = "// header\n  Enrolment ( Student Id ,Course,Grade)\nStudent Id,Course->Grade\n\n\nR(A)\n";
        let parsed = parse_relations(input).expect("should parse");
        let formatted = format_relations(&parsed);
        assert_eq!(
            formatted,
            "Enrolment(Student Id, Course, Grade)\nStudent Id, Course -> Grade\n\nR(A)\n"
        );

        let reparsed = parse_relations(&formatted).expect("formatted output should parse");
        let strip = |relations: Vec<RelationDecl>| -> Vec<RelationDecl> {
            relations
                .into_iter()
                .map(|r| RelationDecl { line: 0, ..r })
                .collect()
        };
        assert_eq!(strip(parsed), strip(reparsed));
    }
}
