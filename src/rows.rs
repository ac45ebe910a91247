use serde::Serialize;

use crate::framework::Framework;

const BRAND: &str = "Monzo";
const REBRAND: &str = "Move";

/// One flattened competency statement. `criterion` is the merge key and is
/// never empty; `examples` is empty for plain criteria.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub criterion: String,
    pub role: String,
    pub topic: String,
    pub examples: String,
}

/// Replace the first occurrence of the old brand name, case-sensitive.
pub fn rebrand(text: &str) -> String {
    text.replacen(BRAND, REBRAND, 1)
}

/// Flatten a framework into rows, preserving topic/level/criteria order.
/// Plain criteria and example criteria are independent; a level block may
/// contribute rows from both.
pub fn project_rows(framework: &Framework) -> Vec<Row> {
    let role = format!("{} {}", framework.sidebar_title, framework.sidebar_group);
    let mut rows = Vec::new();

    for topic in &framework.topics {
        for content in &topic.content {
            let topic_label = format!("{} {}", topic.name, content.level);

            if let Some(criteria) = &content.criteria {
                for criterion in criteria {
                    rows.push(Row {
                        criterion: rebrand(criterion),
                        role: role.clone(),
                        topic: topic_label.clone(),
                        examples: String::new(),
                    });
                }
            }

            if let Some(example_criteria) = &content.example_criteria {
                for example_criterion in example_criteria {
                    rows.push(Row {
                        criterion: rebrand(&example_criterion.criteria),
                        role: role.clone(),
                        topic: topic_label.clone(),
                        examples: rebrand(&example_criterion.examples.join("; ")),
                    });
                }
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::extract_framework;

    fn fixture(name: &str) -> Framework {
        let text = std::fs::read_to_string(format!("tests/fixtures/{}.md", name)).unwrap();
        extract_framework(&text).unwrap()
    }

    #[test]
    fn rebrand_first_occurrence_only() {
        assert_eq!(rebrand("Monzo Monzo"), "Move Monzo");
    }

    #[test]
    fn rebrand_is_case_sensitive() {
        assert_eq!(rebrand("monzo stays"), "monzo stays");
        assert_eq!(rebrand("No brand here"), "No brand here");
    }

    #[test]
    fn backend_rows_in_source_order() {
        let rows = project_rows(&fixture("backend"));
        let criteria: Vec<&str> = rows.iter().map(|r| r.criterion.as_str()).collect();
        assert_eq!(
            criteria,
            [
                "Be kind",
                "Shares knowledge with the team",
                "Explains Move architecture decisions clearly",
                "Writes proposals for Move-wide changes",
                "Delivers well-scoped pieces of work",
            ]
        );
    }

    #[test]
    fn role_and_topic_formatting() {
        let rows = project_rows(&fixture("backend"));
        assert!(rows.iter().all(|r| r.role == "Engineer Backend"));
        assert_eq!(rows[0].topic, "Communication 1");
        assert_eq!(rows[2].topic, "Communication 2");
        assert_eq!(rows[4].topic, "Impact 1");
    }

    #[test]
    fn plain_criteria_have_empty_examples() {
        let rows = project_rows(&fixture("backend"));
        assert_eq!(rows[0].examples, "");
        assert_eq!(rows[1].examples, "");
    }

    #[test]
    fn example_criteria_join_and_rebrand() {
        let rows = project_rows(&fixture("backend"));
        assert_eq!(
            rows[3].examples,
            "Wrote an RFC for the payments migration; Led a design review"
        );
        assert_eq!(rows[4].examples, "Shipped the Move onboarding flow");
    }

    #[test]
    fn both_kinds_fire_for_one_level_block() {
        let rows = project_rows(&fixture("web"));
        // Level 1 of Communication declares "Be kind" as a plain criterion and
        // again as an example criterion; both rows must be emitted.
        let be_kind: Vec<&Row> = rows.iter().filter(|r| r.criterion == "Be kind").collect();
        assert_eq!(be_kind.len(), 2);
        assert_eq!(be_kind[0].examples, "");
        assert_eq!(be_kind[1].examples, "Pair review");
    }

    #[test]
    fn absent_optional_fields_contribute_nothing() {
        let text = "\
---
sidebarTitle: Engineer
sidebarGroup: Data
topics:
  - name: Communication
    content:
      - level: 1
---
Body.
";
        let fw = extract_framework(text).unwrap();
        assert!(project_rows(&fw).is_empty());
    }
}
