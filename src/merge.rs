use std::collections::HashMap;

use serde::Serialize;

use crate::rows::Row;

/// One output record per distinct criterion. Role keeps duplicates; topic and
/// examples are deduplicated before joining.
#[derive(Debug, PartialEq, Serialize)]
pub struct MergedRow {
    pub criterion: String,
    pub role: String,
    pub topic: String,
    pub examples: String,
}

/// Collapse rows sharing a criterion into one row each, in first-seen
/// criterion order. Rows within a group keep their input order.
pub fn combine_rows(rows: Vec<Row>) -> Vec<MergedRow> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Row>> = HashMap::new();

    for row in rows {
        match groups.get_mut(&row.criterion) {
            Some(group) => group.push(row),
            None => {
                order.push(row.criterion.clone());
                groups.insert(row.criterion.clone(), vec![row]);
            }
        }
    }

    order
        .into_iter()
        .map(|criterion| {
            let group = &groups[&criterion];
            MergedRow {
                role: group
                    .iter()
                    .map(|r| r.role.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                topic: dedup_join(group.iter().map(|r| r.topic.as_str()), ", "),
                examples: dedup_join(group.iter().map(|r| r.examples.as_str()), "; "),
                criterion,
            }
        })
        .collect()
}

/// Join values with `sep`, keeping only the first occurrence of each value.
/// Exact string equality; the empty string deduplicates like any other value.
fn dedup_join<'a>(values: impl Iterator<Item = &'a str>, sep: &str) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen.join(sep)
}
