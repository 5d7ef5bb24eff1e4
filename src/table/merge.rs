use super::*;

const CONTINUATION_PREFIX: &str = "| ";

#[derive(Debug, Default)]
pub(super) struct MergedRows {
    pub records: Vec<Record>,
    pub dropped_rows: usize,
}

/// Folds rows with an empty first column into the nearest keyed row above them.
pub(super) fn merge_continuations(rows: Vec<Record>, column_count: usize) -> MergedRows {
    let mut groups: Vec<Vec<Record>> = Vec::new();
    let mut dropped_rows = 0;

    for row in rows {
        let is_continuation = row.first().map(|cell| cell.is_empty()).unwrap_or(true);
        if !is_continuation {
            groups.push(vec![row]);
            continue;
        }

        match groups.last_mut() {
            Some(group) => group.push(row),
            None => dropped_rows += 1,
        }
    }

    MergedRows {
        records: groups
            .into_iter()
            .map(|group| merge_group(group, column_count))
            .collect(),
        dropped_rows,
    }
}

pub(super) fn merge_group(mut group: Vec<Record>, column_count: usize) -> Record {
    if group.len() == 1 {
        return group.pop().unwrap_or_default();
    }

    (0..column_count)
        .map(|column| {
            let values: Vec<&str> = group
                .iter()
                .filter_map(|record| record.get(column))
                .map(String::as_str)
                .filter(|value| !value.is_empty())
                .collect();

            match values.as_slice() {
                [] => String::new(),
                [single] => single.to_string(),
                _ => values
                    .iter()
                    .map(|value| format!("{CONTINUATION_PREFIX}{value}"))
                    .collect::<Vec<String>>()
                    .join("\n"),
            }
        })
        .collect()
}
