use super::*;

/// Splits `text` into lines, trims them per `trim` and drops the blank ones.
pub(super) fn normalize_lines(text: &str, trim: LineTrim) -> Vec<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();

    match trim {
        LineTrim::Trailing => lines.into_iter().map(ToOwned::to_owned).collect(),
        LineTrim::Both => lines
            .into_iter()
            .map(|line| line.trim_start().to_string())
            .collect(),
        LineTrim::Dedent => {
            let indent = lines
                .iter()
                .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
                .min()
                .unwrap_or(0);
            // Leading spaces and tabs are single bytes, so the cut is on a char boundary.
            lines
                .into_iter()
                .map(|line| line[indent..].to_string())
                .collect()
        }
    }
}
