use super::*;

#[derive(Debug, Default)]
pub(super) struct TableBlocks<'a> {
    pub header: Vec<&'a str>,
    pub body: Vec<&'a str>,
}

/// Validates the border structure and returns the border line.
pub(super) fn check_format(lines: &[String], border_line: &Regex) -> Result<String, FormatError> {
    if lines.len() < MIN_TABLE_LINES {
        return Err(FormatError::TooFewLines { found: lines.len() });
    }

    let border = lines[0].as_str();
    if !border_line.is_match(border) {
        return Err(FormatError::MalformedBorder { line: 1 });
    }

    let mut border_count = 1;
    let mut previous = border;
    for (index, line) in lines.iter().enumerate().skip(1) {
        if line == border {
            if previous == border {
                return Err(FormatError::AdjacentBorders { line: index + 1 });
            }
            border_count += 1;
        }
        previous = line.as_str();
    }

    if previous != border {
        return Err(FormatError::MissingBottomBorder { line: lines.len() });
    }
    if border_count != EXPECTED_BORDER_COUNT {
        return Err(FormatError::BorderCount {
            found: border_count,
        });
    }

    Ok(border.to_string())
}

/// Buckets lines by how many borders precede them: one for the header, two for the body.
pub(super) fn split_header_and_body<'a>(lines: &'a [String], border: &str) -> TableBlocks<'a> {
    let mut blocks = TableBlocks::default();
    let mut border_count = 0;

    for line in lines {
        if line == border {
            border_count += 1;
            continue;
        }
        match border_count {
            1 => blocks.header.push(line),
            2 => blocks.body.push(line),
            _ => {}
        }
    }

    blocks
}

/// Derives one span per `=` run of the border.
pub(super) fn column_spans(border: &str) -> Vec<ColumnSpan> {
    let bytes = border.as_bytes();
    let mut spans: Vec<ColumnSpan> = Vec::new();

    for run_length in border.split_whitespace().map(str::len) {
        let mut start = spans.last().map(|span| span.end).unwrap_or(0);
        while bytes.get(start) == Some(&b' ') {
            start += 1;
        }
        spans.push(ColumnSpan {
            start,
            end: start + run_length,
        });
    }

    spans
}
