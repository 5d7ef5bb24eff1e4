use super::*;

fn parser() -> TableParser {
    TableParser::new(ParseOptions::default()).expect("parser should build")
}

fn record(cells: &[&str]) -> Record {
    cells.iter().map(|cell| cell.to_string()).collect()
}

#[test]
fn parse_basic_table_into_header_and_body() {
    let text = "=== =====\naaa bbbbb\n=== =====\naaa ccccc\nzzz dddd\n=== =====\n";

    let table = parser().parse(text).expect("table should parse");

    assert_eq!(table.border, "=== =====");
    assert_eq!(table.header, record(&["aaa", "bbbbb"]));
    assert_eq!(
        table.body,
        vec![record(&["aaa", "ccccc"]), record(&["zzz", "dddd"])]
    );
    assert_eq!(table.records().count(), 3);
    assert_eq!(table.dropped_rows, 0);
}

#[test]
fn blank_lines_and_trailing_spaces_are_ignored() {
    let text = "\n=== ===   \n\nkey val\n=== ===\n\n  \none two  \n=== ===\n\n";

    let table = parser().parse(text).expect("table should parse");

    assert_eq!(table.header, record(&["key", "val"]));
    assert_eq!(table.body, vec![record(&["one", "two"])]);
}

#[test]
fn too_few_lines_are_rejected() {
    let err = parser()
        .parse("=== ===\na   b\n=== ===\n=== ===\n")
        .expect_err("four lines");
    assert_eq!(err, FormatError::TooFewLines { found: 4 });
}

#[test]
fn first_line_must_be_a_border() {
    let err = parser()
        .parse("a   b\n=== ===\nc   d\n=== ===\ne   f\n=== ===\n")
        .expect_err("no top border");
    assert_eq!(err, FormatError::MalformedBorder { line: 1 });

    let err = parser()
        .parse("=======\na\n=======\nb\n=======\n")
        .expect_err("single column border");
    assert_eq!(err, FormatError::MalformedBorder { line: 1 });
}

#[test]
fn adjacent_borders_are_rejected() {
    let err = parser()
        .parse("=== ===\n=== ===\na   b\nc   d\n=== ===\n")
        .expect_err("empty header block");
    assert_eq!(err, FormatError::AdjacentBorders { line: 2 });
}

#[test]
fn last_line_must_be_the_border() {
    let err = parser()
        .parse("=== ===\na   b\n=== ===\nc   d\ne   f\n")
        .expect_err("missing bottom border");
    assert_eq!(err, FormatError::MissingBottomBorder { line: 5 });
}

#[test]
fn exactly_three_borders_are_required() {
    let two = "=== ===\na   b\nc   d\ne   f\n=== ===\n";
    assert_eq!(
        parser().parse(two).expect_err("two borders"),
        FormatError::BorderCount { found: 2 }
    );

    let four = "=== ===\na   b\n=== ===\nc   d\n=== ===\ne   f\n=== ===\n";
    assert_eq!(
        parser().parse(four).expect_err("four borders"),
        FormatError::BorderCount { found: 4 }
    );
}

#[test]
fn column_spans_follow_border_runs() {
    assert_eq!(
        column_spans("=== ====="),
        vec![
            ColumnSpan { start: 0, end: 3 },
            ColumnSpan { start: 4, end: 9 },
        ]
    );
    assert_eq!(
        column_spans("==  ===   ="),
        vec![
            ColumnSpan { start: 0, end: 2 },
            ColumnSpan { start: 4, end: 7 },
            ColumnSpan { start: 10, end: 11 },
        ]
    );
}

#[test]
fn column_count_matches_border_groups() {
    let text = "== === ====\na  b   c\n== === ====\nd  e   f\n== === ====\n";

    let table = parser().parse(text).expect("table should parse");

    assert_eq!(table.column_count(), 3);
    assert!(table.records().all(|record| record.len() == 3));
}

#[test]
fn wide_characters_count_two_columns() {
    let text = "=== =====\naaa bbbbb\n=== =====\nあa いうd\n=== =====\n";

    let table = parser().parse(text).expect("table should parse");

    assert_eq!(table.body, vec![record(&["あa", "いうd"])]);
}

#[test]
fn wide_character_never_splits_across_columns() {
    assert_eq!(display_width("あいa"), 5);
    assert_eq!(slice_display_columns("あいa xyz", 0, 5), "あいa");
    assert_eq!(slice_display_columns("aあb", 0, 2), "aあ");
    assert_eq!(slice_display_columns("aあb", 2, 4), "b");
}

#[test]
fn last_column_keeps_overflowing_text() {
    let text = "=== ===\nkey val\n=== ===\nabc a much longer value\n=== ===\n";

    let table = parser().parse(text).expect("table should parse");

    assert_eq!(table.body, vec![record(&["abc", "a much longer value"])]);
}

#[test]
fn short_rows_yield_empty_cells() {
    let text = "=== === ===\na   b   c\n=== === ===\nx\n=== === ===\n";

    let table = parser().parse(text).expect("table should parse");

    assert_eq!(table.body, vec![record(&["x", "", ""])]);
}

#[test]
fn backslash_cell_becomes_single_space() {
    let text = "=== ===\nkey val\n=== ===\n\\   one\nabc \\\n=== ===\n";

    let table = parser().parse(text).expect("table should parse");

    assert_eq!(
        table.body,
        vec![record(&[" ", "one"]), record(&["abc", " "])]
    );
}

#[test]
fn continuation_rows_merge_into_previous_record() {
    let text = "=== ===== ===\nkey value note\n=== ===== ===\nbar baz\n    foo   n1\nqux quux\n=== ===== ===\n";

    let table = parser().parse(text).expect("table should parse");

    assert_eq!(
        table.body,
        vec![
            record(&["bar", "| baz\n| foo", "n1"]),
            record(&["qux", "quux", ""]),
        ]
    );
}

#[test]
fn leading_continuation_rows_are_dropped() {
    let text = "=== ===\nkey val\n=== ===\n    foo\nbar baz\n=== ===\n";

    let table = parser().parse(text).expect("table should parse");

    assert_eq!(table.body, vec![record(&["bar", "baz"])]);
    assert_eq!(table.dropped_rows, 1);
}

#[test]
fn merge_group_keeps_single_values_unprefixed() {
    let group = vec![record(&["a", "", "x"]), record(&["", "", "y"]), record(&["", "z", ""])];

    let merged = merge_group(group, 3);

    assert_eq!(merged, record(&["a", "z", "| x\n| y"]));

    let group = vec![record(&["a", ""]), record(&["", ""])];
    assert_eq!(merge_group(group, 2), record(&["a", ""]));
}

#[test]
fn only_first_header_line_is_used() {
    let text = "=== ===\nkey val\nsub sub2\n=== ===\na   b\n=== ===\n";

    let table = parser().parse(text).expect("table should parse");

    assert_eq!(table.header, record(&["key", "val"]));
    assert_eq!(table.body, vec![record(&["a", "b"])]);
}

#[test]
fn normalization_is_idempotent() {
    let text = "  === ===  \n\n  key val\n\t\n  === ===\n";

    for trim in [LineTrim::Trailing, LineTrim::Both, LineTrim::Dedent] {
        let once = normalize_lines(text, trim);
        let twice = normalize_lines(&once.join("\n"), trim);
        assert_eq!(once, twice, "trim policy {}", trim.as_str());
    }
}

#[test]
fn trailing_trim_keeps_leading_spaces() {
    let lines = normalize_lines("  === ===  \n    x\n", LineTrim::Trailing);
    assert_eq!(lines, vec!["  === ===".to_string(), "    x".to_string()]);

    let lines = normalize_lines("  === ===  \n    x\n", LineTrim::Dedent);
    assert_eq!(lines, vec!["=== ===".to_string(), "  x".to_string()]);

    let lines = normalize_lines("  === ===  \n    x\n", LineTrim::Both);
    assert_eq!(lines, vec!["=== ===".to_string(), "x".to_string()]);
}

#[test]
fn indented_table_parses_against_absolute_border_offsets() {
    let text = "  === =====\n  aaa bbbbb\n  === =====\n  aaa ccccc\n      ddddd\n  === =====\n";

    let table = parser().parse(text).expect("indented table should parse");

    assert_eq!(
        table.columns,
        vec![
            ColumnSpan { start: 2, end: 5 },
            ColumnSpan { start: 6, end: 11 },
        ]
    );
    assert_eq!(table.header, record(&["aaa", "bbbbb"]));
    assert_eq!(table.body, vec![record(&["aaa", "| ccccc\n| ddddd"])]);

    let dedent = TableParser::new(ParseOptions {
        trim: LineTrim::Dedent,
    })
    .expect("parser should build");
    let table = dedent.parse(text).expect("dedented table should parse");
    assert_eq!(table.columns[0], ColumnSpan { start: 0, end: 3 });
    assert_eq!(table.body, vec![record(&["aaa", "| ccccc\n| ddddd"])]);
}

#[test]
fn rows_indented_differently_from_border_are_sliced_positionally() {
    let text = "  === ===\n  key val\n  === ===\n  abc def\n    c xyz\nabc def\n  === ===\n";

    let table = parser().parse(text).expect("table should parse");

    assert_eq!(
        table.body,
        vec![
            record(&["abc", "def"]),
            record(&["  c", "xyz"]),
            record(&["c d", "f"]),
        ]
    );
}
