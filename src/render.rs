use crate::model::Record;

const DIRECTIVE: &str = ".. csv-table::";
const HEADER_ROWS_OPTION: &str = ":header-rows: 1";

/// Renders records as an indented `csv-table` directive; the first record is the header.
pub fn render_csv_table<'a, I>(records: I, indent: usize) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let pad = " ".repeat(indent);
    let mut output = String::new();

    output.push_str(DIRECTIVE);
    output.push('\n');
    output.push_str(&pad);
    output.push_str(HEADER_ROWS_OPTION);
    output.push('\n');
    output.push('\n');

    for record in records {
        let row = record
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect::<Vec<String>>()
            .join(",");
        output.push_str(&pad);
        // Keep the lines of multi-line cells inside the directive body.
        output.push_str(&row.replace('\n', &format!("\n{pad}")));
        output.push('\n');
    }

    output
}

fn escape_csv_cell(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
