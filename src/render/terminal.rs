//! Plain-terminal drawing of rendered replies.

use super::{RenderedContent, Table};

pub fn format(content: &RenderedContent) -> String {
    match content {
        RenderedContent::Table(table) => format_table(table),
        RenderedContent::Plain(text) => text.clone(),
    }
}

/// Boxed grid sized to the widest cell in each column. Short rows are
/// padded with empty cells.
pub fn format_table(table: &Table) -> String {
    let width = table
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(table.columns.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; width];
    for line in std::iter::once(&table.columns).chain(table.rows.iter()) {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border = {
        let mut s = String::from("+");
        for w in &widths {
            s.push_str(&"-".repeat(w + 2));
            s.push('+');
        }
        s
    };

    let mut out = Vec::with_capacity(table.rows.len() + 4);
    out.push(border.clone());
    out.push(format_row(&table.columns, &widths));
    out.push(border.clone());
    for row in &table.rows {
        out.push(format_row(row, &widths));
    }
    out.push(border);
    out.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::from("|");
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = w - cell.chars().count();
        s.push(' ');
        s.push_str(cell);
        s.push_str(&" ".repeat(pad + 1));
        s.push('|');
    }
    s
}
