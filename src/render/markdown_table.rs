use super::{Table, TableSource};

/// Parse a markdown pipe table: header line with `|`, a `---` separator line,
/// then at least one body row.
pub fn markdown_table(text: &str) -> Option<Table> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 || !lines[0].contains('|') || !lines[1].contains("---") {
        return None;
    }

    let columns = split_cells(lines[0]);
    if columns.is_empty() {
        return None;
    }

    let rows: Vec<Vec<String>> = lines[2..]
        .iter()
        .map(|line| split_cells(line))
        .filter(|cells| !cells.is_empty())
        .collect();
    if rows.is_empty() {
        return None;
    }

    Some(Table {
        source: TableSource::Markdown,
        columns,
        rows,
    })
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_pipes_and_blank_lines_ignored() {
        let text = "\n| State | Rate |\n|---|---|\n\n| Gujarat | 45.2 |\n| Rajasthan | 28.7 |\n";
        let table = markdown_table(text).unwrap();
        assert_eq!(table.columns, vec!["State", "Rate"]);
        assert_eq!(
            table.rows,
            vec![vec!["Gujarat", "45.2"], vec!["Rajasthan", "28.7"]]
        );
    }

    #[test]
    fn test_requires_separator_line() {
        assert!(markdown_table("a | b\nc | d").is_none());
        assert!(markdown_table("a | b\n-- | --\nc | d").is_none());
    }

    #[test]
    fn test_requires_pipe_in_header() {
        assert!(markdown_table("Heading\n-----\nbody | row").is_none());
    }

    #[test]
    fn test_requires_body_rows() {
        assert!(markdown_table("a | b\n---|---").is_none());
        assert!(markdown_table("a | b\n---|---\n | ").is_none());
    }

    #[test]
    fn test_empty_header_rejected() {
        assert!(markdown_table(" | \n---\nx | y").is_none());
    }
}
