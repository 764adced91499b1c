//! Row rendering.
//!
//! A row is a label cell followed by one value cell per entity, each cell
//! preceded by a tab, and always terminated by exactly one `\n`. A row over
//! an empty list is just the label and the terminator, so every block keeps
//! its shape whether or not there is data.
//!
//! A cell containing a tab, a line break or a double quote is wrapped in
//! double quotes with embedded quotes doubled, so it still reads back as a
//! single cell.

use std::borrow::Cow;

use super::attributes::Section;

/// Separator between cells
pub const COLUMN_SEPARATOR: char = '\t';

/// Row terminator, independent of platform
pub const LINE_TERMINATOR: char = '\n';

/// Separator between several values sharing one cell
pub const VALUE_SEPARATOR: char = ';';

/// Quote character of cells that need quoting
pub const QUOTE: char = '"';

/// Quote `value` if it contains a separator, a line break or a quote
pub fn quote_cell(value: &str) -> Cow<'_, str> {
    if !value.contains(&[COLUMN_SEPARATOR, LINE_TERMINATOR, '\r', QUOTE][..]) {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(QUOTE);
    for c in value.chars() {
        if c == QUOTE {
            quoted.push(QUOTE);
        }
        quoted.push(c);
    }
    quoted.push(QUOTE);
    Cow::Owned(quoted)
}

/// Append one cell to `row`, quoted when needed
pub(crate) fn push_cell(row: &mut String, value: &str) {
    row.push_str(&quote_cell(value));
}

/// Render a row with one cell per item
///
/// `extract` maps each item to its cell; `None` becomes an empty cell.
pub fn format_row<'a, T, S, F>(label: &str, items: &'a [T], mut extract: F) -> String
where
    F: FnMut(&'a T) -> Option<S>,
    S: AsRef<str>,
{
    let mut row = String::with_capacity(label.len() + items.len() * 16 + 1);
    push_cell(&mut row, label);
    for item in items {
        row.push(COLUMN_SEPARATOR);
        if let Some(value) = extract(item) {
            push_cell(&mut row, value.as_ref());
        }
    }
    row.push(LINE_TERMINATOR);
    row
}

/// Render a single-valued row
pub fn format_scalar(label: &str, value: Option<&str>) -> String {
    let value = value.unwrap_or_default();
    let mut row = String::with_capacity(label.len() + value.len() + 2);
    push_cell(&mut row, label);
    row.push(COLUMN_SEPARATOR);
    push_cell(&mut row, value);
    row.push(LINE_TERMINATOR);
    row
}

/// Render a section heading row
pub fn format_heading(section: Section) -> String {
    let mut row = String::from(section.label());
    row.push(LINE_TERMINATOR);
    row
}

/// Join values into one cell with [`VALUE_SEPARATOR`]
pub(crate) fn join_values<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cell = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            cell.push(VALUE_SEPARATOR);
        }
        cell.push_str(value.as_ref());
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_with_missing_values() {
        let items = [Some("a"), None, Some("c")];
        let row = format_row("Label", &items, |v| *v);
        assert_eq!(row, "Label\ta\t\tc\n");
    }

    #[test]
    fn test_row_over_empty_list() {
        let items: [&str; 0] = [];
        let row = format_row("Term Source Name", &items, |v| Some(*v));
        assert_eq!(row, "Term Source Name\n");
    }

    #[test]
    fn test_row_with_owned_cells() {
        let items = [1, 2, 3];
        let row = format_row("N", &items, |n| Some(format!("#{}", n)));
        assert_eq!(row, "N\t#1\t#2\t#3\n");
    }

    #[test]
    fn test_scalar() {
        assert_eq!(format_scalar("Investigation Title", Some("T")), "Investigation Title\tT\n");
        assert_eq!(format_scalar("Investigation Title", None), "Investigation Title\t\n");
    }

    #[test]
    fn test_cells_with_separators_are_quoted() {
        let items = ["Doe\tX", "Smith"];
        let row = format_row("Investigation Person Last Name", &items, |v| Some(*v));
        assert_eq!(row, "Investigation Person Last Name\t\"Doe\tX\"\tSmith\n");

        let row = format_scalar("Investigation Title", Some("line1\nline2"));
        assert_eq!(row, "Investigation Title\t\"line1\nline2\"\n");
    }

    #[test]
    fn test_quote_cell() {
        assert_eq!(quote_cell("plain"), "plain");
        assert!(matches!(quote_cell("plain"), Cow::Borrowed(_)));
        assert_eq!(quote_cell("a \"b\" c"), "\"a \"\"b\"\" c\"");
        assert_eq!(quote_cell("a\r\nb"), "\"a\r\nb\"");
        assert_eq!(quote_cell(""), "");
    }

    #[test]
    fn test_heading() {
        assert_eq!(format_heading(Section::Study), "STUDY\n");
    }

    #[test]
    fn test_join_values() {
        assert_eq!(join_values(["a", "", "c"]), "a;;c");
        assert_eq!(join_values(Vec::<String>::new()), "");
    }
}
