use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Header row, separator row, then one or more data rows
static TABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\|(?:[^\n|]+\|)+\n\|(?:[\s\-:|]+\|)+\n(?:\|(?:[^\n|]+\|)+\n*)+)")
        .expect("Invalid regex pattern for markdown tables")
});

static LEADING_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d").expect("Invalid regex pattern for numeric cells"));

/// Inline substitutions, applied in this order
static INLINE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\*\*(.*?)\*\*", "<strong>${1}</strong>"),
        (r"\*(.*?)\*", "<em>${1}</em>"),
        (r"^### (.*)$", "<h3>${1}</h3>"),
        (r"^## (.*)$", "<h2>${1}</h2>"),
        (r"^- (.*)$", "<li>${1}</li>"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("Invalid regex pattern for inline markdown"),
            replacement,
        )
    })
    .collect()
});

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Table(TableBlock),
    Text { lines: Vec<TextLine> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableBlock {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<TableCell>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub text: String,
    /// Figures (currency, percentages, numbers) get a heavier weight
    pub is_value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "html", rename_all = "snake_case")]
pub enum TextLine {
    Spacer,
    Rich(String),
}

/// Split `content` into table and text blocks, in source order
///
/// Segments that are empty or only whitespace produce no block.
pub fn format_message(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    for table in TABLE_REGEX.find_iter(content) {
        push_text(&mut blocks, &content[cursor..table.start()]);
        blocks.push(parse_table_segment(table.as_str()));
        cursor = table.end();
    }
    push_text(&mut blocks, &content[cursor..]);

    blocks
}

/// True for cells holding a figure: `$`, `%`, or a leading (negative) digit
pub fn is_value_cell(cell: &str) -> bool {
    cell.contains('$') || cell.contains('%') || LEADING_NUMBER_REGEX.is_match(cell)
}

fn push_text(blocks: &mut Vec<Block>, segment: &str) {
    if !segment.trim().is_empty() {
        blocks.push(text_block(segment));
    }
}

fn parse_table_segment(segment: &str) -> Block {
    let trimmed = segment.trim();
    let lines: Vec<&str> = trimmed.split('\n').collect();

    if !trimmed.starts_with('|') || !trimmed.contains("\n|") || lines.len() < 3 {
        return text_block(segment);
    }

    let headers = split_cells(lines[0], false)
        .into_iter()
        .map(|cell| strip_emphasis(&cell))
        .collect();

    let rows = lines[2..]
        .iter()
        .map(|line| {
            split_cells(line, line.contains("| |"))
                .into_iter()
                .map(|cell| {
                    let text = strip_emphasis(&cell);
                    TableCell {
                        is_value: is_value_cell(&text),
                        text,
                    }
                })
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect();

    Block::Table(TableBlock { headers, rows })
}

/// Cells between the outer pipes, trimmed
///
/// Blank cells are dropped unless `keep_blank` is set, which keeps a lone
/// empty cell in its column.
fn split_cells(line: &str, keep_blank: bool) -> Vec<String> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);

    inner
        .split('|')
        .map(str::trim)
        .filter(|cell| keep_blank || !cell.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_emphasis(cell: &str) -> String {
    cell.replace("**", "").replace('*', "")
}

fn text_block(segment: &str) -> Block {
    let lines = segment
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                TextLine::Spacer
            } else {
                TextLine::Rich(apply_inline(line))
            }
        })
        .collect();

    Block::Text { lines }
}

fn apply_inline(line: &str) -> String {
    INLINE_RULES
        .iter()
        .fold(line.to_string(), |acc, (regex, replacement)| {
            regex.replace_all(&acc, *replacement).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(block: &Block) -> &TableBlock {
        match block {
            Block::Table(table) => table,
            other => panic!("Expected table block, got {:?}", other),
        }
    }

    fn rich_lines(block: &Block) -> Vec<&str> {
        match block {
            Block::Text { lines } => lines
                .iter()
                .filter_map(|line| match line {
                    TextLine::Rich(html) => Some(html.as_str()),
                    TextLine::Spacer => None,
                })
                .collect(),
            other => panic!("Expected text block, got {:?}", other),
        }
    }

    #[test]
    fn test_single_table_between_text() {
        let content = "Here is the data:\n\n| Asset | Q/Q |\n|---|---|\n| **REIT** | -12.4% |\n| Bond | $8.4M |\n\nSummary follows.";
        let blocks = format_message(content);

        assert_eq!(blocks.len(), 3);
        assert_eq!(rich_lines(&blocks[0]), vec!["Here is the data:"]);

        let table = table(&blocks[1]);
        assert_eq!(table.headers, vec!["Asset", "Q/Q"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0].text, "REIT");
        assert!(!table.rows[0][0].is_value);
        assert!(table.rows[0][1].is_value);
        assert_eq!(table.rows[1][1].text, "$8.4M");

        assert_eq!(rich_lines(&blocks[2]), vec!["Summary follows."]);
    }

    #[test]
    fn test_header_emphasis_stripped() {
        let blocks = format_message("| **Month** | *Value* |\n|:---|---:|\n| Jan | 12 |\n");
        assert_eq!(table(&blocks[0]).headers, vec!["Month", "Value"]);
    }

    #[test]
    fn test_lone_blank_cell_keeps_alignment() {
        let blocks = format_message("| Month | Value |\n|---|---|\n| Jan | $12.0M |\n| Feb | |\n");
        let table = table(&blocks[0]);

        assert_eq!(table.rows[1].len(), 2);
        assert_eq!(table.rows[1][0].text, "Feb");
        assert_eq!(table.rows[1][1].text, "");
        assert!(!table.rows[1][1].is_value);
    }

    #[test]
    fn test_value_cells() {
        assert!(is_value_cell("-12.4%"));
        assert!(is_value_cell("$25.0M"));
        assert!(is_value_cell("42 bps"));
        assert!(is_value_cell("-3"));
        assert!(!is_value_cell("Equity"));
        assert!(!is_value_cell("Q2"));
        assert!(!is_value_cell(""));
    }

    #[test]
    fn test_inline_substitutions() {
        let blocks = format_message("## Overview\n### Detail\n- **$12.5M** under *management*\n\nplain");
        let lines = match &blocks[0] {
            Block::Text { lines } => lines.clone(),
            other => panic!("Expected text block, got {:?}", other),
        };

        assert_eq!(
            lines,
            vec![
                TextLine::Rich("<h2>Overview</h2>".to_string()),
                TextLine::Rich("<h3>Detail</h3>".to_string()),
                TextLine::Rich("<li><strong>$12.5M</strong> under <em>management</em></li>".to_string()),
                TextLine::Spacer,
                TextLine::Rich("plain".to_string()),
            ]
        );
    }

    #[test]
    fn test_plain_text_single_block() {
        let blocks = format_message("No tables | here");
        assert_eq!(blocks.len(), 1);
        assert_eq!(rich_lines(&blocks[0]), vec!["No tables | here"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(format_message("").is_empty());
        assert!(format_message("  \n ").is_empty());
    }

    #[test]
    fn test_two_tables_in_order() {
        let content = "| A | B |\n|---|---|\n| 1 | 2 |\n\nbetween\n\n| C | D |\n|---|---|\n| x | y |\n";
        let blocks = format_message(content);

        assert_eq!(blocks.len(), 3);
        assert_eq!(table(&blocks[0]).headers, vec!["A", "B"]);
        assert_eq!(rich_lines(&blocks[1]), vec!["between"]);
        assert_eq!(table(&blocks[2]).headers, vec!["C", "D"]);
    }
}
