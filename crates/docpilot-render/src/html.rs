use crate::formatter::{format_message, Block, TableBlock, TextLine};

/// Render assistant text straight to an HTML fragment
pub fn render_html(content: &str) -> String {
    to_html(&format_message(content))
}

/// Serialize formatted blocks to an HTML fragment
///
/// Inline markup from the message is emitted as-is, matching how the
/// chat bubble renders it.
pub fn to_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Table(table) => write_table(&mut out, table),
            Block::Text { lines } => write_text(&mut out, lines),
        }
    }
    out
}

fn write_table(out: &mut String, table: &TableBlock) {
    out.push_str("<div class=\"table-wrap\"><table><thead><tr>");
    for header in &table.headers {
        out.push_str("<th>");
        out.push_str(header);
        out.push_str("</th>");
    }
    out.push_str("</tr></thead><tbody>");

    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            if cell.is_value {
                out.push_str("<td class=\"value\">");
            } else {
                out.push_str("<td>");
            }
            out.push_str(&cell.text);
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
}

fn write_text(out: &mut String, lines: &[TextLine]) {
    out.push_str("<div class=\"text\">");
    for line in lines {
        match line {
            TextLine::Spacer => out.push_str("<div class=\"spacer\"></div>"),
            TextLine::Rich(html) => {
                out.push_str("<div>");
                out.push_str(html);
                out.push_str("</div>");
            }
        }
    }
    out.push_str("</div>");
}
