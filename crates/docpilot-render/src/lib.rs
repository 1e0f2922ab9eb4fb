//! Presentation helpers: assistant text → renderable blocks, and the
//! executive summary → downloadable markdown memo.

pub mod export;
pub mod formatter;
pub mod html;

pub use export::{export_file_name, summary_markdown, SummaryExport};
pub use formatter::{format_message, is_value_cell, Block, TableBlock, TableCell, TextLine};
pub use html::{render_html, to_html};
