mod citation;
mod error;
mod room;
mod summarizer;

pub use citation::{CitationIndex, BULLET_CITATION_TITLE, UNKNOWN_REFERENCE};
pub use error::{DraftingError, Result};
pub use room::{DraftingRoom, DraftingSettings, DraftingSnapshot};
pub use summarizer::{summary_prompt, summary_schema, SummaryGenerator, INVALID_RESPONSE_FORMAT};
