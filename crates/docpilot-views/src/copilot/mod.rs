mod chat;
mod client;
mod lookup;
mod session;

pub use chat::{CopilotChat, CopilotError, CopilotSettings};
pub use client::{
    CopilotClient, CONTEXT_PREAMBLE, EMPTY_REPLY, FALLBACK_REPLY, REPLY_SOURCES,
    SYSTEM_INSTRUCTION,
};
pub use lookup::{AssetLookup, KeywordAssetLookup};
pub use session::ChatSession;
