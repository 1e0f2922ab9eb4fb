mod transcript;

pub use transcript::{TranscriptRepository, TRANSCRIPT_STORAGE_KEY};
