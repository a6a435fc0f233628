pub mod hook;
pub mod message;

pub use hook::StatusInput;
pub use message::{MessageUsage, TranscriptEntry};
