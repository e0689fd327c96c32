//! Caption transcript processing
//!
//! - `timecode`: timestamp literals <-> `Timestamp`
//! - `sanitize`: strips bracketed annotations and speaker labels
//! - `chunker`: groups cues into fixed-duration windows

pub mod chunker;
pub mod sanitize;
pub mod timecode;

pub use chunker::{Chunk, ChunkConfig, Chunker, TranscriptDocument};
pub use sanitize::sanitize;
pub use timecode::{Timestamp, TimestampParseError};
