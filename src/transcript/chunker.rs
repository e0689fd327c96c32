use std::time::Duration;
use tracing::{debug, info, warn};

use super::timecode::{self, Timestamp, TimestampParseError};

/// Chunk configuration
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// Width of each time window (default: 5 minutes)
    pub chunk_duration: Duration,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_duration: Duration::from_secs(300), // 5 minutes
        }
    }
}

/// A contiguous time window of caption text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Start of the first cue absorbed by this chunk
    pub start: Timestamp,
    /// End of the last cue absorbed by this chunk
    pub end: Timestamp,
    /// Caption lines in source order, newline-joined
    pub text: String,
}

/// Ordered chunks covering a whole transcript
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptDocument {
    pub chunks: Vec<Chunk>,
}

impl TranscriptDocument {
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }
}

/// Splits a caption transcript into fixed-duration windows
///
/// Lines are fed in order; a timing line (`start --> end`) that starts at
/// least one window after the current chunk's start closes that chunk.
pub struct Chunker {
    config: ChunkConfig,
    chunks: Vec<Chunk>,
    chunk_start: Option<Timestamp>,
    chunk_end: Option<Timestamp>,
    lines: Vec<String>,
    seen_timing_line: bool,
    skipped_cues: usize,
}

impl Chunker {
    pub fn new(config: ChunkConfig) -> Self {
        Self {
            config,
            chunks: Vec::new(),
            chunk_start: None,
            chunk_end: None,
            lines: Vec::new(),
            seen_timing_line: false,
            skipped_cues: 0,
        }
    }

    /// Chunk a complete transcript
    pub fn chunk(config: ChunkConfig, transcript: &str) -> TranscriptDocument {
        let mut chunker = Self::new(config);
        for line in transcript.lines() {
            chunker.push_line(line);
        }
        chunker.finish()
    }

    /// Feed a single transcript line
    pub fn push_line(&mut self, line: &str) {
        if line.contains("-->") {
            self.seen_timing_line = true;
            match parse_timing_line(line) {
                Ok((start, end)) => self.absorb_cue(start, end),
                Err(e) => {
                    warn!("Skipping cue timing line {:?}: {}", line, e);
                    self.skipped_cues += 1;
                }
            }
            return;
        }

        let text = line.trim();
        if text.is_empty() || text.bytes().all(|b| b.is_ascii_digit()) {
            return;
        }

        // Header lines before any cue belong to no chunk
        if !self.seen_timing_line {
            debug!("Ignoring line outside any cue: {:?}", text);
            return;
        }

        self.lines.push(text.to_string());
    }

    /// Close the final chunk and return the document
    pub fn finish(mut self) -> TranscriptDocument {
        self.close_chunk();

        info!(
            "Chunking complete: {} chunks ({} cue lines skipped)",
            self.chunks.len(),
            self.skipped_cues
        );

        TranscriptDocument {
            chunks: self.chunks,
        }
    }

    fn absorb_cue(&mut self, start: Timestamp, end: Timestamp) {
        let chunk_start = *self.chunk_start.get_or_insert(start);

        if self.should_start_new_chunk(chunk_start, start) {
            self.close_chunk();
            self.chunk_start = Some(start);
        }

        self.chunk_end = Some(end);
    }

    fn should_start_new_chunk(&self, chunk_start: Timestamp, cue_start: Timestamp) -> bool {
        cue_start >= chunk_start && cue_start.since(chunk_start) >= self.config.chunk_duration
    }

    fn close_chunk(&mut self) {
        if self.lines.is_empty() {
            return;
        }

        // Text whose cues never produced a valid timing line
        let Some(start) = self.chunk_start else {
            warn!("Dropping {} caption lines without a valid cue", self.lines.len());
            self.lines.clear();
            return;
        };

        let chunk = Chunk {
            start,
            end: self.chunk_end.unwrap_or_default(),
            text: self.lines.join("\n"),
        };
        debug!(
            "Chunk {} complete: {} - {} ({} lines)",
            self.chunks.len(),
            chunk.start,
            chunk.end,
            self.lines.len()
        );

        self.chunks.push(chunk);
        self.lines.clear();
    }
}

/// Split `start --> end [cue settings]` into its two timestamps
fn parse_timing_line(line: &str) -> Result<(Timestamp, Timestamp), TimestampParseError> {
    let (start, rest) = line.split_once("-->").unwrap_or((line, ""));
    let end = rest.split_whitespace().next().unwrap_or("");

    Ok((timecode::parse(start)?, timecode::parse(end)?))
}
