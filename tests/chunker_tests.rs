// Integration tests for caption chunking
//
// These tests verify that cues are grouped into fixed-duration windows and
// that malformed cues are skipped without aborting the transcript.

use std::time::Duration;
use transcript_digest::transcript::{timecode, ChunkConfig, Chunker, Timestamp};

fn five_minutes() -> ChunkConfig {
    ChunkConfig::default()
}

fn ts(literal: &str) -> Timestamp {
    timecode::parse(literal).unwrap()
}

#[test]
fn test_cues_split_on_window_boundary() {
    let transcript = "WEBVTT

1
00:00:00.000 --> 00:00:03.000
first line

2
00:04:00.000 --> 00:04:02.500
second line

3
00:06:00.000 --> 00:06:04.000
third line
";

    let document = Chunker::chunk(five_minutes(), transcript);

    assert_eq!(document.len(), 2, "Should create exactly 2 chunks");

    let first = &document.chunks[0];
    assert_eq!(first.start.to_string(), "00:00:00");
    assert_eq!(first.end, ts("00:04:02.500"));
    assert_eq!(first.text, "first line\nsecond line");

    let second = &document.chunks[1];
    assert_eq!(second.start.to_string(), "00:06:00");
    assert_eq!(second.end.to_string(), "00:06:04");
    assert_eq!(second.text, "third line");
}

#[test]
fn test_bad_timing_line_is_skipped() {
    let transcript = "1
00:00:01.000 --> 00:00:02.000
kept

2
bad:value --> 00:00:05.000
still kept

3
00:00:06.000 --> 00:00:07.000
also kept
";

    let document = Chunker::chunk(five_minutes(), transcript);

    assert_eq!(document.len(), 1);
    assert_eq!(document.chunks[0].text, "kept\nstill kept\nalso kept");
    assert_eq!(document.chunks[0].end, ts("00:00:07.000"));
}

#[test]
fn test_text_of_malformed_first_cue_joins_first_chunk() {
    let transcript = "WEBVTT
Kind: captions

1
00:00:xx.000 --> 00:00:02.000
opening words

2
00:00:03.000 --> 00:00:04.000
next cue
";

    let document = Chunker::chunk(five_minutes(), transcript);

    assert_eq!(document.len(), 1);
    assert_eq!(document.chunks[0].text, "opening words\nnext cue");
    assert_eq!(document.chunks[0].start, ts("00:00:03.000"));
}

#[test]
fn test_only_malformed_cues_yield_empty_document() {
    let transcript = "WEBVTT\n\n1\nbad --> worse\norphaned text\n";

    let document = Chunker::chunk(five_minutes(), transcript);

    assert!(document.is_empty());
}

#[test]
fn test_transcript_without_timing_lines_is_empty() {
    let document = Chunker::chunk(five_minutes(), "WEBVTT\n\nNOTE nothing here\n\n42\n");
    assert!(document.is_empty());

    let document = Chunker::chunk(five_minutes(), "");
    assert!(document.is_empty());
}

#[test]
fn test_cue_indexes_and_blank_lines_are_ignored() {
    let transcript = "1\n00:00:00.000 --> 00:00:01.000\n  hello  \n\n2\n00:00:01.000 --> 00:00:02.000\n2024 was a year\n";

    let document = Chunker::chunk(five_minutes(), transcript);

    assert_eq!(document.chunks[0].text, "hello\n2024 was a year");
}

#[test]
fn test_cue_settings_and_srt_timestamps() {
    let transcript = "1
00:00:01,000 --> 00:00:02,500
srt cue

2
00:00:03.000 --> 00:00:04.000 align:start position:0%
vtt cue
";

    let document = Chunker::chunk(five_minutes(), transcript);

    assert_eq!(document.len(), 1);
    assert_eq!(document.chunks[0].start, ts("00:00:01.000"));
    assert_eq!(document.chunks[0].end, ts("00:00:04.000"));
}

#[test]
fn test_every_cue_lands_in_exactly_one_chunk() {
    // One cue every 90 seconds for an hour, 2 minute windows
    let mut transcript = String::new();
    for i in 0..40u64 {
        let start = Timestamp::from_secs(i * 90);
        let end = Timestamp::from_secs(i * 90 + 5);
        transcript.push_str(&format!("{}\n{}.000 --> {}.000\ncue {}\n\n", i + 1, start, end, i));
    }

    let config = ChunkConfig {
        chunk_duration: Duration::from_secs(120),
    };
    let document = Chunker::chunk(config, &transcript);

    let total_lines: usize = document.iter().map(|c| c.text.lines().count()).sum();
    assert_eq!(total_lines, 40);

    for pair in document.chunks.windows(2) {
        assert!(pair[0].start < pair[1].start, "Chunk starts should strictly increase");
        assert!(pair[0].start <= pair[0].end);
    }

    for chunk in document.iter() {
        for line in chunk.text.lines() {
            let index: u64 = line.trim_start_matches("cue ").parse().unwrap();
            let cue_start = Timestamp::from_secs(index * 90);
            assert!(cue_start >= chunk.start && cue_start <= chunk.end);
        }
    }
}

#[test]
fn test_timestamp_round_trip_drops_milliseconds() {
    for (literal, expected) in [
        ("00:00:00.000", "00:00:00"),
        ("00:04:59.999", "00:04:59"),
        ("01:30:05.250", "01:30:05"),
        ("12:00:00", "12:00:00"),
        ("00:59:59", "00:59:59"),
    ] {
        assert_eq!(timecode::format(Some(ts(literal))), expected);
    }
}
