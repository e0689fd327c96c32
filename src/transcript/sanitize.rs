use regex::Regex;
use std::sync::OnceLock;

/// Bracketed annotations (`[laughter]`) and uppercase speaker labels (`JOHN:`)
fn noise_regex() -> &'static Regex {
    static NOISE_REGEX: OnceLock<Regex> = OnceLock::new();
    NOISE_REGEX.get_or_init(|| {
        Regex::new(r"\[.*?\]|\b[A-Z]{2,}\b:").expect("Failed to compile caption noise regex")
    })
}

/// Strip structural noise from caption text and trim surrounding whitespace
pub fn sanitize(text: &str) -> String {
    noise_regex().replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn strips_annotations_and_speaker_labels() {
        assert_eq!(sanitize("[laughter] JOHN: hello there"), "hello there");
    }

    #[test]
    fn brackets_are_matched_non_greedily() {
        assert_eq!(sanitize("[Music] keep this [Applause]"), "keep this");
    }

    #[test]
    fn leaves_single_capitals_and_mixed_case_labels() {
        assert_eq!(sanitize("I: said Bob: hi"), "I: said Bob: hi");
    }

    #[test]
    fn labels_on_later_lines_are_removed() {
        assert_eq!(sanitize("ANNA: first\nMARK: second"), "first\n second");
    }
}
