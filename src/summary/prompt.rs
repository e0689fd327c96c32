use super::error::SummaryError;

/// Built-in summarization prompt
pub const DEFAULT_PROMPT: &str = "You are a helpful assistant. Your only task is to summarize this transcript fragment for me. Be concise and formal. Start with an executive summary (150 words maximum), followed by a presentation of key information found in the transcript. Extract key information, such as events, activities, places, names or other key data (financial, social, scientific or otherwise) that can help me understand what that fragment is about. Present the data points in bulletpoint format and refer to the specific speaker as well as the occurrence time when it was mentioned and who said it. Complete this task based on the fragment (from {start_time} to {end_time}).";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    StartTime,
    EndTime,
}

/// Prompt with `{start_time}` / `{end_time}` placeholders
///
/// `{{` and `}}` render as literal braces. Any other placeholder is rejected
/// at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    pub fn parse(template: &str) -> Result<Self, SummaryError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') | None => {
                                return Err(SummaryError::InvalidPrompt(
                                    "unbalanced '{' in template".to_string(),
                                ))
                            }
                            Some(c) => name.push(c),
                        }
                    }

                    let placeholder = match name.as_str() {
                        "start_time" => Segment::StartTime,
                        "end_time" => Segment::EndTime,
                        other => {
                            return Err(SummaryError::InvalidPrompt(format!(
                                "unknown placeholder {{{}}}; only {{start_time}} and {{end_time}} are supported",
                                other
                            )))
                        }
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(placeholder);
                }
                '}' => {
                    return Err(SummaryError::InvalidPrompt(
                        "single '}' in template".to_string(),
                    ))
                }
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    pub fn render(&self, start_time: &str, end_time: &str) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::StartTime => start_time,
                Segment::EndTime => end_time,
            })
            .collect()
    }
}
