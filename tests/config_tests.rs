use anyhow::Result;
use std::time::Duration;
use transcript_digest::summary::{SummaryConfig, DEFAULT_PROMPT};
use transcript_digest::Config;

#[test]
fn test_partial_config_falls_back_to_defaults() -> Result<()> {
    let cfg = Config::from_toml(
        r#"
        [generation]
        base_url = "http://ollama:11434/api"

        [transcripts]
        chunk_duration_secs = 600
        "#,
    )?;

    assert_eq!(cfg.generation.base_url, "http://ollama:11434/api");
    assert_eq!(cfg.generation.default_model, "llama3.2:latest");
    assert_eq!(cfg.generation.timeout_secs, 120);
    assert_eq!(cfg.transcripts.default_language, "en");
    assert_eq!(cfg.service.http.port, 8080);
    assert_eq!(cfg.prompt.base_prompt, DEFAULT_PROMPT);

    let summary = SummaryConfig::from(&cfg);
    assert_eq!(summary.chunk_duration, Duration::from_secs(600));
    assert_eq!(summary.generation_timeout, Duration::from_secs(120));

    Ok(())
}

#[test]
fn test_shipped_config_file_loads() -> Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/transcript-digest");
    let cfg = Config::load(path)?;

    assert_eq!(cfg.service.name, "transcript-digest");
    assert_eq!(cfg.transcripts.chunk_duration_secs, 300);

    Ok(())
}
