use anyhow::Context;
use praxis_core::request::{InputFormat, Request};
use std::io::Read;
use std::path::Path;

/// Read a request file. Without an explicit format the extension decides
/// (`.yaml`/`.yml` → YAML, otherwise JSON then YAML).
pub fn read_file(path: &Path, format: Option<InputFormat>) -> anyhow::Result<Request> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request {}", path.display()))?;
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    Request::parse(&data, format)
        .with_context(|| format!("failed to parse request {}", path.display()))
}

/// Read a request from stdin. Blank input yields the default morning request.
pub fn read_stdin(format: Option<InputFormat>) -> anyhow::Result<Request> {
    let mut data = String::new();
    std::io::stdin()
        .read_to_string(&mut data)
        .context("failed to read request from stdin")?;
    parse_or_default(&data, format.unwrap_or_default())
}

fn parse_or_default(data: &str, format: InputFormat) -> anyhow::Result<Request> {
    if data.trim().is_empty() {
        tracing::debug!("empty input; using default MorningPraxis request");
        return Ok(Request::default());
    }
    Request::parse(data, format).context("failed to parse request from stdin")
}
