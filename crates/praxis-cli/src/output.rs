use serde::Serialize;

/// Write `value` to stdout as JSON: two-space indented, or a single line
/// when `compact` is set.
pub fn print_document<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{text}");
    Ok(())
}
