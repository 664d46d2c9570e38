use std::io::{self, Write};

/// Greeting used when no name is given.
pub const DEFAULT_GREETING: &str = "Hello from Codex CLI!";

/// Build the greeting for an optional name.
///
/// An empty name counts as no name. Anything else is used exactly as given.
pub fn greet(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("Hello, {}!", name),
        _ => DEFAULT_GREETING.to_string(),
    }
}

/// Write the greeting for `name` to `out` as a single line.
pub fn write_greeting<W: Write>(out: &mut W, name: Option<&str>) -> io::Result<()> {
    writeln!(out, "{}", greet(name))
}
