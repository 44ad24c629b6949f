use std::sync::OnceLock;

use regex::Regex;

/// Expand `${env:VAR}` placeholders in a raw TOML string
///
/// A fallback for unset variables can be given as `${env:VAR:-value}`.
/// Expansion happens on the raw text before deserialization, so config
/// structs stay plain `String`/`PathBuf` fields.
pub fn expand_env(input: &str) -> Result<String, String> {
    expand_with(input, |name| std::env::var(name).ok())
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Group 1: variable name, group 2: optional `:-fallback`
    RE.get_or_init(|| {
        Regex::new(r"\$\{env:([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").expect("must be valid regex")
    })
}

fn expand_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<String, String> {
    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;

    for captures in placeholder().captures_iter(input) {
        let overall = captures.get(0).expect("capture 0 always present");
        let name = captures.get(1).expect("name group always present").as_str();
        let fallback = captures.get(2).map(|m| m.as_str());

        output.push_str(&input[last_end..overall.start()]);

        match lookup(name).as_deref().or(fallback) {
            Some(value) => output.push_str(value),
            None => return Err(format!("environment variable not set: `{name}`")),
        }

        last_end = overall.end();
    }

    output.push_str(&input[last_end..]);

    Ok(output)
}
