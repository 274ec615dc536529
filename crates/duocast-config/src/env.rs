use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// An optional fallback can be given as `{{ env.VAR | default("value") }}`;
/// it is used when the variable is unset. Placeholders on comment lines are
/// left untouched so commented-out config does not have to resolve.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
                .expect("must be valid regex")
        })
    }

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut missing = None;
        let expanded = re().replace_all(line, |captures: &Captures| {
            let var_name = &captures[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => captures.get(2).map_or_else(
                    || {
                        missing = Some(format!("environment variable not found: `{var_name}`"));
                        String::new()
                    },
                    |default| default.as_str().to_string(),
                ),
            }
        });

        if let Some(error) = missing {
            return Err(error);
        }

        output.push_str(&expanded);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
