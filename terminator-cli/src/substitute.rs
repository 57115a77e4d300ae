use anyhow::Result;
use regex::Regex;

use crate::config::EnvMap;

const PLACEHOLDER_PATTERN: &str = r"\$\{([^}]*)\}";

enum Segment<'a> {
    /// Text from the template, still open for substitution
    Template(String),
    /// A substituted value, never scanned again
    Inserted(&'a str),
}

/// Substitute `${name}` placeholders in an optional template.
///
/// A missing template is passed through untouched.
pub fn substitute(template: Option<&str>, vars: &EnvMap) -> Option<String> {
    template.map(|t| substitute_str(t, vars))
}

/// Replace the first `${key}` occurrence for every key of `vars`.
///
/// Keys are applied in map order. Only template text is searched: values
/// inserted for earlier keys are not rescanned. Placeholders without a
/// matching key are left as they are, and later occurrences of a key that
/// was already replaced stay verbatim.
pub fn substitute_str(template: &str, vars: &EnvMap) -> String {
    let mut segments = vec![Segment::Template(template.to_string())];

    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);

        let hit = segments
            .iter()
            .enumerate()
            .find_map(|(index, segment)| match segment {
                Segment::Template(text) => text.find(&placeholder).map(|pos| (index, pos)),
                Segment::Inserted(_) => None,
            });

        let Some((index, pos)) = hit else {
            continue;
        };

        let (before, after) = match &segments[index] {
            Segment::Template(text) => (
                text[..pos].to_string(),
                text[pos + placeholder.len()..].to_string(),
            ),
            Segment::Inserted(_) => continue,
        };

        segments.splice(
            index..=index,
            [
                Segment::Template(before),
                Segment::Inserted(value.as_str()),
                Segment::Template(after),
            ],
        );
    }

    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Template(text) => text,
            Segment::Inserted(value) => value.to_string(),
        })
        .collect()
}

/// Names of all `${name}` placeholders in `text`, in order of appearance
pub fn unresolved_placeholders(text: &str) -> Result<Vec<String>> {
    let regex = Regex::new(PLACEHOLDER_PATTERN)?;
    Ok(regex
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect())
}
