pub fn expand_tilde(path: &str) -> String {
    shellexpand::tilde(path).into_owned()
}

/// Tab title for a terminal, prefixed with its icon when one is configured
pub fn format_tab_title(icon: Option<&str>, name: &str) -> String {
    match icon.filter(|i| !i.is_empty()) {
        Some(icon) => format!("{} {}", icon, name),
        None => name.to_string(),
    }
}

/// Entries of an env map rendered as `KEY=VALUE` lines
pub fn format_env_lines<'a, I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    env.into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect()
}
