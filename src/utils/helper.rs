/// Canonical watch URL for a broadcaster
pub fn watch_url(user_name: &str) -> String {
    format!("https://twitch.tv/{}", user_name)
}

/// Truncate a string to a maximum length
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
