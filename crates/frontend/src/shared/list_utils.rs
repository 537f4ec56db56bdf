/// Small helpers shared by the catalog list screens

/// Browser confirm dialog; `false` when there is no window
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// `value`, or `fallback` when it is missing or blank
pub fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_fallback() {
        assert_eq!(or_fallback(Some(" Poetry "), "-"), "Poetry");
        assert_eq!(or_fallback(Some("  "), "-"), "-");
        assert_eq!(or_fallback(None, "Not Specified"), "Not Specified");
    }
}
