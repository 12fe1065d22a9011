/// Derive a default handle from an email address.
/// Takes the local part, lowercased, stripped of anything outside
/// [a-z0-9._-]; falls back to "user" when nothing usable remains.
pub fn username_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let cleaned: String = local
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'))
        .collect();

    if cleaned.is_empty() {
        "user".to_string()
    } else {
        cleaned
    }
}

/// Capitalize the first character and lowercase the rest
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_from_email() {
        assert_eq!(username_from_email("Asha.Rao@example.com"), "asha.rao");
        assert_eq!(username_from_email("a+b@example.com"), "ab");
        assert_eq!(username_from_email(""), "user");
        assert_eq!(username_from_email("@example.com"), "user");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("ADMIN"), "Admin");
        assert_eq!(capitalize_first("coordinator"), "Coordinator");
        assert_eq!(capitalize_first(""), "");
    }
}
