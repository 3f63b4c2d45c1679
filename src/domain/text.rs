use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` so that it fits into `width` terminal columns, appending `…` when cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }
    if s.width() <= width {
        return s.to_string();
    }

    // Reserve one column for the ellipsis
    let budget = width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Text-initial avatar placeholder: first letter of up to two words, upper-cased.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        String::from("?")
    } else {
        letters
    }
}
