// SPDX-License-Identifier: Apache-2.0

/// Derives a URL slug from a human title: lowercase ASCII alphanumerics,
/// everything else collapsed into single dashes, no leading/trailing dash.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn slugify_collapses_separators_and_trims() {
        assert_eq!(
            slugify("5 Ways To Help Seniors Fight Loneliness"),
            "5-ways-to-help-seniors-fight-loneliness"
        );
        assert_eq!(slugify("  Memory Care: A Guide  "), "memory-care-a-guide");
        assert_eq!(slugify("Yoga & Wellness!!"), "yoga-wellness");
    }

    #[test]
    fn slugify_of_non_ascii_input_keeps_ascii_runs() {
        assert_eq!(slugify("Café — Dining"), "caf-dining");
        assert_eq!(slugify("***"), "");
    }
}
