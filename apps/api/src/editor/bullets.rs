//! Ordered bullet lists shared by experience and project entries.

/// Appends `text` trimmed. Blank input leaves the list unchanged (`None`).
pub fn push_bullet(bullets: &[String], text: &str) -> Option<Vec<String>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let mut next = bullets.to_vec();
    next.push(text.to_string());
    Some(next)
}

/// Deletes the bullet at `index`. Out-of-range indices leave the list unchanged (`None`).
pub fn remove_bullet(bullets: &[String], index: usize) -> Option<Vec<String>> {
    if index >= bullets.len() {
        return None;
    }
    let mut next = bullets.to_vec();
    next.remove(index);
    Some(next)
}

/// Splits a multi-line suggestion into bullets: one per non-empty line,
/// with a single leading list marker and surrounding whitespace removed.
pub fn parse_suggested_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| strip_marker(line.trim()).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `-` and `•` are always markers. `*` is one only when followed by
/// whitespace, so `**bold**` survives.
fn strip_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix(['-', '•']) {
        return rest;
    }
    match line.strip_prefix('*') {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest,
        _ => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_push_bullet_trims_input() {
        let next = push_bullet(&list(&["First"]), "  Second  ").unwrap();
        assert_eq!(next, list(&["First", "Second"]));
    }

    #[test]
    fn test_push_blank_bullet_is_ignored() {
        assert!(push_bullet(&list(&["First"]), "   ").is_none());
        assert!(push_bullet(&[], "").is_none());
    }

    #[test]
    fn test_remove_bullet_by_index() {
        let next = remove_bullet(&list(&["a", "b", "c"]), 1).unwrap();
        assert_eq!(next, list(&["a", "c"]));
    }

    #[test]
    fn test_remove_bullet_out_of_range() {
        assert!(remove_bullet(&list(&["a"]), 1).is_none());
        assert!(remove_bullet(&[], 0).is_none());
    }

    #[test]
    fn test_parse_strips_markers_and_blank_lines() {
        let text = "- Shipped the billing service\n\n  -   Cut p99 latency by 30%  \n• Mentored two engineers\n";
        assert_eq!(
            parse_suggested_bullets(text),
            list(&[
                "Shipped the billing service",
                "Cut p99 latency by 30%",
                "Mentored two engineers"
            ])
        );
    }

    #[test]
    fn test_parse_keeps_inner_hyphens() {
        assert_eq!(
            parse_suggested_bullets("-Built a real-time dashboard"),
            list(&["Built a real-time dashboard"])
        );
    }

    #[test]
    fn test_parse_strips_only_one_marker() {
        let text = "* Led the migration\n**Led** the rewrite\n- -1 regressions";
        assert_eq!(
            parse_suggested_bullets(text),
            list(&["Led the migration", "**Led** the rewrite", "-1 regressions"])
        );
    }

    #[test]
    fn test_parse_single_paragraph_yields_one_bullet() {
        let text = "Led cross-functional team. Implemented CI/CD.";
        assert_eq!(parse_suggested_bullets(text), list(&[text]));
    }

    #[test]
    fn test_parse_empty_response_yields_no_bullets() {
        assert!(parse_suggested_bullets(" \n \n").is_empty());
    }
}
