/// Isolate the best-guess JSON payload from a raw model response.
///
/// Strips wrapping code fences (with or without a language tag) and
/// surrounding whitespace. Internal JSON syntax is left untouched. Repeats
/// until no leading fence remains, which makes the operation idempotent.
pub fn extract_payload(raw: &str) -> String {
    let mut text = raw.trim();
    while let Some(stripped) = strip_code_fence(text) {
        text = stripped;
    }
    text.to_string()
}

fn strip_code_fence(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("```")?;
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        // fence and payload share a line; the language tag hugs the backticks
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    let body = body.trim_end();
    Some(body.strip_suffix("```").unwrap_or(body).trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_fenced_json_with_tag() {
        let raw = "```json\n{\"summary\":\"Hi\"}\n```";
        assert_eq!(extract_payload(raw), "{\"summary\":\"Hi\"}");
    }

    #[test]
    fn test_extract_fenced_json_without_tag() {
        let raw = "```\n{\"summary\":\"Hi\"}\n```";
        assert_eq!(extract_payload(raw), "{\"summary\":\"Hi\"}");
    }

    #[test]
    fn test_extract_single_line_fence() {
        assert_eq!(extract_payload("```json{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn test_extract_unfenced_passthrough() {
        assert_eq!(extract_payload("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(extract_payload("plain prose"), "plain prose");
    }

    #[test]
    fn test_extract_unterminated_fence() {
        assert_eq!(extract_payload("```json\n{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_extract_is_idempotent() {
        let inputs = [
            "```json\n{\"summary\":\"Hi\"}\n```",
            "plain prose",
            "",
            "```\n```json\nhi\n```",
            "``````",
            "no fence\n```json\ninner\n```",
        ];
        for input in inputs {
            let once = extract_payload(input);
            assert_eq!(extract_payload(&once), once, "input: {input:?}");
        }
    }
}
