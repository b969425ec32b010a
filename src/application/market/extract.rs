//! Locate the JSON payload inside free-text model output.

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Extract the payload from a model response.
///
/// Tried in order:
/// 1. the interior of the first fenced block tagged `json`;
/// 2. the interior of the first fenced block of any kind;
/// 3. the whole response.
///
/// Interiors are trimmed of surrounding whitespace. A fence without a
/// closing fence does not count as a block.
#[must_use]
pub fn extract_payload(text: &str) -> &str {
    fenced_interior(text, JSON_FENCE)
        .or_else(|| fenced_interior(text, FENCE))
        .unwrap_or(text)
}

fn fenced_interior<'a>(text: &'a str, opening: &str) -> Option<&'a str> {
    let start = text.find(opening)? + opening.len();
    let body = text[start..].trim_start();
    let end = body.find(FENCE)?;
    Some(body[..end].trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_json_tagged_block() {
        let text = "prefix ```json\n[{\"a\":1}]\n``` suffix";
        assert_eq!(extract_payload(text), "[{\"a\":1}]");
    }

    #[test]
    fn takes_untagged_block() {
        let text = "Here you go:\n```\n[{\"a\":1}]\n```\nThanks";
        assert_eq!(extract_payload(text), "[{\"a\":1}]");
    }

    #[test]
    fn falls_back_to_whole_text() {
        assert_eq!(extract_payload("[{\"a\":1}]"), "[{\"a\":1}]");
    }

    #[test]
    fn json_block_wins_over_earlier_generic_block() {
        let text = "```\nnot this\n```\n```json\n[1]\n```";
        assert_eq!(extract_payload(text), "[1]");
    }

    #[test]
    fn unclosed_fence_falls_through() {
        let text = "```json\n[{\"a\":1}]";
        assert_eq!(extract_payload(text), text);
    }

    #[test]
    fn empty_block_yields_empty_payload() {
        assert_eq!(extract_payload("```json\n```"), "");
    }

    #[test]
    fn extraction_is_repeatable() {
        let text = "```json\n{\"k\": true}\n```";
        assert_eq!(extract_payload(text), extract_payload(text));
    }
}
