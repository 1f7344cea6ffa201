use qwerty_core::ConversionResult;

/// Renders a conversion result for the command line
pub struct OutputFormatter {
    json: bool,
    line_width: usize,
}

impl OutputFormatter {
    pub fn new(json: bool, line_width: usize) -> Self {
        Self { json, line_width }
    }

    pub fn build_output(&self, result: &ConversionResult) -> String {
        if self.json {
            return result.to_json().unwrap_or_else(|e| {
                log::error!("Error serializing to JSON: {}", e);
                "{}".to_string()
            });
        }
        self.wrap(&result.text)
    }

    /// Break key text into lines of at most `line_width` characters.
    ///
    /// Chords are never split across lines. A width of 0 disables wrapping.
    fn wrap(&self, text: &str) -> String {
        if self.line_width == 0 || text.len() <= self.line_width {
            return text.to_string();
        }

        let mut lines: Vec<String> = Vec::new();
        let mut line = String::new();

        for token in tokens(text) {
            if !line.is_empty() && line.len() + token.len() > self.line_width {
                lines.push(std::mem::take(&mut line));
            }
            line.push_str(token);
        }
        if !line.is_empty() {
            lines.push(line);
        }

        lines.join("\n")
    }
}

/// Split key text into single keys and whole `[...]` chords
fn tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_chord = false;

    for (i, ch) in text.char_indices() {
        match ch {
            '[' => {
                in_chord = true;
                start = i;
            }
            ']' => {
                in_chord = false;
                tokens.push(&text[start..=i]);
            }
            _ if !in_chord => tokens.push(&text[i..i + ch.len_utf8()]),
            _ => {}
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str) -> ConversionResult {
        ConversionResult {
            bpm: 120.0,
            text: text.to_string(),
            note_count: 0,
            unit_count: 0,
        }
    }

    #[test]
    fn test_plain_output() {
        let formatter = OutputFormatter::new(false, 0);
        assert_eq!(formatter.build_output(&result("[12]q")), "[12]q");
    }

    #[test]
    fn test_tokens() {
        assert_eq!(tokens("a[bc]d"), vec!["a", "[bc]", "d"]);
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_wrap_keeps_chords_whole() {
        let formatter = OutputFormatter::new(false, 4);
        assert_eq!(
            formatter.build_output(&result("ab[cde]fgh")),
            "ab\n[cde]\nfgh"
        );
    }

    #[test]
    fn test_json_output() {
        let formatter = OutputFormatter::new(true, 4);
        let out = formatter.build_output(&result("abcdefgh"));
        let parsed: ConversionResult = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.text, "abcdefgh");
        assert_eq!(parsed.bpm, 120.0);
    }
}
