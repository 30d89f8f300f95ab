//! Answer style directives.
//!
//! Each style maps to one fixed natural-language instruction sentence
//! appended to the prompt, and a fixed label shown in the style selector.

use std::fmt;

/// The selectable answer formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerStyle {
    #[default]
    Teacher,
    Summary,
    Examples,
    Bullets,
}

impl AnswerStyle {
    pub const ALL: [AnswerStyle; 4] = [
        AnswerStyle::Teacher,
        AnswerStyle::Summary,
        AnswerStyle::Examples,
        AnswerStyle::Bullets,
    ];

    /// Display label, as shown in the style selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Teacher => "Answer like a teacher",
            Self::Summary => "Summarize the answer",
            Self::Examples => "Add examples",
            Self::Bullets => "Use bullet points",
        }
    }

    /// The fixed instruction sentence embedded in the prompt.
    pub fn instruction(self) -> &'static str {
        match self {
            Self::Teacher => {
                "Explain the answer in a teaching style, as if instructing a student. \
                 Break down complex concepts into simpler terms and provide clear explanations."
            }
            Self::Summary => {
                "Provide a concise summary of the answer, focusing on the key points \
                 and main ideas. Keep it brief but comprehensive."
            }
            Self::Examples => {
                "Include relevant, practical examples to illustrate the answer. \
                 Use real-world scenarios to demonstrate the concept."
            }
            Self::Bullets => {
                "Present the answer using clear, organized bullet points. \
                 Structure the information for easy readability."
            }
        }
    }

    /// Parse a user-supplied selector: the full label or a one-word alias.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "teacher" => Some(Self::Teacher),
            "summary" | "summarize" => Some(Self::Summary),
            "examples" => Some(Self::Examples),
            "bullets" => Some(Self::Bullets),
            _ => Self::ALL
                .iter()
                .copied()
                .find(|s| s.label().to_ascii_lowercase() == normalized),
        }
    }
}

impl fmt::Display for AnswerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_teacher() {
        assert_eq!(AnswerStyle::default(), AnswerStyle::Teacher);
    }

    #[test]
    fn parse_accepts_aliases_and_labels() {
        assert_eq!(AnswerStyle::parse("teacher"), Some(AnswerStyle::Teacher));
        assert_eq!(AnswerStyle::parse("summarize"), Some(AnswerStyle::Summary));
        assert_eq!(AnswerStyle::parse("BULLETS"), Some(AnswerStyle::Bullets));
        assert_eq!(
            AnswerStyle::parse("Use bullet points"),
            Some(AnswerStyle::Bullets)
        );
        assert_eq!(
            AnswerStyle::parse("  Add examples  "),
            Some(AnswerStyle::Examples)
        );
        assert_eq!(AnswerStyle::parse("haiku"), None);
    }

    #[test]
    fn instructions_are_fixed_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for style in AnswerStyle::ALL {
            assert!(!style.instruction().is_empty());
            assert!(seen.insert(style.instruction()));
        }
    }

    #[test]
    fn display_matches_label() {
        for style in AnswerStyle::ALL {
            assert_eq!(style.to_string(), style.label());
        }
    }
}
