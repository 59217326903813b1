use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::KnowledgeError;

/// A stored question with its answer.
///
/// The question never carries its trailing `:` or `?`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    /// Build a pair from raw text, trimming both sides and stripping one
    /// trailing `:` or `?` from the question.
    ///
    /// Returns `None` when either side ends up empty.
    pub fn new(question: &str, answer: &str) -> Option<Self> {
        let question = strip_terminator(question.trim()).trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self {
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }
}

/// Drop exactly one trailing `:` or `?`.
fn strip_terminator(text: &str) -> &str {
    text.strip_suffix(':')
        .or_else(|| text.strip_suffix('?'))
        .unwrap_or(text)
}

/// Kind of content a user can append at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Joke,
    Fact,
    Qa,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Joke => "joke",
            ContentKind::Fact => "fact",
            ContentKind::Qa => "q&a pair",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = KnowledgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "joke" => Ok(Self::Joke),
            "fact" => Ok(Self::Fact),
            "qa" | "q&a" | "q&a pair" => Ok(Self::Qa),
            _ => Err(KnowledgeError::UnknownKind(s.to_string())),
        }
    }
}

/// Collection sizes, for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeStats {
    pub jokes: usize,
    pub facts: usize,
    pub qa_pairs: usize,
}

impl KnowledgeStats {
    pub fn total(&self) -> usize {
        self.jokes + self.facts + self.qa_pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_terminator() {
        let pair = QaPair::new("  What is the largest planet?  ", " Jupiter ").unwrap();
        assert_eq!(pair.question, "What is the largest planet");
        assert_eq!(pair.answer, "Jupiter");

        let pair = QaPair::new("Really??", "yes").unwrap();
        assert_eq!(pair.question, "Really?");

        let pair = QaPair::new("Topic:", "body").unwrap();
        assert_eq!(pair.question, "Topic");
    }

    #[test]
    fn rejects_empty_sides() {
        assert!(QaPair::new("?", "answer").is_none());
        assert!(QaPair::new("Question?", "   ").is_none());
    }

    #[test]
    fn parses_content_kind() {
        assert_eq!("Joke".parse::<ContentKind>().unwrap(), ContentKind::Joke);
        assert_eq!("Fact".parse::<ContentKind>().unwrap(), ContentKind::Fact);
        assert_eq!("Q&A Pair".parse::<ContentKind>().unwrap(), ContentKind::Qa);
        assert!(matches!(
            "poem".parse::<ContentKind>(),
            Err(KnowledgeError::UnknownKind(_))
        ));
    }
}
