//! Parsers for the two backing file layouts.
//!
//! Both are total: every input yields a (possibly empty) result, and lines
//! that fit nothing are resolved by a fixed default rather than an error.

use crate::models::QaPair;

/// Substrings that mark a line as a joke in the classified layout.
pub const JOKE_MARKERS: &[&str] = &[
    "joke",
    "funny",
    "laugh",
    "pun",
    "humor",
    "why did",
    "what do you call",
];

/// Entries sorted out of a source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedKnowledge {
    pub jokes: Vec<String>,
    pub facts: Vec<String>,
    pub qa_pairs: Vec<QaPair>,
}

impl ParsedKnowledge {
    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty() && self.facts.is_empty() && self.qa_pairs.is_empty()
    }
}

/// One classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEntry {
    Qa(QaPair),
    Joke(String),
    Fact(String),
}

/// Classified layout: every non-empty line is a Q&A pair, a joke or a fact.
pub fn parse_classified(raw: &str) -> ParsedKnowledge {
    let mut parsed = ParsedKnowledge::default();
    for line in raw.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match classify_line(line) {
            LineEntry::Qa(pair) => parsed.qa_pairs.push(pair),
            LineEntry::Joke(text) => parsed.jokes.push(text),
            LineEntry::Fact(text) => parsed.facts.push(text),
        }
    }
    parsed
}

/// Classify a single trimmed line.
///
/// The Q&A check runs first, so `Why did the chicken cross?: no idea` is a
/// Q&A pair even though it also carries a joke marker.
// NOTE: that ordering is inherited behaviour, kept for file compatibility.
pub fn classify_line(line: &str) -> LineEntry {
    if let Some(pair) = split_qa_line(line) {
        return LineEntry::Qa(pair);
    }

    let lowered = line.to_lowercase();
    if JOKE_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        LineEntry::Joke(line.to_string())
    } else {
        LineEntry::Fact(line.to_string())
    }
}

/// Split a `question?: answer` line on its first `:`.
///
/// The line must contain both `?` and `:` and the left side must end in `?`.
pub fn split_qa_line(line: &str) -> Option<QaPair> {
    if !line.contains('?') {
        return None;
    }
    let (left, right) = line.split_once(':')?;
    let question = left.trim();
    if !question.ends_with('?') {
        return None;
    }
    QaPair::new(question, right)
}

/// Block layout: a line ending in `:` or `?` opens an entry, following
/// non-empty lines form its answer.
///
/// Lines seen before the first question are dropped, and so are questions
/// that never receive an answer line.
pub fn parse_blocks(raw: &str) -> Vec<QaPair> {
    let mut pairs = Vec::new();
    let mut question: Option<&str> = None;
    let mut answer: Vec<&str> = Vec::new();

    for line in raw.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if is_question_header(line) {
            flush_block(&mut pairs, question.take(), &mut answer);
            question = Some(line);
        } else if question.is_some() {
            answer.push(line);
        }
    }
    flush_block(&mut pairs, question, &mut answer);

    pairs
}

/// A block-layout line ending in `:` or `?` opens a new entry.
pub fn is_question_header(line: &str) -> bool {
    line.ends_with(':') || line.ends_with('?')
}

fn flush_block<'a>(pairs: &mut Vec<QaPair>, question: Option<&'a str>, answer: &mut Vec<&'a str>) {
    if let Some(question) = question {
        let joined = answer.join(" ");
        match QaPair::new(question, &joined) {
            Some(pair) => pairs.push(pair),
            None => tracing::debug!("Dropping knowledge block without answer: {}", question),
        }
    }
    answer.clear();
}
