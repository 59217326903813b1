//! Session-owned knowledge base backed by a flat text file.
//!
//! Loading never fails: a missing or useless source is replaced by the
//! built-in dataset. The file is only ever appended to after load.
//! Nothing locks it, so two sessions appending at once may interleave lines.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parley_core::config::{KnowledgeFormat, KnowledgeSettings};
use tracing::{debug, info, warn};

use crate::defaults::{builtin_knowledge, default_block_text};
use crate::errors::{KnowledgeError, KnowledgeResult};
use crate::models::{ContentKind, KnowledgeStats, QaPair};
use crate::parser::{
    ParsedKnowledge, is_question_header, parse_blocks, parse_classified, split_qa_line,
};

/// Where the loaded entries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeOrigin {
    /// Parsed from the backing source.
    Source,
    /// Built-in dataset substituted for an absent or empty source.
    BuiltIn,
    /// Default block text, written to the backing file and re-parsed.
    Bootstrapped,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    format: KnowledgeFormat,
    source_path: Option<PathBuf>,
    origin: KnowledgeOrigin,
    jokes: Vec<String>,
    facts: Vec<String>,
    qa_pairs: Vec<QaPair>,
}

impl KnowledgeBase {
    /// Load the backing file named by the settings.
    pub fn load(settings: &KnowledgeSettings) -> Self {
        Self::open(&settings.source_path, settings.format)
    }

    /// Load a backing file in the given layout.
    pub fn open(path: impl Into<PathBuf>, format: KnowledgeFormat) -> Self {
        let path = path.into();
        let mut base = match fs::read_to_string(&path) {
            Ok(raw) => Self::from_source(&raw, format),
            Err(err) => match format {
                KnowledgeFormat::Classified => {
                    warn!(
                        "Knowledge source {:?} unavailable ({}), using built-in dataset",
                        path, err
                    );
                    Self::builtin(format)
                }
                KnowledgeFormat::Blocks => Self::bootstrap_blocks(&path, err.kind()),
            },
        };
        base.source_path = Some(path);

        let stats = base.stats();
        info!(
            "Knowledge loaded ({} format, {:?}): {} Q&A pairs, {} jokes, {} facts",
            format, base.origin, stats.qa_pairs, stats.jokes, stats.facts
        );
        base
    }

    /// Parse source text with no backing file.
    ///
    /// A source that yields no entries falls back to the defaults.
    pub fn from_source(raw: &str, format: KnowledgeFormat) -> Self {
        let parsed = match format {
            KnowledgeFormat::Classified => parse_classified(raw),
            KnowledgeFormat::Blocks => ParsedKnowledge {
                qa_pairs: parse_blocks(raw),
                ..ParsedKnowledge::default()
            },
        };

        if parsed.is_empty() {
            warn!("Knowledge source has no usable entries, using defaults");
            return Self::builtin(format);
        }

        Self::from_parsed(format, parsed, KnowledgeOrigin::Source)
    }

    /// Built-in entries for the layout.
    pub fn builtin(format: KnowledgeFormat) -> Self {
        let parsed = match format {
            KnowledgeFormat::Classified => builtin_knowledge(),
            KnowledgeFormat::Blocks => ParsedKnowledge {
                qa_pairs: parse_blocks(&default_block_text()),
                ..ParsedKnowledge::default()
            },
        };
        Self::from_parsed(format, parsed, KnowledgeOrigin::BuiltIn)
    }

    /// A base with no entries at all.
    pub fn empty(format: KnowledgeFormat) -> Self {
        Self::from_parsed(format, ParsedKnowledge::default(), KnowledgeOrigin::Source)
    }

    /// Build a base from explicit collections.
    ///
    /// Joke and fact collections are discarded for the block layout.
    pub fn from_parts(
        format: KnowledgeFormat,
        jokes: Vec<String>,
        facts: Vec<String>,
        qa_pairs: Vec<QaPair>,
    ) -> Self {
        Self::from_parsed(
            format,
            ParsedKnowledge {
                jokes,
                facts,
                qa_pairs,
            },
            KnowledgeOrigin::Source,
        )
    }

    fn from_parsed(
        format: KnowledgeFormat,
        parsed: ParsedKnowledge,
        origin: KnowledgeOrigin,
    ) -> Self {
        let ParsedKnowledge {
            mut jokes,
            mut facts,
            qa_pairs,
        } = parsed;
        if !format.has_categories() {
            jokes.clear();
            facts.clear();
        }
        Self {
            format,
            source_path: None,
            origin,
            jokes,
            facts,
            qa_pairs,
        }
    }

    fn bootstrap_blocks(path: &Path, error: ErrorKind) -> Self {
        let text = default_block_text();
        let mut origin = KnowledgeOrigin::BuiltIn;

        // Only a missing file is recreated; anything else might still hold user data.
        if error == ErrorKind::NotFound {
            match write_source(path, &text) {
                Ok(()) => {
                    info!("Bootstrapped knowledge source at {:?}", path);
                    origin = KnowledgeOrigin::Bootstrapped;
                }
                Err(err) => warn!("Failed to bootstrap knowledge source {:?}: {}", path, err),
            }
        } else {
            warn!(
                "Knowledge source {:?} unreadable ({:?}), using default blocks in memory",
                path, error
            );
        }

        Self::from_parsed(
            KnowledgeFormat::Blocks,
            ParsedKnowledge {
                qa_pairs: parse_blocks(&text),
                ..ParsedKnowledge::default()
            },
            origin,
        )
    }

    /// Add an entry to memory and append it to the backing file.
    ///
    /// Q&A text uses the `question?: answer` form. In the block layout the
    /// answer may not end in `:` or `?`. The in-memory insert
    /// happens before the write, so an I/O error leaves the entry usable for
    /// this session only.
    pub fn add(&mut self, kind: ContentKind, text: &str) -> KnowledgeResult<()> {
        let line = single_line(text);
        if line.is_empty() {
            return Err(KnowledgeError::EmptyContent);
        }

        if !self.format.has_categories() && kind != ContentKind::Qa {
            return Err(KnowledgeError::UnsupportedKind {
                kind: kind.to_string(),
                format: self.format.to_string(),
            });
        }

        let record = match kind {
            ContentKind::Joke => {
                self.jokes.push(line.clone());
                line
            }
            ContentKind::Fact => {
                self.facts.push(line.clone());
                line
            }
            ContentKind::Qa => {
                let pair = split_qa_line(&line)
                    .ok_or_else(|| KnowledgeError::InvalidQaPair(line.clone()))?;
                let record = match self.format {
                    KnowledgeFormat::Classified => line,
                    // An answer line ending in ':' or '?' would reload as a header.
                    KnowledgeFormat::Blocks if is_question_header(&pair.answer) => {
                        return Err(KnowledgeError::InvalidQaPair(line));
                    }
                    KnowledgeFormat::Blocks => format!("{}?\n{}", pair.question, pair.answer),
                };
                self.qa_pairs.push(pair);
                record
            }
        };
        debug!("Added {} to knowledge base", kind);

        if let Some(path) = &self.source_path {
            append_line(path, &record)?;
        }
        Ok(())
    }

    pub fn format(&self) -> KnowledgeFormat {
        self.format
    }

    pub fn origin(&self) -> KnowledgeOrigin {
        self.origin
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn jokes(&self) -> &[String] {
        &self.jokes
    }

    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    pub fn qa_pairs(&self) -> &[QaPair] {
        &self.qa_pairs
    }

    pub fn stats(&self) -> KnowledgeStats {
        KnowledgeStats {
            jokes: self.jokes.len(),
            facts: self.facts.len(),
            qa_pairs: self.qa_pairs.len(),
        }
    }
}

/// Collapse multi-line input into one trimmed line.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_source(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)
}

fn append_line(path: &Path, record: &str) -> KnowledgeResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, "\n{}", record)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_classified_source_uses_builtin() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("data.txt");

        let base = KnowledgeBase::open(&path, KnowledgeFormat::Classified);

        assert_eq!(base.origin(), KnowledgeOrigin::BuiltIn);
        assert_eq!(base.stats().total(), 15);
        assert!(!path.exists(), "classified layout never writes defaults");
    }

    #[test]
    fn missing_block_source_is_bootstrapped() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("kb").join("qa.txt");

        let base = KnowledgeBase::open(&path, KnowledgeFormat::Blocks);

        assert_eq!(base.origin(), KnowledgeOrigin::Bootstrapped);
        assert_eq!(base.qa_pairs().len(), 5);
        assert!(base.jokes().is_empty());

        let written = fs::read_to_string(&path).expect("bootstrap file");
        assert_eq!(parse_blocks(&written), base.qa_pairs());
    }

    #[test]
    fn empty_block_file_is_not_overwritten() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("qa.txt");
        fs::write(&path, "just some notes\nwithout questions\n").unwrap();

        let base = KnowledgeBase::open(&path, KnowledgeFormat::Blocks);

        assert_eq!(base.origin(), KnowledgeOrigin::BuiltIn);
        assert_eq!(base.qa_pairs().len(), 5);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "just some notes\nwithout questions\n"
        );
    }

    #[test]
    fn empty_classified_file_uses_builtin() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("data.txt");
        fs::write(&path, "\n\n").unwrap();

        let base = KnowledgeBase::open(&path, KnowledgeFormat::Classified);
        assert_eq!(base.origin(), KnowledgeOrigin::BuiltIn);
        assert_eq!(base.jokes().len(), 5);
    }

    #[test]
    fn block_layout_drops_categories() {
        let base = KnowledgeBase::from_parts(
            KnowledgeFormat::Blocks,
            vec!["a joke".to_string()],
            vec!["a fact".to_string()],
            vec![],
        );
        assert!(base.jokes().is_empty());
        assert!(base.facts().is_empty());
    }

    #[test]
    fn add_rejects_empty_and_malformed() {
        let mut base = KnowledgeBase::empty(KnowledgeFormat::Classified);

        assert!(matches!(
            base.add(ContentKind::Joke, "  \n "),
            Err(KnowledgeError::EmptyContent)
        ));
        assert!(matches!(
            base.add(ContentKind::Qa, "no question mark: here"),
            Err(KnowledgeError::InvalidQaPair(_))
        ));
        assert_eq!(base.stats().total(), 0);
    }

    #[test]
    fn add_to_block_layout() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("qa.txt");
        fs::write(&path, "What is Rust?\nA language.\n").unwrap();

        let mut base = KnowledgeBase::open(&path, KnowledgeFormat::Blocks);
        assert!(matches!(
            base.add(ContentKind::Joke, "knock knock"),
            Err(KnowledgeError::UnsupportedKind { .. })
        ));

        base.add(ContentKind::Qa, "Who made it?: Graydon Hoare").unwrap();
        assert_eq!(base.qa_pairs().len(), 2);

        let reloaded = KnowledgeBase::open(&path, KnowledgeFormat::Blocks);
        assert_eq!(reloaded.qa_pairs(), base.qa_pairs());
    }

    #[test]
    fn block_layout_rejects_answers_that_read_as_headers() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("qa.txt");
        fs::write(&path, "What is Rust?\nA language.\n").unwrap();

        let mut base = KnowledgeBase::open(&path, KnowledgeFormat::Blocks);
        for text in ["Is it raining?: Who knows?", "What comes next?: The list:"] {
            assert!(matches!(
                base.add(ContentKind::Qa, text),
                Err(KnowledgeError::InvalidQaPair(_))
            ));
        }
        assert_eq!(base.qa_pairs().len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "What is Rust?\nA language.\n");

        base.add(ContentKind::Qa, "Is it raining?: Probably not.").unwrap();
        let reloaded = KnowledgeBase::open(&path, KnowledgeFormat::Blocks);
        assert_eq!(reloaded.qa_pairs(), base.qa_pairs());
        assert_eq!(reloaded.qa_pairs().len(), 2);
    }

    #[test]
    fn add_without_backing_file_stays_in_memory() {
        let mut base = KnowledgeBase::from_source("Water is wet.", KnowledgeFormat::Classified);
        assert!(base.source_path().is_none());

        base.add(ContentKind::Fact, "Fire is hot.\nVery hot.").unwrap();
        assert_eq!(base.facts(), ["Water is wet.", "Fire is hot. Very hot."]);
    }
}
