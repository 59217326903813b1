//! Single-turn reply policy.
//!
//! Rules are tried top to bottom and the first that applies wins:
//! greeting, farewell, help, joke request, fact request, question lookup,
//! then a fallback. Nothing here remembers earlier turns.

use parley_knowledge::{KnowledgeBase, KnowledgeFormat, MatchOptions, find_answer};
use tracing::debug;

use crate::random::{RandomSource, choose};
use crate::replies::{self, fallback};

pub const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
];

pub const FAREWELLS: &[&str] = &["bye", "goodbye", "exit", "quit", "see you", "farewell"];

pub const HELP_REQUESTS: &[&str] = &["help", "what can you do"];

pub const JOKE_TRIGGERS: &[&str] = &["joke", "funny", "make me laugh", "humor", "tell joke", "pun"];

pub const FACT_TRIGGERS: &[&str] = &["fact", "interesting", "did you know", "tell me something"];

pub const INTERROGATIVES: &[&str] = &["what", "how", "why", "when", "where", "who"];

/// Roll a question miss must beat before a fact is offered.
pub const FALLBACK_FACT_ODDS: f64 = 0.5;

/// Roll a question miss must beat before a joke is offered.
pub const FALLBACK_JOKE_ODDS: f64 = 0.3;

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Farewell,
    Help,
    Joke,
    OutOfJokes,
    Fact,
    Answer,
    /// Unmatched question in the block layout.
    NoInformation,
    /// Unmatched question in the classified layout: a fact, a joke or a nudge.
    Unanswered,
    /// Anything else in the classified layout.
    Chatter,
    /// Anything else in the block layout.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
}

impl Reply {
    fn new(intent: Intent, text: impl Into<String>) -> Self {
        Self {
            intent,
            text: text.into(),
        }
    }

    fn pick(intent: Intent, options: &[&str], random: &mut dyn RandomSource) -> Self {
        let text = choose(random, options).or(options.first()).copied().unwrap_or_default();
        Self::new(intent, text)
    }
}

pub fn is_greeting(lowered: &str) -> bool {
    GREETINGS.iter().any(|greeting| lowered.starts_with(greeting))
}

pub fn is_farewell(lowered: &str) -> bool {
    FAREWELLS.iter().any(|farewell| lowered.starts_with(farewell))
}

/// `?` alone only asks for help in the block layout; elsewhere it is a question.
pub fn is_help_request(lowered: &str, format: KnowledgeFormat) -> bool {
    HELP_REQUESTS.contains(&lowered) || (format == KnowledgeFormat::Blocks && lowered == "?")
}

pub fn wants_joke(lowered: &str) -> bool {
    JOKE_TRIGGERS.iter().any(|trigger| lowered.contains(trigger))
}

pub fn wants_fact(lowered: &str) -> bool {
    FACT_TRIGGERS.iter().any(|trigger| lowered.contains(trigger))
}

pub fn has_interrogative(lowered: &str) -> bool {
    INTERROGATIVES.iter().any(|word| lowered.contains(word))
}

pub fn looks_like_question(lowered: &str) -> bool {
    lowered.contains('?') || has_interrogative(lowered)
}

#[derive(Debug, Clone, Default)]
pub struct ResponsePolicy {
    options: MatchOptions,
}

impl ResponsePolicy {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Choose a reply for one input.
    pub fn decide(
        &self,
        knowledge: &KnowledgeBase,
        input: &str,
        random: &mut dyn RandomSource,
    ) -> Reply {
        let input = input.trim();
        let lowered = input.to_lowercase();
        let format = knowledge.format();

        if is_greeting(&lowered) {
            return Reply::pick(Intent::Greeting, &replies::greeting::REPLIES, random);
        }
        if is_farewell(&lowered) {
            return Reply::pick(Intent::Farewell, &replies::farewell::REPLIES, random);
        }
        if is_help_request(&lowered, format) {
            let text = match format {
                KnowledgeFormat::Classified => replies::help::TEXT,
                KnowledgeFormat::Blocks => replies::help::BLOCKS_TEXT,
            };
            return Reply::new(Intent::Help, text);
        }

        if format.has_categories() {
            if wants_joke(&lowered) {
                return joke_reply(knowledge, random);
            }
            if wants_fact(&lowered) {
                if let Some(reply) = fact_reply(knowledge, random) {
                    return reply;
                }
                debug!("Fact requested but none loaded, continuing");
            }
        }

        if looks_like_question(&lowered) {
            if let Some(answer) = find_answer(knowledge.qa_pairs(), input, &self.options) {
                return Reply::new(Intent::Answer, answer);
            }
            return match format {
                KnowledgeFormat::Classified => unanswered_reply(knowledge, &lowered, random),
                KnowledgeFormat::Blocks => {
                    Reply::new(Intent::NoInformation, fallback::NO_INFORMATION)
                }
            };
        }

        match format {
            KnowledgeFormat::Classified => chatter_reply(input, random),
            KnowledgeFormat::Blocks => Reply::new(Intent::NotFound, fallback::NOT_FOUND),
        }
    }
}

fn joke_reply(knowledge: &KnowledgeBase, random: &mut dyn RandomSource) -> Reply {
    if knowledge.jokes().is_empty() {
        return Reply::new(Intent::OutOfJokes, replies::joke::OUT_OF_JOKES);
    }
    prefixed(Intent::Joke, &replies::joke::PREFIXES, knowledge.jokes(), random)
        .unwrap_or_else(|| Reply::new(Intent::OutOfJokes, replies::joke::OUT_OF_JOKES))
}

fn fact_reply(knowledge: &KnowledgeBase, random: &mut dyn RandomSource) -> Option<Reply> {
    if knowledge.facts().is_empty() {
        return None;
    }
    prefixed(Intent::Fact, &replies::fact::PREFIXES, knowledge.facts(), random)
}

/// Question miss: maybe a fact, more likely a joke, a help nudge as last resort.
fn unanswered_reply(
    knowledge: &KnowledgeBase,
    lowered: &str,
    random: &mut dyn RandomSource,
) -> Reply {
    if has_interrogative(lowered)
        && !knowledge.facts().is_empty()
        && random.roll() > FALLBACK_FACT_ODDS
    {
        if let Some(reply) =
            prefixed(Intent::Unanswered, &fallback::FACT_PREFIXES, knowledge.facts(), random)
        {
            return reply;
        }
    }

    if !knowledge.jokes().is_empty() && random.roll() > FALLBACK_JOKE_ODDS {
        if let Some(reply) =
            prefixed(Intent::Unanswered, &fallback::JOKE_PREFIXES, knowledge.jokes(), random)
        {
            return reply;
        }
    }

    Reply::pick(Intent::Unanswered, &fallback::HELP_NUDGES, random)
}

fn chatter_reply(input: &str, random: &mut dyn RandomSource) -> Reply {
    // Slot 0 echoes the input; the rest are the fixed lines.
    let slot = random.index(fallback::CHATTER.len() + 1);
    let text = match slot.checked_sub(1).and_then(|i| fallback::CHATTER.get(i)) {
        Some(line) => line.to_string(),
        None => fallback::echo(input),
    };
    Reply::new(Intent::Chatter, text)
}

fn prefixed(
    intent: Intent,
    prefixes: &[&str],
    items: &[String],
    random: &mut dyn RandomSource,
) -> Option<Reply> {
    let prefix = choose(random, prefixes).copied().unwrap_or_default();
    let item = choose(random, items)?;
    Some(Reply::new(intent, format!("{}{}", prefix, item)))
}
