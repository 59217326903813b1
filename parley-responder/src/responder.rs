use parley_core::config::{KnowledgeSettings, Settings};
use parley_knowledge::{ContentKind, KnowledgeBase, KnowledgeResult, MatchOptions};
use tracing::debug;

use crate::policy::{Reply, ResponsePolicy};
use crate::random::{RandomSource, SeededRandom};
use crate::replies::fallback;

/// One session's responder: its own knowledge base, policy and random source.
pub struct Responder {
    knowledge: KnowledgeBase,
    policy: ResponsePolicy,
    random: Box<dyn RandomSource>,
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder")
            .field("knowledge", &self.knowledge)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Responder {
    /// Entropy-seeded responder over an already loaded knowledge base.
    pub fn new(knowledge: KnowledgeBase, options: MatchOptions) -> Self {
        Self::with_random(knowledge, options, Box::new(SeededRandom::from_entropy()))
    }

    pub fn with_random(
        knowledge: KnowledgeBase,
        options: MatchOptions,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            knowledge,
            policy: ResponsePolicy::new(options),
            random,
        }
    }

    /// Load the knowledge source named in the settings and build a responder.
    pub fn from_settings(settings: &Settings) -> Self {
        let knowledge_settings = KnowledgeSettings::from(settings);
        let knowledge = KnowledgeBase::load(&knowledge_settings);
        let random: Box<dyn RandomSource> = match settings.responder.seed {
            Some(seed) => Box::new(SeededRandom::from_seed(seed)),
            None => Box::new(SeededRandom::from_entropy()),
        };
        Self::with_random(knowledge, knowledge_settings.matching, random)
    }

    /// Reply to one user input. Always returns a non-empty string.
    pub fn get_response(&mut self, input: &str) -> String {
        self.reply(input).text
    }

    /// Like [`get_response`](Self::get_response), keeping the rule that fired.
    pub fn reply(&mut self, input: &str) -> Reply {
        let mut reply = self
            .policy
            .decide(&self.knowledge, input, self.random.as_mut());
        if reply.text.trim().is_empty() {
            reply.text = fallback::NOT_FOUND.to_string();
        }
        debug!("Reply intent: {:?}", reply.intent);
        reply
    }

    /// Add content to the knowledge base and its backing file.
    pub fn add_content(&mut self, kind: ContentKind, text: &str) -> KnowledgeResult<()> {
        self.knowledge.add(kind, text)
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn match_options(&self) -> &MatchOptions {
        self.policy.options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use parley_knowledge::{KnowledgeFormat, QaPair};

    #[test]
    fn blank_answers_never_leak() {
        // A hand-built pair bypasses QaPair::new validation.
        let pair = QaPair {
            question: "What is blank".to_string(),
            answer: "   ".to_string(),
        };
        let knowledge =
            KnowledgeBase::from_parts(KnowledgeFormat::Classified, vec![], vec![], vec![pair]);
        let mut responder = Responder::with_random(
            knowledge,
            MatchOptions::default(),
            Box::new(ScriptedRandom::new()),
        );

        assert_eq!(responder.get_response("what is blank"), fallback::NOT_FOUND);
    }

    #[test]
    fn from_settings_uses_seed_and_source() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        let path = temp.path().join("qa.txt");
        std::fs::write(
            &path,
            "What is the airspeed of a swallow?\nRoughly 11 metres\nper second.\n",
        )
        .unwrap();

        let mut settings = Settings::default();
        settings.knowledge.path = Some(path.to_string_lossy().to_string());
        settings.knowledge.format = KnowledgeFormat::Blocks;
        settings.responder.seed = Some(1);

        let mut responder = Responder::from_settings(&settings);
        assert_eq!(responder.knowledge().format(), KnowledgeFormat::Blocks);
        assert!(responder.match_options().prefix_boost.is_some());
        assert_eq!(
            responder.get_response("airspeed of a swallow"),
            "Roughly 11 metres per second."
        );
        assert_eq!(
            responder.get_response("who won the cup?"),
            fallback::NO_INFORMATION
        );
    }
}
