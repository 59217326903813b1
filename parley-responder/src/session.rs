//! A chat window's worth of state: one responder and the turns shown so far.

use parley_core::config::Settings;
use parley_core::{ChatMessage, ConversationLog};
use parley_knowledge::{ContentKind, KnowledgeResult, KnowledgeStats};
use tracing::info;

use crate::policy::{Intent, Reply};
use crate::replies;
use crate::responder::Responder;

#[derive(Debug)]
pub struct ChatSession {
    responder: Responder,
    log: ConversationLog,
}

impl ChatSession {
    pub fn new(responder: Responder) -> Self {
        Self {
            responder,
            log: ConversationLog::with_welcome(replies::session::WELCOME),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Responder::from_settings(settings))
    }

    /// Record the user's input, answer it and record the answer.
    pub fn send(&mut self, input: &str) -> Reply {
        self.log.push(ChatMessage::user(input));
        let reply = self.responder.reply(input);
        self.log.push(ChatMessage::assistant(reply.text.clone()));
        reply
    }

    pub fn request_joke(&mut self) -> Reply {
        self.send(replies::session::JOKE_REQUEST)
    }

    pub fn request_fact(&mut self) -> Reply {
        self.send(replies::session::FACT_REQUEST)
    }

    /// Drop every turn. The knowledge base is kept as is.
    pub fn clear(&mut self) {
        info!("Clearing {} turns", self.log.len());
        self.log = ConversationLog::with_welcome(replies::session::CLEARED);
    }

    pub fn add_content(&mut self, kind: ContentKind, text: &str) -> KnowledgeResult<()> {
        self.responder.add_content(kind, text)
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn stats(&self) -> KnowledgeStats {
        self.responder.knowledge().stats()
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }
}

/// Whether a reply closes the conversation.
pub fn ends_conversation(reply: &Reply) -> bool {
    reply.intent == Intent::Farewell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use parley_core::MessageRole;
    use parley_knowledge::{KnowledgeBase, KnowledgeFormat, MatchOptions};

    fn session() -> ChatSession {
        let knowledge = KnowledgeBase::from_parts(
            KnowledgeFormat::Classified,
            vec!["Why did the chicken cross the road? To get to the other side.".to_string()],
            vec!["Honey never spoils.".to_string()],
            vec![],
        );
        ChatSession::new(Responder::with_random(
            knowledge,
            MatchOptions::default(),
            Box::new(ScriptedRandom::new()),
        ))
    }

    #[test]
    fn starts_with_welcome() {
        let session = session();
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.log().turns()[0].content, replies::session::WELCOME);
        assert_eq!(session.log().turns()[0].role, MessageRole::Assistant);
    }

    #[test]
    fn shortcuts_go_through_send() {
        let mut session = session();

        let joke = session.request_joke();
        assert_eq!(joke.intent, Intent::Joke);
        let fact = session.request_fact();
        assert_eq!(fact.intent, Intent::Fact);
        assert!(fact.text.ends_with("Honey never spoils."));

        let turns = session.log().turns();
        assert_eq!(turns.len(), 5);
        assert_eq!(turns[1].content, replies::session::JOKE_REQUEST);
        assert_eq!(turns[3].content, replies::session::FACT_REQUEST);
        assert_eq!(turns[4].content, fact.text);
        assert_eq!(session.log().user_turns(), 2);
    }

    #[test]
    fn clear_keeps_knowledge() {
        let mut session = session();
        session.send("hello");
        let before = session.stats();

        session.clear();

        assert_eq!(session.log().len(), 1);
        assert_eq!(session.log().turns()[0].content, replies::session::CLEARED);
        assert_eq!(session.stats(), before);
        assert_eq!(session.request_joke().intent, Intent::Joke);
    }

    #[test]
    fn farewell_ends_conversation() {
        let mut session = session();
        assert!(ends_conversation(&session.send("bye for now")));
        assert!(!ends_conversation(&session.send("hello")));
    }
}
