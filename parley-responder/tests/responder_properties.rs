use parley_core::Settings;
use parley_knowledge::{ContentKind, KnowledgeBase, KnowledgeFormat, MatchOptions, QaPair};
use parley_responder::replies::{fallback, greeting, joke};
use parley_responder::{ChatSession, Responder, ScriptedRandom, SeededRandom};
use tempfile::TempDir;

fn seeded(knowledge: KnowledgeBase, seed: u64) -> Responder {
    let options = MatchOptions::for_format(knowledge.format());
    Responder::with_random(knowledge, options, Box::new(SeededRandom::from_seed(seed)))
}

const AWKWARD_INPUTS: &[&str] = &[
    "",
    "   ",
    "?",
    "??",
    ":",
    "hi",
    "joke",
    "fact",
    "what",
    "tell me something interesting",
    "why is the sky blue?",
    "I like trains",
    "日本語のテキストはどうですか？ 🚂🚂🚂 ünïcödé everywhere, repeated ünïcödé everywhere",
];

#[test]
fn replies_are_never_empty() {
    for format in [KnowledgeFormat::Classified, KnowledgeFormat::Blocks] {
        for knowledge in [KnowledgeBase::builtin(format), KnowledgeBase::empty(format)] {
            let mut responder = seeded(knowledge, 11);
            for input in AWKWARD_INPUTS {
                for _ in 0..8 {
                    let reply = responder.get_response(input);
                    assert!(!reply.trim().is_empty(), "{format} reply to {input:?} was empty");
                }
            }
        }
    }
}

#[test]
fn greeting_gets_a_greeting() {
    let mut responder = seeded(KnowledgeBase::builtin(KnowledgeFormat::Classified), 3);
    for _ in 0..10 {
        let reply = responder.get_response("Hello there");
        assert!(greeting::REPLIES.contains(&reply.as_str()), "unexpected: {reply}");
    }
}

#[test]
fn exact_question_is_answered() {
    let knowledge = KnowledgeBase::from_parts(
        KnowledgeFormat::Classified,
        vec![],
        vec![],
        vec![QaPair::new("What is the capital of France?", "Paris").unwrap()],
    );
    let mut responder = seeded(knowledge, 5);
    assert_eq!(responder.get_response("what is the capital of France"), "Paris");
}

#[test]
fn joke_request_without_jokes() {
    let mut responder = Responder::with_random(
        KnowledgeBase::empty(KnowledgeFormat::Classified),
        MatchOptions::default(),
        Box::new(ScriptedRandom::new()),
    );
    assert_eq!(responder.get_response("tell me a joke"), joke::OUT_OF_JOKES);
}

#[test]
fn same_seed_same_conversation() {
    let inputs = ["where is the moon?", "I like trains", "joke", "fact", "why?"];
    let mut first = seeded(KnowledgeBase::builtin(KnowledgeFormat::Classified), 99);
    let mut second = seeded(KnowledgeBase::builtin(KnowledgeFormat::Classified), 99);

    for input in inputs.iter().cycle().take(25) {
        assert_eq!(first.get_response(input), second.get_response(input));
    }
}

#[test]
fn unmatched_block_question() {
    let mut responder = seeded(KnowledgeBase::builtin(KnowledgeFormat::Blocks), 1);
    assert_eq!(
        responder.get_response("is it going to rain tomorrow?"),
        fallback::NO_INFORMATION
    );
    assert_eq!(responder.get_response("What is the largest planet"), "Jupiter");
}

#[test]
fn added_fact_reaches_a_new_session() {
    let temp = TempDir::new().expect("tempdir");
    let mut settings = Settings::default();
    settings.knowledge.path = Some(temp.path().join("data.txt").to_string_lossy().to_string());
    settings.responder.seed = Some(4);

    let mut session = ChatSession::from_settings(&settings);
    session.add_content(ContentKind::Fact, "X is true").unwrap();
    session.clear();
    assert!(session.responder().knowledge().facts().iter().any(|f| f == "X is true"));

    let mut fresh = ChatSession::from_settings(&settings);
    assert_eq!(fresh.responder().knowledge().facts(), ["X is true"]);
    assert!(fresh.request_fact().text.ends_with("X is true"));
}
