//! Canned, user-facing reply text.

pub mod greeting {
    pub const REPLIES: [&str; 3] = [
        "Hello there! 👋 Ask me anything, or say 'joke' if you need a laugh.",
        "Hey! 🤗 I know jokes, facts, and the answers to a few questions.",
        "Hi! 😊 Good to see you. What's on your mind?",
    ];
}

pub mod farewell {
    pub const REPLIES: [&str; 3] = [
        "Goodbye! 👋 Thanks for chatting, come back anytime.",
        "See you later! 😊 I'll be right here.",
        "Bye! 🎉 It was fun talking with you.",
    ];
}

pub mod help {
    pub const TEXT: &str = "Here's what I can do:\n\
        • Answer questions from my knowledge base ❓\n\
        • Tell a joke (say 'joke') 🎭\n\
        • Share a fact (say 'fact') 📚\n\
        • Chat about anything else 💬";

    pub const BLOCKS_TEXT: &str =
        "Ask me a question and I'll look it up in my knowledge base. Type 'help' or '?' to see this again.";
}

pub mod joke {
    pub const PREFIXES: [&str; 3] = [
        "😂 Here's one for you: ",
        "🎭 Get ready to laugh: ",
        "😄 This one always gets me: ",
    ];

    pub const OUT_OF_JOKES: &str =
        "I'm out of jokes! 😅 Add some to my knowledge file or just keep chatting.";
}

pub mod fact {
    pub const PREFIXES: [&str; 3] = [
        "🧠 Interesting fact: ",
        "📚 Did you know? ",
        "🌟 Here's a cool fact: ",
    ];
}

pub mod fallback {
    /// Used when a question finds no match and a joke is offered instead.
    pub const JOKE_PREFIXES: [&str; 2] = [
        "I don't know the answer, but here's a joke to cheer you up: ",
        "That's a tricky one! While I think about it, enjoy this joke: ",
    ];

    /// Used when a question finds no match and a fact is offered instead.
    pub const FACT_PREFIXES: [&str; 2] = [
        "I'm not sure about that, but here's an interesting fact: ",
        "Great question! I don't have that answer, but did you know: ",
    ];

    pub const HELP_NUDGES: [&str; 2] = [
        "I'm still learning! Could you rephrase your question?",
        "I don't have that information yet. Try asking something else or ask me for a 'joke'!",
    ];

    /// Block-format reply for an unmatched question.
    pub const NO_INFORMATION: &str = "Sorry, I don't have information about that yet.";

    /// Block-format reply for anything that is not a question.
    pub const NOT_FOUND: &str =
        "I couldn't find an answer to that. Try asking a question, or type 'help'.";

    pub const CHATTER: [&str; 4] = [
        "I hear you! Ask me a question, request a joke, or just keep chatting.",
        "Got it! What would you like to talk about next?",
        "Thanks for sharing! What would you like to discuss?",
        "Nice! How can I help you today?",
    ];

    /// Number of input characters echoed back by [`echo`].
    pub const ECHO_CHARS: usize = 30;

    pub fn echo(input: &str) -> String {
        let excerpt: String = input.chars().take(ECHO_CHARS).collect();
        format!(
            "Interesting point about '{}...'! What else would you like to know?",
            excerpt
        )
    }
}

pub mod session {
    pub const WELCOME: &str =
        "🌟 Welcome! I can tell jokes 🎭, answer questions ❓ and share facts 📚. Type 'joke' for a laugh or ask me anything!";
    pub const CLEARED: &str = "🌟 Chat cleared. Ready when you are! 🤖";
    /// Synthetic input sent by the "share a fact" shortcut.
    pub const FACT_REQUEST: &str = "tell me a fact";
    /// Synthetic input sent by the "tell me a joke" shortcut.
    pub const JOKE_REQUEST: &str = "joke";
}
