//! Built-in dataset used when the backing file is missing or yields nothing.

use crate::models::QaPair;
use crate::parser::ParsedKnowledge;

pub const DEFAULT_JOKES: [&str; 5] = [
    "Why don't scientists trust atoms? Because they make up everything!",
    "I told my wife she was drawing her eyebrows too high. She looked surprised.",
    "What do you call fake spaghetti? An impasta!",
    "Why did the scarecrow win an award? He was outstanding in his field!",
    "How does a penguin build its house? Igloos it together!",
];

pub const DEFAULT_QA: [(&str, &str); 5] = [
    ("What is the capital of France?", "Paris"),
    ("Who painted the Mona Lisa?", "Leonardo da Vinci"),
    ("What is the largest planet?", "Jupiter"),
    ("How many continents are there?", "7 continents"),
    ("What is the chemical symbol for water?", "H2O"),
];

pub const DEFAULT_FACTS: [&str; 5] = [
    "Honey never spoils. Archaeologists have found pots of honey in ancient Egyptian tombs that are over 3,000 years old and still perfectly good to eat.",
    "Octopuses have three hearts. Two pump blood to the gills, while the third pumps it to the rest of the body.",
    "Bananas are berries, but strawberries aren't.",
    "A group of flamingos is called a 'flamboyance'.",
    "The shortest war in history was between Britain and Zanzibar on August 27, 1896. It lasted only 38 minutes.",
];

/// The built-in collections for the classified layout.
pub fn builtin_knowledge() -> ParsedKnowledge {
    ParsedKnowledge {
        jokes: DEFAULT_JOKES.iter().map(|joke| joke.to_string()).collect(),
        facts: DEFAULT_FACTS.iter().map(|fact| fact.to_string()).collect(),
        qa_pairs: DEFAULT_QA
            .iter()
            .filter_map(|(question, answer)| QaPair::new(question, answer))
            .collect(),
    }
}

/// Bootstrap text for the block layout: one block per default Q&A pair.
pub fn default_block_text() -> String {
    let mut text = String::new();
    for (question, answer) in DEFAULT_QA {
        text.push_str(question);
        text.push('\n');
        text.push_str(answer);
        text.push_str("\n\n");
    }
    text
}
