use parley_knowledge::{ContentKind, KnowledgeError};

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Say(String),
    Joke,
    Fact,
    Clear,
    Stats,
    Add { kind: ContentKind, text: String },
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: /{0}")]
    Unknown(String),

    #[error("Usage: /add <joke|fact|qa> <text>")]
    AddUsage,

    #[error(transparent)]
    Kind(#[from] KnowledgeError),
}

pub const USAGE: &str = "Commands:\n  \
    /joke               ask for a joke\n  \
    /fact               ask for a fact\n  \
    /clear              clear the conversation\n  \
    /stats              show what the knowledge base holds\n  \
    /add <kind> <text>  add a joke, fact or qa line to the knowledge file\n  \
    /help               show this message\n  \
    /quit               leave\n\
    Anything else is sent to the bot.";

/// Parse a prompt line. Lines not starting with `/` are chat input.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let Some(rest) = line.trim().strip_prefix('/') else {
        return Ok(Command::Say(line.to_string()));
    };

    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest, ""),
    };

    match name.to_lowercase().as_str() {
        "joke" => Ok(Command::Joke),
        "fact" => Ok(Command::Fact),
        "clear" => Ok(Command::Clear),
        "stats" => Ok(Command::Stats),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "add" => parse_add(args),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_add(args: &str) -> Result<Command, CommandError> {
    let (kind, text) = args
        .split_once(char::is_whitespace)
        .ok_or(CommandError::AddUsage)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(CommandError::AddUsage);
    }
    Ok(Command::Add {
        kind: kind.parse()?,
        text: text.to_string(),
    })
}
