use std::io::{self, BufRead, Write};

use parley_core::Settings;
use parley_responder::{ChatSession, Reply, ends_conversation};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Command;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;

    // Logs go to stderr so replies on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut session = ChatSession::from_settings(&settings);
    let knowledge = session.responder().knowledge();
    info!(
        "Knowledge loaded ({}, {:?}) from {}",
        knowledge.format(),
        knowledge.origin(),
        knowledge
            .source_path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string())
    );

    run_repl(&mut session)
}

fn run_repl(session: &mut ChatSession) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Some(welcome) = session.log().last() {
        println!("{}", welcome.content);
    }

    loop {
        print!("\n> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match commands::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Say(text) => {
                let reply = session.send(text.trim());
                print_reply(&reply);
                if ends_conversation(&reply) {
                    break;
                }
            }
            Command::Joke => print_reply(&session.request_joke()),
            Command::Fact => print_reply(&session.request_fact()),
            Command::Clear => {
                session.clear();
                if let Some(notice) = session.log().last() {
                    println!("{}", notice.content);
                }
            }
            Command::Stats => {
                let stats = session.stats();
                println!(
                    "{} jokes, {} facts, {} Q&A pairs ({} turns this session)",
                    stats.jokes,
                    stats.facts,
                    stats.qa_pairs,
                    session.log().user_turns()
                );
            }
            Command::Add { kind, text } => match session.add_content(kind, &text) {
                Ok(()) => println!("Added {} to the knowledge base.", kind.as_str()),
                Err(e) => {
                    warn!("Failed to add {}: {}", kind.as_str(), e);
                    println!("Could not add that: {}", e);
                }
            },
            Command::Help => println!("{}", commands::USAGE),
            Command::Quit => break,
        }
    }

    Ok(())
}

fn print_reply(reply: &Reply) {
    println!("{}", reply.text);
}
