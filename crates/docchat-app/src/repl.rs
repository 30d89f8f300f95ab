//! Interactive REPL: the presentation layer.
//!
//! Plain lines are questions; `:`-prefixed lines are commands. Each action
//! runs to completion before the next line is read, so the session state
//! always has exactly one writer.

use std::io::Write as _;
use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader};

use docchat_ai::{AiClient, AnswerStyle, ChatSession};
use docchat_extract::{process_documents, BatchOutcome, UploadedDocument};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Ask(&'a str),
    Load(Vec<PathBuf>),
    Process,
    Style(&'a str),
    History,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

pub(crate) fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Command::Ask(trimmed);
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "load" => Command::Load(arg.split_whitespace().map(PathBuf::from).collect()),
        "process" => Command::Process,
        "style" => Command::Style(arg),
        "history" => Command::History,
        "help" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(other),
    }
}

/// Run the interactive loop until `:quit` or end of input.
pub(crate) async fn run(
    client: &dyn AiClient,
    mut style: AnswerStyle,
    mut staged: Vec<UploadedDocument>,
) -> std::io::Result<()> {
    let mut session = ChatSession::new();
    tracing::info!(session = %session.id(), "session started");

    println!("docchat — chat with your documents (:help for commands)");

    if !staged.is_empty() {
        process_staged(&mut session, &staged);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_prompt()?;

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Unknown(name) => {
                println!("Unknown command ':{name}' — :help lists the available ones.");
            }
            Command::Style(name) => match AnswerStyle::parse(name) {
                Some(selected) => {
                    style = selected;
                    println!("Answer style: {style}");
                }
                None => {
                    println!("Unknown style '{name}'. Available styles:");
                    for s in AnswerStyle::ALL {
                        println!("  {s}");
                    }
                }
            },
            Command::Load(paths) => {
                if paths.is_empty() {
                    println!("Usage: :load <file> [<file>...]");
                } else {
                    stage_documents(&mut staged, &paths);
                }
            }
            Command::Process => {
                if staged.is_empty() {
                    println!("Nothing staged — :load some documents first.");
                } else {
                    process_staged(&mut session, &staged);
                }
            }
            Command::History => render_history(&session),
            Command::Ask(question) => {
                if !session.has_documents() {
                    println!("Please load and process documents first (:load <file>, then :process).");
                } else {
                    println!("Thinking...");
                    let answer = session.ask(client, question, style).await;
                    println!("Assistant: {answer}");
                }
            }
        }
        print_prompt()?;
    }

    Ok(())
}

fn print_prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn print_help() {
    println!("Commands:");
    println!("  :load <file> [<file>...]   stage documents for processing");
    println!("  :process                   extract text from staged documents");
    println!("  :style <name>              set answer style (teacher, summary, examples, bullets)");
    println!("  :history                   show the conversation so far");
    println!("  :quit                      exit");
    println!("Anything else is asked as a question against the processed documents.");
}

/// Read each path and add it to the staged uploads. I/O failures are
/// reported per file; the rest still stage.
fn stage_documents(staged: &mut Vec<UploadedDocument>, paths: &[PathBuf]) {
    for path in paths {
        match UploadedDocument::from_path(path) {
            Ok(doc) => {
                println!("Staged {} ({} bytes)", doc.name, doc.bytes.len());
                staged.push(doc);
            }
            Err(e) => println!("Could not read {}: {e}", path.display()),
        }
    }
}

/// Extract every staged document and replace the session's document text.
///
/// Staged uploads are kept, so a later `:load` + `:process` reprocesses the
/// whole set — the document context is always rebuilt from scratch, never
/// merged.
fn process_staged(session: &mut ChatSession, staged: &[UploadedDocument]) {
    let outcome = process_documents(staged);
    report_outcome(&outcome);
    session.replace_document_text(outcome.combined_text);
}

fn report_outcome(outcome: &BatchOutcome) {
    for (name, error) in outcome.failures() {
        println!("Skipped {name}: {error}");
    }
    println!(
        "Processed {}/{} documents.",
        outcome.extracted_count(),
        outcome.reports.len()
    );
}

fn render_history(session: &ChatSession) {
    if session.history().is_empty() {
        println!("No conversation yet.");
        return;
    }
    for exchange in session.history() {
        println!("You: {}", exchange.user_text);
        println!("Assistant: {}", exchange.assistant_text);
        println!();
    }
}
