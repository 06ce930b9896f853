use dotenvy::dotenv;
use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};
use studypal_app::{render, ActionOutcome, StudySession};
use studypal_sdk::{
    http::{HttpStudyBackend, HttpStudyBackendOptions},
    ArtifactKind,
};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Commands:
  file <path>   choose the document to upload
  upload        send the chosen document to the backend
  summary       generate a summary (needs an uploaded doc)
  mcqs          generate multiple-choice questions (needs an uploaded doc)
  flashcards    generate flashcards (needs an uploaded doc)
  show          redraw the page
  help          show this message
  quit          exit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let backend = Arc::new(HttpStudyBackend::new(HttpStudyBackendOptions {
        base_url: env::var("STUDYPAL_API_URL").ok(),
    }));
    let session = StudySession::new(backend);

    println!("{}", render(&session.state().await));
    println!("{HELP}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let outcome = match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "show" => {
                println!("{}", render(&session.state().await));
                continue;
            }
            "file" => {
                if rest.is_empty() {
                    println!("usage: file <path>");
                    continue;
                }
                session.select_file(PathBuf::from(rest)).await;
                println!("{}", render(&session.state().await));
                continue;
            }
            "upload" => session.upload().await,
            "summary" => session.generate(ArtifactKind::Summary).await,
            "mcqs" => session.generate(ArtifactKind::Mcqs).await,
            "flashcards" => session.generate(ArtifactKind::Flashcards).await,
            other => {
                println!("unknown command: {other} (try `help`)");
                continue;
            }
        };

        match outcome {
            Ok(ActionOutcome::Notice(message)) => println!("[!] {message}"),
            Ok(ActionOutcome::Uploaded(receipt)) => {
                println!("Uploaded: {}", receipt.doc_id);
                if let Some(preview) = &receipt.preview {
                    println!("Preview: {preview}");
                }
                println!("{}", render(&session.state().await));
            }
            Ok(ActionOutcome::Generated(_)) => println!("{}", render(&session.state().await)),
            // The page has no error surface; report like a console and
            // keep the loop alive.
            Err(error) => eprintln!("error: {error}"),
        }
    }

    Ok(())
}
