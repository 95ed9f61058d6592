//! CLI entry: answer one question within a session.
//!
//! Run: `responder --session s1 "2+2?"`
//! Requires `OPENAI_API_KEY`; see `Settings::from_env` for the rest.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use responder::{Responder, Settings};

#[derive(Debug, Parser)]
#[command(name = "responder", about = "Conversational router CLI")]
struct Args {
    /// Session id scoping the conversation history.
    #[arg(long, default_value = "default")]
    session: String,

    /// The question to answer.
    #[arg(required = true)]
    question: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "responder=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let question = args.question.join(" ");

    let settings = Settings::from_env()?;
    let responder = Responder::from_settings(&settings)?;

    let answer = responder.run(&args.session, &question).await;
    println!("{answer}");
    Ok(())
}
