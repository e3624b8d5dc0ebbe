use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("missing expected field `{0}`")]
    MissingField(&'static str),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("terminal io failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "adghal-cli", about = "Terminal chat client for the Adghal AI environmental assistant")]
struct Cli {
    #[arg(long, env = "ADGHAL_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive chat. `/reset` starts over, `/quit` exits.
    Chat,
    /// Send a single message and print the reply.
    Ask { message: String },
    /// Print the example prompts.
    Suggestions,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = ChatClient::new(&cli.base_url)?;

    match cli.command {
        Command::Chat => run_chat(&client).await,
        Command::Ask { message } => {
            let response = client.send(&message, None).await?;
            print_response(&response)
        }
        Command::Suggestions => run_suggestions(&client).await,
    }
}

// =============================================================================
// HTTP
// =============================================================================

struct ChatClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChatClient {
    fn new(base_url: &str) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// `POST /api/chat`. `history` of `None` lets the server start a fresh
    /// conversation.
    async fn send(&self, message: &str, history: Option<&Value>) -> Result<Value, CliError> {
        let mut body = json!({ "message": message });
        if let Some(history) = history {
            body["history"] = history.clone();
        }
        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await?;
        into_json(response).await
    }

    async fn suggestions(&self) -> Result<Value, CliError> {
        let response = self
            .http
            .get(format!("{}/api/chat/suggestions", self.base_url))
            .send()
            .await?;
        into_json(response).await
    }
}

async fn into_json(response: reqwest::Response) -> Result<Value, CliError> {
    let status = response.status();
    let value = response.json::<Value>().await.unwrap_or(Value::Null);
    if !status.is_success() {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .map_or_else(|| value.to_string(), str::to_owned);
        return Err(CliError::ServerError { status: status.as_u16(), message });
    }
    Ok(value)
}

// =============================================================================
// COMMANDS
// =============================================================================

async fn run_chat(client: &ChatClient) -> Result<(), CliError> {
    let mut history: Option<Value> = None;
    println!("Adghal AI. Type /reset to start over, /quit to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        match line.trim() {
            "" => {}
            "/quit" => break,
            "/reset" => {
                history = None;
                println!("(conversation reset)");
            }
            message => match client.send(message, history.as_ref()).await {
                Ok(response) => {
                    print_response(&response)?;
                    history = Some(response.get("history").cloned().ok_or(CliError::MissingField("history"))?);
                }
                // Keep the session alive; the same history is resent next time.
                Err(e) => eprintln!("error: {e}"),
            },
        }
    }
    Ok(())
}

async fn run_suggestions(client: &ChatClient) -> Result<(), CliError> {
    let value = client.suggestions().await?;
    let prompts = value.as_array().ok_or(CliError::MissingField("suggestions"))?;
    for prompt in prompts.iter().filter_map(Value::as_str) {
        println!("- {prompt}");
    }
    Ok(())
}

// =============================================================================
// RENDERING
// =============================================================================

fn print_response(response: &Value) -> Result<(), CliError> {
    println!("{}", render_reply(response)?);
    if let Some(notice) = response.get("notice").and_then(Value::as_str) {
        eprintln!("note: {notice}");
    }
    Ok(())
}

/// Reply text with its provenance tag, followed by sources for search replies.
fn render_reply(response: &Value) -> Result<String, CliError> {
    let reply = response.get("reply").ok_or(CliError::MissingField("reply"))?;
    let text = reply
        .get("text")
        .and_then(Value::as_str)
        .ok_or(CliError::MissingField("reply.text"))?;

    let mut rendered = match reply.get("provenance").and_then(Value::as_str) {
        Some(tag @ ("ai" | "search")) => format!("[{tag}] {text}"),
        _ => text.to_owned(),
    };

    let sources = response
        .get("search_results")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|result| {
            let url = result.get("url").and_then(Value::as_str).filter(|u| !u.is_empty())?;
            let title = result.get("title").and_then(Value::as_str).unwrap_or(url);
            Some(format!("  - {title}: {url}"))
        })
        .collect::<Vec<_>>();
    if !sources.is_empty() {
        rendered.push_str("\nSources:\n");
        rendered.push_str(&sources.join("\n"));
    }
    Ok(rendered)
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
