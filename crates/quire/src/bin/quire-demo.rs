//! Quire demo - page through a text file in the terminal.
//!
//! The file's lines are grouped into pages and shown through the console
//! transport. Each line typed on stdin is either a navigation command
//! (`first`, `back`, `next`, `last`, `jump`, `info`, `stop`), a navigation
//! symbol, or a chat reply used to answer a jump prompt.

use clap::Parser;
use quire::{
    ActorId, AllowAll, ChannelId, ConsoleTransport, InputEvent, Intent, PaginatorBuilder,
    QuireConfig, ReplyEvent, Session, SessionContext, SessionDispatcher, Symbol, Transition,
    init_observability_with_config,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const CHANNEL: ChannelId = ChannelId(1);
const USER: ActorId = ActorId(1);

/// Command-line arguments for the demo.
#[derive(Parser, Debug)]
#[command(name = "quire-demo")]
#[command(about = "Page through a text file with Quire's navigation controls")]
#[command(version)]
struct Args {
    /// Text file to page through
    file: PathBuf,

    /// Lines shown on each page
    #[arg(short = 'n', long, default_value_t = 10)]
    lines_per_page: usize,

    /// Configuration file (defaults to the layered quire.toml lookup)
    #[arg(short, long, env = "QUIRE_CONFIG")]
    config: Option<PathBuf>,

    /// Emit JSON logs
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => QuireConfig::from_file(path)?,
        None => QuireConfig::load()?,
    };
    let logging = config
        .observability
        .observability("quire-demo")
        .with_json_logs(args.json_logs || config.observability.json_logs);
    init_observability_with_config(logging)?;

    let text = tokio::fs::read_to_string(&args.file).await?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let title = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "quire".to_string());
    info!(file = %args.file.display(), lines = lines.len(), "Loaded file");

    let options = config.paginator.display_options();
    let paginator = PaginatorBuilder::new()
        .with_pages(lines)
        .split_pages(args.lines_per_page)
        .with_title(title)
        .with_color(config.paginator.color())
        .with_options(options.clone())
        .build()?;

    let transport = Arc::new(ConsoleTransport::new());
    let dispatcher = SessionDispatcher::new(transport.clone(), Arc::new(AllowAll));
    let handle = dispatcher
        .display(Session::new(paginator, SessionContext::new(CHANNEL, USER)))
        .await?;

    println!("Commands: first, back, next, last, jump, info, stop. Anything else is a chat reply.");

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    while dispatcher.is_registered(handle) {
        let Some(line) = stdin.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let symbol = match input.parse::<Intent>() {
            Ok(intent) => Some(options.symbols().symbol_for(intent).clone()),
            Err(_) => {
                let symbol = Symbol::new(input);
                options.symbols().intent_for(&symbol).map(|_| symbol)
            }
        };

        match symbol {
            Some(symbol) => {
                let transition = dispatcher
                    .dispatch(&InputEvent::new(handle, symbol, USER))
                    .await;
                debug!(?transition, "Applied command");
                if transition == Transition::JumpRequested {
                    println!("Type a page number.");
                }
            }
            None => {
                let message = transport.receive(CHANNEL, input);
                if !dispatcher.dispatch_reply(&ReplyEvent::new(message, USER, input)) {
                    println!("Unknown command: {}", input);
                }
            }
        }
        tokio::task::yield_now().await;
    }

    dispatcher.shutdown().await;
    Ok(())
}
