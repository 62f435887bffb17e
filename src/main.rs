use clap::Parser;
use mmquery::translator::Translator;
use mmquery_core::config::{Config, Provider};

#[derive(Parser)]
#[command(
    name = "mmquery",
    about = "Translate natural-language email searches into MailMate queries"
)]
struct Cli {
    /// The natural-language query to translate (words are joined by spaces).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    query: Vec<String>,

    /// Prompt for queries until `quit`.
    #[arg(short, long)]
    interactive: bool,

    /// Never call a model; use the built-in rules only.
    #[arg(long)]
    offline: bool,

    /// Override the configured model name.
    #[arg(long)]
    model: Option<String>,

    /// Override the model call timeout.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Write debug logs to /tmp/mmquery-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/mmquery-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("mmquery debug log started, tail -f /tmp/mmquery-debug.log");
    }

    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config: load failed, using defaults");
        Config::defaults()
    });
    if cli.offline {
        config.model.provider = Provider::None;
    }
    if let Some(model) = cli.model {
        config.model.name = model;
    }
    if let Some(secs) = cli.timeout {
        config.model.timeout_secs = secs;
    }

    let translator = Translator::from_config(&config.model);

    if cli.interactive {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        return mmquery::repl::run(&translator, stdin, tokio::io::stdout()).await;
    }

    let query = cli.query.join(" ");
    let translation = translator.translate(&query).await;
    tracing::info!(%query, source = %translation.source, output = %translation.query, "translated");
    println!("{}", translation.query);
    Ok(())
}
