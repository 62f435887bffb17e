//! Interactive mode — read one query per line and print each translation.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::translator::Translator;

/// A parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// `quit`, `exit`, or `q` in any case.
    Quit,
    /// Whitespace only; prompt again.
    Blank,
    Query(String),
}

impl ReplInput {
    pub fn parse(line: &str) -> ReplInput {
        let line = line.trim();
        if line.is_empty() {
            return ReplInput::Blank;
        }
        match line.to_lowercase().as_str() {
            "quit" | "exit" | "q" => ReplInput::Quit,
            _ => ReplInput::Query(line.to_string()),
        }
    }
}

/// Run the prompt loop until `quit` or end of input.
pub async fn run<R, W>(translator: &Translator, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(b"MailMate Query Translator (type 'quit' to exit)\n")
        .await?;
    writer.write_all(format!("{}\n", "-".repeat(50)).as_bytes()).await?;

    let mut lines = reader.lines();
    loop {
        writer.write_all(b"\nQuery: ").await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            writer.write_all(b"\n").await?;
            break;
        };

        match ReplInput::parse(&line) {
            ReplInput::Quit => break,
            ReplInput::Blank => continue,
            ReplInput::Query(query) => {
                let translation = translator.translate(&query).await;
                tracing::debug!(%query, source = %translation.source, "repl: translated");
                writer
                    .write_all(format!("Result: {}\n", translation.query).as_bytes())
                    .await?;
            }
        }
    }

    writer.flush().await?;
    Ok(())
}
