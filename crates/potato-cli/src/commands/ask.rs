use std::io::Write;

use potato_ask::{AskPipeline, IntentNormalizer, OllamaPipeline};
use potato_core::intent::{self, Intent};
use potato_core::responses::AskResponse;
use potato_db::retrieval::TrackingReader;
use potato_llm::TextGenerator;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::cli::root_commands::AskArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render};

/// Handle `potato ask`.
///
/// Without question words (or with `--interactive`) questions are read from
/// stdin until EOF or `exit`, all through one pipeline so repeated questions
/// over unchanged data are answered from the explanation cache.
pub async fn handle(args: &AskArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pipeline = OllamaPipeline::from_config(&ctx.config, &ctx.db)?;

    if args.interactive || args.question.is_empty() {
        if !flags.quiet {
            eprintln!("{}", session_help());
        }
        let stdin = BufReader::new(tokio::io::stdin());
        let answered = session(&pipeline, stdin, &mut std::io::stdout(), flags.format).await?;
        tracing::debug!(
            answered,
            cached = pipeline.renderer().cache().entry_count(),
            "ask session ended"
        );
        return Ok(());
    }

    let response = pipeline.ask(&args.question.join(" ")).await;
    if flags.format == OutputFormat::Table {
        println!("{}", render_answer(&response));
        return Ok(());
    }
    output(&response, flags.format)
}

/// Answer each non-blank line of `input`, writing one response per question.
/// Returns the number of questions answered.
async fn session<N, R, G, I, W>(
    pipeline: &AskPipeline<N, R, G>,
    input: I,
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<usize>
where
    N: IntentNormalizer,
    R: TrackingReader,
    G: TextGenerator,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut answered = 0;
    while let Some(line) = lines.next_line().await? {
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if matches!(question, "exit" | "quit") {
            break;
        }

        let response = pipeline.ask(question).await;
        let rendered = if format == OutputFormat::Table {
            render_answer(&response)
        } else {
            render(&response, format)?
        };
        writeln!(out, "{rendered}")?;
        out.flush()?;
        answered += 1;
    }
    Ok(answered)
}

fn session_help() -> String {
    let topics: String = Intent::ALL
        .iter()
        .map(|intent| format!("  - {}\n", intent.description()))
        .collect();
    format!("Ask about your QA data, one question per line (exit to quit):\n{topics}")
}

/// Table output shows the answer as prose under its intent label.
fn render_answer(response: &AskResponse) -> String {
    format!("[{}]\n{}", intent::label(response.intent), response.answer)
}
