use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use colored::{ColoredString, Colorize};
use spotdiff_sdk::{
    tokenize_document, Document, ReviewSession, RevealOutcome, SessionConfig, Side, Token,
};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SessionConfig::default(),
    };
    match cli.command {
        Command::Tokens(args) => cmd_tokens(args, cli.format),
        Command::Diff(args) => cmd_diff(args, cli.format, config),
        Command::Review(args) => cmd_review(args, cli.format, config),
        Command::Config => cmd_config(&config),
    }
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn open_session(config: SessionConfig, a: &Path, b: &Path) -> anyhow::Result<ReviewSession> {
    let text_a = read_text(a)?;
    let text_b = read_text(b)?;
    Ok(ReviewSession::new(config, &text_a, &text_b)?)
}

fn cmd_tokens(args: TokensArgs, format: OutputFormat) -> anyhow::Result<()> {
    let doc = Document::from_text(&read_text(&args.path)?);
    let matrix = tokenize_document(&doc);

    let rows: Vec<usize> = match args.line {
        Some(0) => anyhow::bail!("line numbers start at 1"),
        Some(n) if n > matrix.len() => {
            anyhow::bail!("line {n} is past the end ({} lines)", matrix.len())
        }
        Some(n) => vec![n - 1],
        None => (0..matrix.len()).collect(),
    };

    if format == OutputFormat::Json {
        let lines: Vec<_> = rows
            .iter()
            .filter_map(|r| {
                let tokens = matrix.line(*r)?;
                Some(serde_json::json!({ "line": r + 1, "tokens": tokens }))
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    for r in rows {
        let Some(tokens) = matrix.line(r) else { continue };
        let header = format!("line {}", r + 1);
        println!("{} ({} tokens)", header.yellow().bold(), tokens.len());
        for token in tokens {
            println!("  {:<10} {:?}", token.kind.to_string().cyan(), token.text);
        }
    }
    if args.line.is_none() {
        println!(
            "\n{} lines, {} tokens",
            matrix.len().to_string().bold(),
            matrix.token_count().to_string().bold()
        );
    }
    Ok(())
}

fn cmd_diff(args: DiffArgs, format: OutputFormat, config: SessionConfig) -> anyhow::Result<()> {
    let mut session = open_session(config, &args.a, &args.b)?;
    let differing: Vec<usize> = session.comparison().report.line_indices().collect();
    for line in &differing {
        session.reveal(*line);
    }

    let cmp = session.comparison();
    if format == OutputFormat::Json {
        let out = serde_json::json!({
            "a": cmp.id_a.to_hex(),
            "b": cmp.id_b.to_hex(),
            "total_diffs": cmp.total_diffs(),
            "lines": cmp.report.lines,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let rows: Vec<usize> = if args.all_lines {
        (0..cmp.tokens_a.len().max(cmp.tokens_b.len())).collect()
    } else {
        differing
    };

    for r in rows {
        if !cmp.report.contains(r) {
            let text = session.document(Side::A).line(r).unwrap_or_default();
            println!("{:>5}   {}", r + 1, text.dimmed());
            continue;
        }
        println!(
            "{:>5} {} {}",
            (r + 1).to_string().yellow(),
            "A".red().bold(),
            render(&session, Side::A, r)
        );
        println!("{:>5} {} {}", "", "B".green().bold(), render(&session, Side::B, r));
    }

    let total = cmp.total_diffs();
    if total == 0 {
        println!("{} Documents are identical.", "✓".green().bold());
    } else {
        println!("\n{} differing line(s)", total.to_string().bold());
    }
    Ok(())
}

fn render(session: &ReviewSession, side: Side, line: usize) -> String {
    let Some(tokens) = session.highlight(side, line) else {
        return "(no line)".dimmed().to_string();
    };
    tokens
        .into_iter()
        .map(|(token, on)| paint(token, side, on).to_string())
        .collect()
}

fn paint(token: &Token, side: Side, on: bool) -> ColoredString {
    match (on, side) {
        (false, _) => token.as_str().normal(),
        (true, Side::A) => token.as_str().red().bold().underline(),
        (true, Side::B) => token.as_str().green().bold().underline(),
    }
}

fn cmd_review(args: ReviewArgs, format: OutputFormat, config: SessionConfig) -> anyhow::Result<()> {
    let mut session = open_session(config, &args.a, &args.b)?;

    for &marked in &args.found {
        let Some(line) = marked.checked_sub(1) else {
            anyhow::bail!("line numbers start at 1");
        };
        match session.reveal(line) {
            RevealOutcome::Revealed => {}
            RevealOutcome::AlreadyRevealed => tracing::debug!(line = marked, "line marked twice"),
            RevealOutcome::NotADifference => {
                if format == OutputFormat::Text {
                    println!("  {} line {} has no difference", "✗".red(), marked);
                }
            }
        }
    }

    let summary = session.summary_at(Instant::now());
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Found: {}/{}", summary.found.to_string().bold(), summary.total);
    if summary.all_found() {
        println!("{} Nothing missed.", "✓".green().bold());
    } else {
        println!("Missed:");
        for missed in &summary.missed {
            println!("  {} {}", format!("line {}:", missed.line + 1).yellow(), missed.text);
        }
    }
    Ok(())
}

fn cmd_config(config: &SessionConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
