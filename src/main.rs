//! 敏感词检测命令行工具
//!
//! 加载词表后逐行读取标准输入（或直接检测命令行给出的文本），
//! 输出命中的词条及其分类，或输出替换后的文本。
//!
//! 运行命令：
//! cargo run --features cli -- --words words.txt "待检测文本"

use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sensitive_filter::{DEFAULT_MASK_CHAR, DEFAULT_NOISE, Filter, FilterConfig};
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[clap(name = "sensitive-filter", version, about = "Detects sensitive words in text")]
struct Args {
    /// Vocabulary file: .json (Word array), .mp (snapshot) or a plain text list.
    #[clap(short = 'w', long)]
    words: PathBuf,

    /// Noise characters skipped inside a match. Pass an empty string to disable.
    #[clap(short = 'n', long, default_value = DEFAULT_NOISE)]
    noise: String,

    /// Mask character used with --replace.
    #[clap(short = 'm', long, default_value_t = DEFAULT_MASK_CHAR)]
    mask: char,

    /// Prints the text with replace-flagged words masked instead of the matches.
    #[clap(short = 'r', long)]
    replace: bool,

    /// Prints matches as JSON, one array per input line.
    #[clap(long)]
    json: bool,

    /// Text to scan. Reads stdin line by line when omitted.
    text: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = FilterConfig::from_path(&args.words);
    config.noise = args.noise.clone();
    config.mask_char = args.mask;

    let filter = Filter::with_config(config)
        .await
        .with_context(|| format!("failed to load vocabulary from {}", args.words.display()))?;

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());

    match &args.text {
        Some(text) => scan_line(&filter, &args, text, &mut out)?,
        None => {
            for line in std::io::stdin().lock().lines() {
                let line = line.context("failed to read stdin")?;
                scan_line(&filter, &args, &line, &mut out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn scan_line(filter: &Filter, args: &Args, line: &str, out: &mut impl Write) -> anyhow::Result<()> {
    if args.replace {
        writeln!(out, "{}", filter.replace_default_noise(line))?;
        return Ok(());
    }

    let found = filter.find_default_noise(line);
    if args.json {
        serde_json::to_writer(&mut *out, &found)?;
        out.write_all(b"\n")?;
    } else {
        for word in &found {
            writeln!(out, "{}\t{}", word.text, word.flags())?;
        }
        out.write_all(b"EOS\n")?;
    }
    Ok(())
}

