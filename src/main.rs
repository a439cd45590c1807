//! Summatone CLI - summaries and tone for transcripts
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use anyhow::{bail, Context};
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::{ColoredString, Colorize};
use std::io::Read;
use std::path::PathBuf;
use summatone::tone::LexiconStrategy;
use summatone::{languages, Analysis, Config, Emotion, Summarizer, SummaryKind, ToneSignal};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "summatone")]
#[command(author, version, long_about = None)]
#[command(about = "Summaries and emotional tone for transcripts")]
struct Cli {
    /// Path to config file (default: summatone.toml in cwd or ~/.config/summatone)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// External sentiment signal, when one is available
#[derive(Args, Debug)]
struct SignalArgs {
    /// Sentiment polarity, -1 to 1
    #[arg(long, requires = "subjectivity", allow_hyphen_values = true)]
    polarity: Option<f64>,
    /// Sentiment subjectivity, 0 to 1
    #[arg(long, requires = "polarity")]
    subjectivity: Option<f64>,
}

impl SignalArgs {
    fn signal(&self) -> Option<ToneSignal> {
        match (self.polarity, self.subjectivity) {
            (Some(p), Some(s)) => Some(ToneSignal::new(p, s)),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise text from a file or stdin
    Summarise {
        /// File to read (stdin when omitted)
        file: Option<PathBuf>,
        /// Print the detailed summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Detect the emotional tone of text
    Tone {
        /// File to read (stdin when omitted)
        file: Option<PathBuf>,
        #[command(flatten)]
        signal: SignalArgs,
        /// Show lexicon tallies
        #[arg(long)]
        tally: bool,
    },
    /// Summarise and detect tone in one pass
    Analyse {
        /// File to read (stdin when omitted)
        file: Option<PathBuf>,
        #[command(flatten)]
        signal: SignalArgs,
        /// Source language code
        #[arg(long)]
        src: Option<String>,
        /// Destination language code
        #[arg(long)]
        dest: Option<String>,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// List supported languages
    Languages,
    /// Print the JSON schema of the analysis output
    Schema,
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load()?,
    };
    init_logging(cli.verbose, &config);

    match cli.command {
        Commands::Summarise { file, json } => {
            let text = read_input(file.as_ref())?;
            let summarizer = Summarizer::with_config(config.summarizer_config());
            let summary = summarizer.summarize(&text);
            info!(kind = ?summary.kind, "summarised input");

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                if summary.kind != SummaryKind::Extracted {
                    eprintln!("{}", "Nothing to extract; showing input as-is.".dimmed());
                }
                println!("{}", summary.text);
            }
        }
        Commands::Tone { file, signal, tally } => {
            let text = read_input(file.as_ref())?;
            let emotion = summatone::detect_tone(&text, signal.signal());
            println!("{}", paint(emotion));

            if tally {
                let tally = LexiconStrategy.tally(&text);
                println!("\n{}", "Lexicon tally:".bold());
                println!("  happy:    {}", tally.happy);
                println!("  sad:      {}", tally.sad);
                println!("  angry:    {}", tally.angry);
                println!("  worried:  {}", tally.worried);
                println!("  confused: {}", tally.confused);
                println!("  ! count:  {}", tally.exclamations);
                println!("  ? count:  {}", tally.questions);
            }
        }
        Commands::Analyse {
            file,
            signal,
            src,
            dest,
            json,
        } => {
            let text = read_input(file.as_ref())?;
            let src = src.unwrap_or_else(|| config.languages.source.clone());
            let dest = dest.unwrap_or_else(|| config.languages.target.clone());
            let summarizer = Summarizer::with_config(config.summarizer_config());
            let analysis = Analysis::with_summarizer(&summarizer, &text, signal.signal())
                .with_languages(&src, &dest)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                let (src_name, dest_name) = analysis.language_names();
                println!(
                    "=== Analysis ({}) ===\n",
                    analysis.timestamp.format("%Y-%m-%d %H:%M")
                );
                println!("🌐 Languages: {} → {}", src_name, dest_name);
                println!("🎭 Tone: {}\n", paint(analysis.tone));
                println!("📝 Summary:");
                println!("  {}", analysis.summary.text);
            }
        }
        Commands::Languages => {
            println!("Available languages:\n");
            for language in languages::all() {
                println!("  {:<6} {}", language.code.bold(), language.name);
            }
        }
        Commands::Schema => {
            let schema = schemars::schema_for!(Analysis);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "summatone",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

/// Install the tracing subscriber; -v flags win over the configured level
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::try_new(&config.logging.level).unwrap_or_else(|e| {
            eprintln!(
                "Warning: invalid log level '{}' ({}), using 'warn'",
                config.logging.level, e
            );
            EnvFilter::new("warn")
        }),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Read text from a file, or from stdin when it is piped
fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            if atty::is(atty::Stream::Stdin) {
                bail!("No text provided: pass a file or pipe text on stdin");
            }
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    if text.trim().is_empty() {
        bail!("No text provided");
    }
    Ok(text)
}

fn paint(emotion: Emotion) -> ColoredString {
    let label = emotion.as_str();
    match emotion {
        Emotion::Happy | Emotion::Excited => label.green().bold(),
        Emotion::Sad => label.blue().bold(),
        Emotion::Angry => label.red().bold(),
        Emotion::Worried | Emotion::Confused => label.yellow().bold(),
        Emotion::Neutral => label.normal(),
    }
}
