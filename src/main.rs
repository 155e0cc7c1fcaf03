use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use lexiscreen::config::load_profile;
use lexiscreen::error::Result;
use lexiscreen::input::read_batch;
use lexiscreen::phonetic::{CaverphoneVersion, phonetic_codes_versioned};
use lexiscreen::report::json::{
    render_batch_json, render_codes_json, render_dictation_json, render_json,
};
use lexiscreen::report::text::{
    render_analysis_text, render_batch_text, render_codes_text, render_dictation_text,
    render_pronunciation_text,
};
use lexiscreen::similarity::{score_dictation, score_pronunciation_with};
use lexiscreen::{CollaboratorReport, analyze_text, summarize};

/// Deterministic text-quality screening for dyslexia indicators
#[derive(Parser, Debug)]
#[command(name = "lexiscreen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one text and run the decision tree
    Analyze {
        /// Text as extracted from the handwriting image
        #[arg(long)]
        text: String,
        /// Spelling-corrected text; defaults to the extracted text
        #[arg(long)]
        corrected: Option<String>,
        /// Grammar-corrected text; defaults to the spelling-corrected text
        #[arg(long)]
        grammar: Option<String>,
        /// Number of tokens the spell checker flagged
        #[arg(long)]
        flagged: Option<u32>,
        /// Scoring profile (JSON)
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Score every sample of a JSONL file and summarize
    Batch {
        /// One {"text", "corrected", "grammar", "flagged"} object per line
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the four phonetic codes of each word
    Codes {
        #[arg(required = true)]
        words: Vec<String>,
        #[arg(long, value_enum, default_value_t = CaverphoneArg::Original)]
        caverphone: CaverphoneArg,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compare an attempted IPA transcription with the original
    Pronunciation {
        #[arg(long)]
        original: String,
        #[arg(long)]
        attempted: String,
        /// Profile supplying the feedback tier cut-offs
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Score typed words against expected words
    Dictation {
        /// Comma-separated expected words
        #[arg(long, value_delimiter = ',', required = true)]
        expected: Vec<String>,
        /// Comma-separated typed words
        #[arg(long, value_delimiter = ',')]
        typed: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CaverphoneArg {
    Original,
    Revised,
}

impl From<CaverphoneArg> for CaverphoneVersion {
    fn from(value: CaverphoneArg) -> Self {
        match value {
            CaverphoneArg::Original => CaverphoneVersion::Original,
            CaverphoneArg::Revised => CaverphoneVersion::Revised,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    lexiscreen::logging::init(cli.verbose);
    match execute(cli.command) {
        Ok(out) => print!("{out}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn execute(command: Command) -> Result<String> {
    match command {
        Command::Analyze {
            text,
            corrected,
            grammar,
            flagged,
            profile,
            format,
        } => {
            let profile = load_profile(profile.as_deref())?;
            let report = CollaboratorReport {
                corrected_text: corrected,
                grammar_corrected_text: grammar,
                flagged_token_count: flagged,
            };
            let analysis = analyze_text(&text, &report, &profile);
            match format {
                OutputFormat::Text => Ok(render_analysis_text(&analysis)),
                OutputFormat::Json => with_newline(render_json(&analysis)),
            }
        }
        Command::Batch {
            input,
            profile,
            format,
        } => {
            let profile = load_profile(profile.as_deref())?;
            let records = read_batch(&input)?;
            let analyses = records
                .iter()
                .map(|r| analyze_text(&r.text, &r.collaborator_report(), &profile))
                .collect::<Vec<_>>();
            let summary = summarize(&analyses);
            tracing::info!(
                total = summary.total,
                indicative = summary.indicative,
                "batch scored"
            );
            match format {
                OutputFormat::Text => Ok(render_batch_text(&analyses, &summary)),
                OutputFormat::Json => with_newline(render_batch_json(&analyses, &summary)),
            }
        }
        Command::Codes {
            words,
            caverphone,
            format,
        } => {
            let rows = words
                .into_iter()
                .map(|w| {
                    let codes = phonetic_codes_versioned(&w, caverphone.into());
                    (w, codes)
                })
                .collect::<Vec<_>>();
            match format {
                OutputFormat::Text => Ok(render_codes_text(&rows)),
                OutputFormat::Json => with_newline(render_codes_json(&rows)),
            }
        }
        Command::Pronunciation {
            original,
            attempted,
            profile,
            format,
        } => {
            let profile = load_profile(profile.as_deref())?;
            let score =
                score_pronunciation_with(&original, &attempted, &profile.pronunciation_tiers);
            match format {
                OutputFormat::Text => Ok(render_pronunciation_text(&score)),
                OutputFormat::Json => with_newline(render_json(&score)),
            }
        }
        Command::Dictation {
            expected,
            typed,
            format,
        } => {
            let expected = split_words(expected);
            let typed = split_words(typed);
            let (words, summary) = score_dictation(&expected, &typed);
            match format {
                OutputFormat::Text => Ok(render_dictation_text(&words, &summary)),
                OutputFormat::Json => with_newline(render_dictation_json(&words, &summary)),
            }
        }
    }
}

fn split_words(raw: Vec<String>) -> Vec<String> {
    raw.into_iter().map(|w| w.trim().to_string()).collect()
}

fn with_newline(rendered: Result<String>) -> Result<String> {
    rendered.map(|mut s| {
        s.push('\n');
        s
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
