// VigCrack CLI Tool
// Command-line dictionary attack against Vigenère-encrypted text

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use vigcrack::{CrackSearch, Evaluation, ReportSink, SearchStatus, SuccessPolicy};

/// Crack a Vigenère cipher by trying every key in a wordlist
///
/// Success is declared either when a known string appears in the decoded
/// output (-k) or when a statistical language detector scores the output
/// above a threshold for the target language (-l/-m).
#[derive(Parser, Debug)]
#[command(name = "crack")]
#[command(version)]
#[command(about = "Dictionary attack against Vigenère-encrypted text", long_about = None)]
struct Args {
    /// File containing the encoded cipher text
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Encoded cipher text given directly on the command line
    #[arg(short, long, value_name = "TEXT")]
    text: Option<String>,

    /// Wordlist with one candidate key per line
    #[arg(short, long, value_name = "FILE")]
    wordlist: PathBuf,

    /// Known string expected to appear in the decoded output
    #[arg(short, long, value_name = "STRING")]
    known: Option<String>,

    /// Two-letter language code used when no known string is given
    #[arg(short, long, value_name = "CODE", default_value = "en")]
    language: String,

    /// Language match threshold, strictly between 0 and 1
    #[arg(short = 'm', long, value_name = "PROB", default_value_t = vigcrack::DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Verbose output; pass twice to print every decode attempt
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // File input wins when both are given.
    let ciphertext = match (&args.file, &args.text) {
        (Some(path), _) => fs::read_to_string(path)
            .map_err(|e| format!("could not read cipher text file '{}': {}", path.display(), e))?,
        (None, Some(text)) => text.clone(),
        (None, None) => {
            return Err("no cipher text: use --file or --text (see --help)".into());
        }
    };

    let policy = SuccessPolicy::from_options(args.known.as_deref(), &args.language, args.threshold)?;
    if args.verbose > 0 {
        match &policy {
            SuccessPolicy::KnownString(needle) => {
                println!("Matching on known string '{}'", needle);
            }
            SuccessPolicy::LanguageMatch { lang, threshold } => {
                println!("Matching on language '{}' above {}", lang, threshold);
            }
        }
    }

    let search = CrackSearch::new(policy)?;

    let token = search.cancel_token();
    ctrlc::set_handler(move || token.cancel())?;

    let words: Vec<String> = fs::read_to_string(&args.wordlist)
        .map_err(|e| {
            format!(
                "could not read wordlist '{}': {}",
                args.wordlist.display(),
                e
            )
        })?
        .lines()
        .map(str::to_string)
        .collect();

    println!("Searching {} keys for potential matches...", words.len());
    println!("Press ctrl+C to stop.\n");

    let mut sink = ConsoleSink {
        trace: args.verbose >= 2,
    };
    let summary = search.run(&ciphertext, &words, &mut sink)?;

    match summary.status {
        SearchStatus::Interrupted => {
            println!(
                "\nInterrupted after {} of {} keys.",
                summary.keys_tried,
                words.len()
            );
        }
        SearchStatus::Completed => {
            if summary.matches_found == 0 {
                println!("No matches across {} keys.", summary.keys_tried);
            } else if args.verbose > 0 {
                println!(
                    "Done: {} match(es) across {} keys.",
                    summary.matches_found, summary.keys_tried
                );
            }
        }
    }

    Ok(())
}

/// Prints matches (and, at -vv, every attempt) to stdout as they happen
struct ConsoleSink {
    trace: bool,
}

impl ReportSink for ConsoleSink {
    fn on_match(&mut self, eval: &Evaluation) {
        println!("Found potential key: '{}'", eval.key);
        if let Some(score) = eval.score() {
            println!("Language match score: {}", score);
        }
        println!("{}\n", eval.decoded);
    }

    fn on_attempt(&mut self, eval: &Evaluation) {
        if self.trace {
            println!("[debug] trying key '{}':", eval.key);
            println!("[debug] {}", eval.decoded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_inline_text() {
        let args = Args::parse_from([
            "crack",
            "-t",
            "Ifx xivri",
            "-w",
            "words.txt",
            "-k",
            "lazy dog.",
        ]);

        assert_eq!(args.text.as_deref(), Some("Ifx xivri"));
        assert_eq!(args.known.as_deref(), Some("lazy dog."));
        assert_eq!(args.language, "en");
        assert_eq!(args.threshold, vigcrack::DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_args_verbose_count() {
        let args = Args::parse_from(["crack", "-w", "words.txt", "-t", "x", "-vv"]);
        assert_eq!(args.verbose, 2);
    }
}
