//! nianshu — rewrite Arabic numerals in Chinese text into spoken form.
//!
//! Thin wrapper around nianshu-core for shell use: pass text as
//! arguments, or pipe lines on stdin.

use std::io::{self, BufRead};

use clap::Parser;
use nianshu_core::rewrite::rewrite;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nianshu",
    about = "Verbalize Arabic numerals in Chinese text for TTS"
)]
struct Args {
    /// Text to verbalize; reads stdin line-by-line when omitted
    text: Vec<String>,

    /// Emit JSON with per-span replacement details
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if args.text.is_empty() {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            process(&line, args.json);
        }
    } else {
        process(&args.text.join(" "), args.json);
    }
}

fn process(line: &str, json: bool) {
    match rewrite(line) {
        Ok(outcome) => {
            debug!(changes = outcome.changes.len(), "rewrote numerals");
            if json {
                // Serializing plain strings cannot fail.
                println!("{}", serde_json::to_string(&outcome).unwrap());
            } else {
                println!("{}", outcome.text);
            }
        }
        Err(err) => {
            // The transform is deterministic, so there is nothing to
            // retry; hand the original through so synthesis still gets
            // text.
            warn!(%err, "verbalization failed; passing text through");
            println!("{line}");
        }
    }
}
