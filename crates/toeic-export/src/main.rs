use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::{Subscriber, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;
use vocab_data::{Source, TopicSet};

use toeic_export::{DEFAULT_INDENT, DEFAULT_OUTPUT, ExportOptions, LengthPolicy, export};

const MAX_INDENT: i64 = 16;

#[derive(Parser, Debug)]
#[command(name = "toeic-export")]
#[command(about = "Export the TOEIC 600 vocabulary as a single JSON array")]
struct Cli {
    /// Destination file; replaced if it exists.
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Read topic records from this JSON file instead of the bundled data.
    #[arg(long, value_name = "FILE")]
    topics: Option<PathBuf>,
    /// Fail on topics whose word, pronunciation, and meaning lists differ in length.
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Spaces per indentation level.
    #[arg(
        long,
        default_value_t = DEFAULT_INDENT as u16,
        value_parser = clap::value_parser!(u16).range(0..=MAX_INDENT)
    )]
    indent: u16,
}

impl Cli {
    fn into_config(self) -> (Source, ExportOptions) {
        let source = self.topics.map(Source::File).unwrap_or(Source::Embedded);
        let policy = if self.strict {
            LengthPolicy::Strict
        } else {
            LengthPolicy::Truncate
        };
        let options = ExportOptions {
            output: self.output,
            policy,
            indent: usize::from(self.indent),
        };
        (source, options)
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let (source, options) = Cli::parse().into_config();
    info!("reading topics from {:?}", source);
    info!("length policy: {:?}", options.policy);

    let start = Instant::now();
    let topics = TopicSet::load_from(&source)?;
    info!("loaded {} topics", topics.len());

    let report = export(&topics, &options)
        .with_context(|| format!("exporting vocabulary to {}", options.output.display()))?;
    info!("export finished in {} ms", start.elapsed().as_millis());

    println!(
        "Successfully created {} with {} vocabulary items.",
        report.path.display(),
        report.entries
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    subscriber(env_filter).init();
}

fn subscriber(env_filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .finish()
}
