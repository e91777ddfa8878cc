//! placewalk CLI binary.
//!
//! Joins its arguments into one free-text place description, resolves it
//! against the configured search backend, and prints one line per walked
//! hierarchy layer followed by the terminal entity line.

use std::{str::FromStr, time::Duration};

use anyhow::Result;
use clap::Parser;
use placewalk::{
    ElasticBackend, Layer, NaiveDecomposer, PlaceResolver, ResolverConfig, UnknownLayer,
};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "placewalk",
    version,
    about = "Resolve a free-text place description into an administrative hierarchy"
)]
struct Args {
    /// Free-text place description, e.g. "123 Main St, Springfield, IL"
    #[arg(required = true)]
    text: Vec<String>,

    /// Search backend host
    #[arg(long, env = "PLACEWALK_HOST", default_value = "http://localhost:9200")]
    host: String,

    /// Gazetteer index name
    #[arg(long, default_value = "pelias")]
    index: String,

    /// Query-time analyzer for name matching
    #[arg(long, default_value = "peliasQueryFullToken")]
    analyzer: String,

    /// Constrain the terminal query to one layer (e.g. address, venue)
    #[arg(long, value_parser = parse_layer)]
    final_layer: Option<Layer>,

    /// Per-query timeout in seconds (0 disables it)
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Overall resolution deadline in seconds (0 disables it)
    #[arg(long, default_value_t = 30)]
    deadline: u64,

    /// Print the full resolution as JSON instead of console lines
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_layer(s: &str) -> Result<Layer, UnknownLayer> {
    Layer::from_str(s)
}

impl Args {
    fn config(&self) -> ResolverConfig {
        ResolverConfig {
            index: self.index.clone(),
            analyzer: self.analyzer.clone(),
            final_layer: self.final_layer,
            query_timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            resolution_deadline: (self.deadline > 0).then(|| Duration::from_secs(self.deadline)),
            ..ResolverConfig::default()
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    placewalk::init_logging(args.log_level())?;

    let input = args.text.join(" ");
    let config = args.config();

    let mut backend = ElasticBackend::new(&args.host);
    if let Some(timeout) = config.query_timeout {
        backend = backend.with_query_timeout(timeout);
    }

    let resolver = PlaceResolver::with_config(backend, config);

    if !args.json {
        println!("searching for {input}");
    }

    let resolution = resolver.resolve_text(&input, &NaiveDecomposer).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    for step in resolution.trace.steps() {
        println!("{step}");
    }
    println!("done querying parent hierarchy");
    println!("{}", resolution.final_step);

    Ok(())
}
