#![forbid(unsafe_code)]

//! connectivity-graph
//!
//! Fetch a neuron population's connectivity knowledge from a flatmap
//! server and write it out as a renderable graph.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use neuron_connectivity::export::{export_cypher_dump, write_cytoscape_json};
use neuron_connectivity::{HttpKnowledgeSource, MapServerConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Cytoscape document: elements, breadth-first layout, stylesheet
    Json,
    /// Cypher script for a property-graph database
    Cypher,
}

/// Neural connectivity graph exporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Entity whose connectivity knowledge is fetched
    #[arg(default_value = "ilxtr:neuron-type-keast-9")]
    entity: String,

    /// Flatmap server base URL
    #[arg(long, env = "FLATMAP_SERVER_URL")]
    server: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "FLATMAP_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let mut config = MapServerConfig::default();
    if let Some(server) = args.server {
        config.server_url = server;
    }
    if let Some(secs) = args.timeout {
        config.timeout = Duration::from_secs(secs);
    }

    let source = HttpKnowledgeSource::new(config).context("Failed to build HTTP client")?;
    let graph = neuron_connectivity::load_graph(&source, &args.entity)
        .await
        .with_context(|| format!("Failed to load connectivity knowledge for {}", args.entity))?;

    tracing::info!(
        nodes = graph.distinct_node_count(),
        edges = graph.edges().len(),
        roots = graph.roots().len(),
        "graph ready"
    );

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match args.format {
        Format::Json => write_cytoscape_json(&graph, &mut *writer)?,
        Format::Cypher => export_cypher_dump(&graph, &mut *writer)?,
    }
    writer.flush()?;

    Ok(())
}
