//! pinakes CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

use pinakes::reconstruction::format_confidence;
use pinakes::{
    Catalog, CitationGraph, DirSource, Format, FragmentIndex, NodeType, RenderConfig,
    SourcePaths, parsers,
};

/// Fragment catalog and citation-network tools.
#[derive(Parser, Debug)]
#[command(
    name = "pinakes",
    version = env!("PINAKES_VERSION"),
    about = "Fragment catalog and citation-network tools"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse flat structured text and print it as JSON
    Parse {
        /// Input file (reads from stdin if not provided)
        input: Option<String>,
    },
    /// List fragments, optionally filtered
    Fragments {
        /// Input file, structured text or JSON (reads from stdin if not provided)
        input: Option<String>,

        /// Case-insensitive substring over text and id
        #[arg(short = 'q', long = "query", default_value = "")]
        query: String,

        /// Exact collection name
        #[arg(short = 'c', long = "collection", default_value = "")]
        collection: String,
    },
    /// Summarize a citation network
    Stats {
        /// Network JSON file (reads from stdin if not provided)
        input: Option<String>,

        /// How many of the most connected nodes to list
        #[arg(short = 't', long = "top", default_value = "5")]
        top: usize,
    },
    /// Lay out and draw a citation network
    Render {
        /// Network JSON file (reads from stdin if not provided)
        input: Option<String>,

        #[arg(short = 'f', long = "format", value_enum, default_value = "svg")]
        format: OutputFormat,

        #[arg(long = "width", default_value = "800")]
        width: f64,

        #[arg(long = "height", default_value = "500")]
        height: f64,

        /// Write output to this file instead of stdout
        #[arg(short = 'o', long = "output")]
        output: Option<String>,
    },
    /// Print the reconstruction document for a work title
    Reconstruction {
        /// Data root holding the reconstructions directory
        root: String,

        /// Work title, e.g. "Eratosthenes Geographika"
        title: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Svg,
    Text,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Svg => Format::Svg,
            OutputFormat::Text => Format::Text,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    match cli.command {
        Command::Parse { input } => {
            let doc = parsers::parse(&read_input(input.as_deref()));
            match serde_json::to_string_pretty(&doc) {
                Ok(json) => emit(&format!("{json}\n"), None),
                Err(e) => fail(&e.to_string()),
            }
        }
        Command::Fragments {
            input,
            query,
            collection,
        } => {
            let index = FragmentIndex::from_text(&read_input(input.as_deref()));
            let mut out = String::new();
            for f in index.query(&query, &collection) {
                out.push_str(&format!(
                    "{} [{}] {}, {}, {}\n    {}\n",
                    f.display_id(),
                    f.display_collection(),
                    f.display_author(),
                    f.display_date_range(),
                    f.display_language(),
                    f.display_text()
                ));
            }
            emit(&out, None);
        }
        Command::Stats { input, top } => {
            let graph = CitationGraph::from_json(&read_input(input.as_deref()))
                .unwrap_or_else(|e| fail(&e.to_string()));
            emit(&stats_report(&graph, top), None);
        }
        Command::Render {
            input,
            format,
            width,
            height,
            output,
        } => {
            let config = RenderConfig::default().with_size(width, height);
            let rendered =
                pinakes::render_network(&read_input(input.as_deref()), &config, format.into())
                    .unwrap_or_else(|e| fail(&e.to_string()));
            emit(&rendered, output.as_deref());
        }
        Command::Reconstruction { root, title } => {
            let source = DirSource::new(root);
            let Some(doc) = Catalog::reconstruction(&source, &SourcePaths::default(), &title)
            else {
                fail(&format!("no reconstruction found for '{title}'"));
            };
            let mut out = String::new();
            for (key, value) in doc.iter() {
                if let Some(s) = value.as_scalar() {
                    let shown = match (key, s.parse::<f64>()) {
                        ("confidence", Ok(c)) => format_confidence(c),
                        _ => s.to_string(),
                    };
                    out.push_str(&format!("{key}: {shown}\n"));
                } else if let Some(items) = value.as_list() {
                    out.push_str(&format!("{key}:\n"));
                    for item in items {
                        out.push_str(&format!("  - {item}\n"));
                    }
                }
            }
            emit(&out, None);
        }
    }
}

fn stats_report(graph: &CitationGraph, top: usize) -> String {
    let stats = graph.stats();
    let mut out = format!(
        "nodes: {}\nedges: {}\n",
        stats.total_nodes, stats.total_edges
    );
    for t in NodeType::ALL {
        out.push_str(&format!("  {}: {}\n", t, stats.count(t)));
    }
    let dangling = graph.dangling_edges().count();
    if dangling > 0 {
        out.push_str(&format!("dangling edges: {dangling}\n"));
    }
    if top > 0 && !graph.is_empty() {
        out.push_str("most connected:\n");
        for (node, degree) in graph.most_connected(top) {
            out.push_str(&format!("  {} ({}): {}\n", node.display_label(), node.id, degree));
        }
    }
    let candidates = graph.transmitter_candidates();
    if !candidates.is_empty() {
        out.push_str("transmitter candidates:\n");
        for node in candidates {
            out.push_str(&format!("  {}\n", node.display_label()));
        }
    }
    out
}

fn read_input(path: Option<&str>) -> String {
    if let Some(path) = path {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => fail(&format!("cannot read '{path}': {e}")),
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            fail(&format!("cannot read stdin: {e}"));
        }
        buf
    }
}

fn emit(text: &str, path: Option<&str>) {
    if let Some(path) = path {
        if let Err(e) = fs::write(path, text) {
            fail(&format!("cannot write '{path}': {e}"));
        }
    } else {
        print!("{text}");
        if let Err(e) = io::stdout().flush() {
            fail(&format!("cannot flush stdout: {e}"));
        }
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
