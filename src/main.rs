use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

use graphsift::config::Config;
use graphsift::document::parser::from_yaml;
use graphsift::document::Document;
use graphsift::file::loader::{load_document, load_document_from_stdin};
use graphsift::report;
use graphsift::search::{search_with_mode, Criterion, SearchMode};
use graphsift::{resolve, Value};

/// graphsift - search object graphs by value, key or type
#[derive(Parser)]
#[command(name = "graphsift")]
#[command(version)]
#[command(about = "Search YAML/JSON object graphs by value, key or type", long_about = None)]
struct Cli {
    /// Log diagnostics to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find every location matching a criterion
    Search(SearchArgs),
    /// Print the value at a path
    Get {
        /// Document to read ("-" for stdin)
        file: String,

        /// Path expression, e.g. users[0].name
        path: String,

        /// Print the value as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Document to read ("-" for stdin)
    file: String,

    /// Search mode: value, key, type or all (default from config)
    #[arg(short, long)]
    mode: Option<String>,

    #[command(flatten)]
    criterion: CriterionArgs,

    /// Deepest level to search, 0 for unlimited
    #[arg(long)]
    max_depth: Option<usize>,

    /// Stop after this many hits
    #[arg(long)]
    max_results: Option<usize>,

    /// Start the search at this path instead of the document root
    #[arg(long)]
    at: Option<String>,

    /// Print hits as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct CriterionArgs {
    /// Exact value or key, parsed as a YAML scalar (quote to force a string)
    #[arg(long)]
    value: Option<String>,

    /// Regular expression matched against strings and keys
    #[arg(long)]
    pattern: Option<String>,

    /// Runtime type name: string, number, boolean, object, symbol, function, undefined
    #[arg(long = "type")]
    type_name: Option<String>,

    /// Class or built-in constructor name (Array, Map, Object, Function, ...)
    #[arg(long)]
    class: Option<String>,
}

impl CriterionArgs {
    fn to_criterion(&self) -> Result<Criterion> {
        if let Some(text) = &self.value {
            return Ok(Criterion::Exact(parse_scalar(text)));
        }
        if let Some(pattern) = &self.pattern {
            return Criterion::pattern(pattern)
                .with_context(|| format!("Invalid pattern '{}'", pattern));
        }
        if let Some(type_name) = &self.type_name {
            return Ok(Criterion::from(type_name.as_str()));
        }
        if let Some(class) = &self.class {
            return Ok(Criterion::instance_of(class));
        }
        anyhow::bail!("One of --value, --pattern, --type or --class is required")
    }
}

/// Reads a criterion value the way the document parser reads scalars, so
/// `--value 42` finds the number and `--value '"42"'` the string.
fn parse_scalar(text: &str) -> Value {
    match serde_yaml::from_str::<serde_yaml::Value>(text) {
        Ok(yaml) => match from_yaml(&yaml).root {
            Value::Node(_) => Value::from(text),
            scalar => scalar,
        },
        Err(_) => Value::from(text),
    }
}

fn load(file: &str) -> Result<Document> {
    if file == "-" {
        if io::stdin().is_terminal() {
            anyhow::bail!("No input on stdin");
        }
        load_document_from_stdin()
    } else {
        load_document(file)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "graphsift=debug" } else { "graphsift=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_search(args: SearchArgs, config: &Config) -> Result<()> {
    let mode_name = args.mode.as_deref().unwrap_or(&config.default_mode);
    let mode: SearchMode = mode_name.parse()?;
    let criterion = args.criterion.to_criterion()?;

    let mut options = config.search_options();
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }
    if let Some(max_results) = args.max_results {
        options.max_results = max_results;
    }

    let doc = load(&args.file)?;
    let start = match &args.at {
        Some(path) => resolve(&doc.graph, &doc.root, path)
            .with_context(|| format!("Path '{}' does not resolve", path))?
            .into_owned(),
        None => doc.root.clone(),
    };

    tracing::debug!(%mode, ?options, "starting search");
    let hits = search_with_mode(&doc.graph, &start, mode, criterion, &options);
    tracing::debug!(hits = hits.len(), "search finished");

    if args.json || config.wants_json() {
        println!("{}", report::render_json(&doc.graph, &hits)?);
    } else {
        print!("{}", report::render_text(&doc.graph, &hits, config.show_types));
    }
    Ok(())
}

fn run_get(file: &str, path: &str, json: bool, config: &Config) -> Result<()> {
    let doc = load(file)?;
    match resolve(&doc.graph, &doc.root, path) {
        Some(value) if json || config.wants_json() => {
            println!("{}", report::render_value_json(&doc.graph, &value)?);
        }
        Some(value) => println!("{}", report::preview(&doc.graph, &value)),
        None => anyhow::bail!("Path '{}' does not resolve", path),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load();

    match cli.command {
        Command::Search(args) => run_search(args, &config),
        Command::Get { file, path, json } => run_get(&file, &path, json, &config),
    }
}
