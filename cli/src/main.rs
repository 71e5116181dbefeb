use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use relfinder::*;
use std::path::PathBuf;

mod config;

use config::Config;

/// Relation path finder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the relations from a table to the rows shown by a view
    Find(FindArgs),
    /// Convert a relation stored in the legacy format
    Legacy(LegacyArgs),
    /// Show the steps of a relation path
    Parse(ParseArgs),
}

#[derive(Debug, Args)]
struct FindArgs {
    /// Path to the schema JSON file
    #[arg(short, long)]
    schema: PathBuf,
    /// The table holding the current row
    #[arg(long)]
    source: String,
    /// The name of the embedded view
    #[arg(short, long)]
    view: String,
    /// A view template to ignore. May be repeated.
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,
    /// The maximum number of steps in a path
    #[arg(long)]
    max_depth: Option<String>,
    /// Path to a relfinder.toml file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the relations as JSON
    #[arg(long)]
    json: bool,
    /// Print the relations grouped into layers, as JSON
    #[arg(long)]
    layers: bool,
}

#[derive(Debug, Args)]
struct LegacyArgs {
    /// One of ChildList, Independent, Own, OneToOneShow, ParentShow
    #[arg(short, long)]
    kind: String,
    /// The stored relation descriptor, e.g. blog_feed.blog_posts.author
    #[arg(short, long)]
    relation: Option<String>,
    /// The table of the view which embeds the other
    #[arg(short, long)]
    parent: String,
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// A relation path such as .users.messages$user
    path: String,
}

fn find(args: FindArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let schema_json = std::fs::read_to_string(&args.schema)
        .with_context(|| format!("Failed to read schema file: {}", args.schema.display()))?;
    let snapshot = SchemaSnapshot::from_json(&schema_json)?;

    let raw_max_depth = args.max_depth.or_else(|| config.raw_max_depth());
    let options = Options::from_raw_max_depth(raw_max_depth.as_deref());
    let excluded = if args.exclude.is_empty() {
        config.excluded_templates
    } else {
        args.exclude
    };
    log::debug!("max depth {}, excluded templates {:?}", options.max_depth, excluded);

    let finder = RelationsFinder::new(&snapshot, options);
    let relations = finder.find_relations(&args.source, &args.view, &excluded);
    if args.layers {
        let layers = finder.relation_layers(&args.source, &relations)?;
        println!("{}", serde_json::to_string_pretty(&layers)?);
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&relations)?);
    } else {
        for relation in &relations {
            println!(
                "{}\t{}",
                relation.relation_type().as_str(),
                relation.relation_string()
            );
        }
    }
    Ok(())
}

fn legacy(args: LegacyArgs) -> Result<()> {
    let kind: LegacyKind = args.kind.parse()?;
    match parse_legacy_relation(kind, args.relation.as_deref(), &args.parent) {
        Some(converted) => println!(
            "{}\t{}",
            converted.relation_type.as_str(),
            converted.path
        ),
        None => anyhow::bail!("Unable to convert the {} relation", args.kind),
    }
    Ok(())
}

fn parse(args: ParseArgs) -> Result<()> {
    let path = parse_relation_path(&args.path).map_err(anyhow::Error::msg)?;
    println!("{}", serde_json::to_string_pretty(&path)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Cli::parse();
    match args.command {
        Command::Find(args) => find(args),
        Command::Legacy(args) => legacy(args),
        Command::Parse(args) => parse(args),
    }
}
