//! quicklinks - search, resolve and check a catalog of short links
//!
//! The catalog is the same `redirects.toml` the redirect service serves.
//! Searching uses the search box's ranking: key, then alias, then
//! description matches, with "did you mean" suggestions on a miss.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::{OwoColorize, Stream};
use quicklinks_cli::output::{format_count, format_duration, highlight_terminal, match_label, Status};
use quicklinks_core::config::Config;
use quicklinks_core::error::exit_codes;
use quicklinks_core::validation::validate_catalog;
use quicklinks_core::{redirect_key, Catalog, Error};
use quicklinks_search::{parse_candidates, rank, suggestions, Candidate, MatchType, RankedMatch, ScoreMode};
use quicklinks_telemetry::{timed_span, TelemetryConfig, Timer};
use std::path::{Path, PathBuf};

/// Number of suggestions shown when a name does not resolve
const RESOLVE_SUGGESTIONS: usize = 5;

#[derive(Parser)]
#[command(name = "quicklinks")]
#[command(about = "Search, resolve and check a catalog of short links")]
#[command(version)]
struct Cli {
    /// Path to the catalog file (defaults to ./redirects.toml)
    #[arg(short, long, global = true, env = "QUICKLINKS_CATALOG")]
    catalog: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank links matching a query
    Search {
        /// Search query
        query: String,

        /// Only report subsequence matches, no similar spellings
        #[arg(long)]
        strict: bool,

        /// Maximum number of results (0 for all)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Rank a JSON array of candidates instead of the catalog
        #[arg(long)]
        candidates: Option<PathBuf>,
    },

    /// Resolve a key, alias, path or URL to its target
    Resolve {
        /// Key, alias, `/path` or `https://key.domain`
        target: String,
    },

    /// List all links
    List,

    /// Check the catalog for shadowed or duplicate aliases
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli.catalog.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e, cli.json);
            std::process::exit(e.exit_code());
        }
    };

    let telemetry = if cli.verbose {
        TelemetryConfig::verbose()
    } else {
        TelemetryConfig {
            log_level: config.schema.logging.level.clone(),
            json: config.schema.logging.json,
            ..TelemetryConfig::default()
        }
    };
    quicklinks_telemetry::init_with_config(telemetry)?;

    tracing::debug!(path = ?config.path, links = config.schema.redirects.len(), "catalog ready");

    let result = match cli.command {
        Commands::Search { query, strict, limit, candidates } => {
            run_search(&config, &query, strict, limit, candidates.as_deref(), cli.json)
        }
        Commands::Resolve { target } => run_resolve(&config, &target, cli.json),
        Commands::List => run_list(&config, cli.json),
        Commands::Check => run_check(&config, cli.json),
    };

    std::process::exit(result);
}

fn report_error(err: &Error, json: bool) {
    if json {
        match serde_json::to_string_pretty(&err.to_report()) {
            Ok(report) => println!("{}", report),
            Err(_) => Status::error(&err.to_string()),
        }
    } else {
        Status::error(&err.to_string());
    }
}

fn load_candidates(path: &Path) -> quicklinks_core::Result<Vec<Candidate>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_candidates(&content)?)
}

fn run_search(
    config: &Config,
    query: &str,
    strict: bool,
    limit: Option<usize>,
    candidates_file: Option<&Path>,
    json: bool,
) -> i32 {
    timed_span!("search", query = %query);

    let catalog = config.catalog();
    let external;
    let candidates: &[Candidate] = match candidates_file {
        Some(path) => match load_candidates(path) {
            Ok(loaded) => {
                external = loaded;
                &external
            }
            Err(e) => {
                let e = e.with_context(format!("Loading candidates from {}", path.display()));
                report_error(&e, json);
                return e.exit_code();
            }
        },
        None => catalog.candidates(),
    };

    let mode = if strict { ScoreMode::Strict } else { config.schema.search.mode() };
    let limit = match limit {
        Some(0) => None,
        Some(n) => Some(n),
        None => config.schema.search.limit(),
    };

    let timer = Timer::start("search");
    let mut ranked = rank(candidates, query, ScoreMode::Strict, limit);
    if ranked.is_empty() && mode == ScoreMode::Fallback {
        ranked = suggestions(candidates, query, limit);
    }
    let elapsed = timer.stop();

    if json {
        return print_json(&ranked);
    }

    if ranked.is_empty() {
        Status::warning(&format!("No links match '{}'", query));
        return exit_codes::NOT_FOUND;
    }

    if ranked.iter().all(|m| m.result.is_similar()) {
        Status::info("No exact matches. Did you mean:");
    }

    let links = candidates_file.is_none().then_some(&catalog);
    for m in &ranked {
        print_match(links, &candidates[m.position], m, query);
    }

    println!();
    Status::info(&format!(
        "{} in {}",
        format_count(ranked.len(), "match", "matches"),
        format_duration(elapsed)
    ));

    exit_codes::SUCCESS
}

fn print_match(catalog: Option<&Catalog>, candidate: &Candidate, ranked: &RankedMatch<'_>, query: &str) {
    let result = &ranked.result;
    let matched = candidate.matched_text(result, query);

    let key = match (result.match_type, matched) {
        (MatchType::Key, Some(text)) => highlight_terminal(text, result.indices.as_deref()),
        _ => candidate.key.clone(),
    };

    println!("{:>3}  {}  ({})", result.score, key, match_label(result));

    if let Some(text) = matched.filter(|_| result.match_type != MatchType::Key) {
        println!("     {}", highlight_terminal(text, result.indices.as_deref()));
    }

    if let Some(entry) = catalog.and_then(|catalog| catalog.get(&candidate.key)) {
        println!("     {}", entry.url.if_supports_color(Stream::Stdout, |url| url.dimmed()));
    }
}

fn run_resolve(config: &Config, target: &str, json: bool) -> i32 {
    let catalog = config.catalog();
    let key = redirect_key(target, config.schema.domain.as_deref());

    if let Some((key, entry)) = catalog.resolve(key) {
        if json {
            return print_json(&serde_json::json!({ "key": key, "url": entry.url }));
        }
        println!("{}", entry.url);
        return exit_codes::SUCCESS;
    }

    let err = Error::redirect_not_found(key).with_context(format!("Resolving '{}'", target));
    let similar = catalog.search(key, ScoreMode::Fallback, Some(RESOLVE_SUGGESTIONS));

    if json {
        let keys: Vec<&str> = similar.iter().map(|m| m.key).collect();
        print_json(&serde_json::json!({ "error": err.to_report(), "suggestions": keys }));
    } else {
        Status::error(&err.message);
        if !similar.is_empty() {
            Status::info("Did you mean:");
            for m in &similar {
                println!("  {}", m.key);
            }
        }
    }

    err.exit_code()
}

fn run_list(config: &Config, json: bool) -> i32 {
    let catalog = config.catalog();

    if json {
        let entries: Vec<_> = catalog
            .entries()
            .map(|(key, entry)| {
                serde_json::json!({
                    "key": key,
                    "url": entry.url,
                    "description": entry.description,
                    "aliases": entry.aliases,
                })
            })
            .collect();
        return print_json(&entries);
    }

    if catalog.is_empty() {
        Status::warning("The catalog has no links");
        return exit_codes::SUCCESS;
    }

    Status::header(&format!("Quick links ({})", catalog.len()));
    for (key, entry) in catalog.entries() {
        println!("{:<16} {}", key, entry.url);
        if !entry.description.is_empty() {
            println!("{:<16} {}", "", entry.description.if_supports_color(Stream::Stdout, |d| d.dimmed()));
        }
        let aliases: Vec<&str> = entry.aliases.iter().collect();
        if !aliases.is_empty() {
            println!("{:<16} aliases: {}", "", aliases.join(", "));
        }
    }

    exit_codes::SUCCESS
}

fn run_check(config: &Config, json: bool) -> i32 {
    let catalog = config.catalog();
    let result = validate_catalog(&catalog);

    if json {
        print_json(&result);
    } else {
        if config.path.is_none() {
            Status::warning("No catalog file found");
        }
        for warning in result.warnings() {
            Status::warning(&warning.to_string());
        }
        for error in result.errors() {
            Status::error(&error.to_string());
        }
        if result.is_valid() {
            Status::success(&format!("{} OK", format_count(catalog.len(), "link", "links")));
        }
    }

    match result.to_result() {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => e.exit_code(),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(output) => {
            println!("{}", output);
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("JSON serialize error: {}", e));
            exit_codes::FAILURE
        }
    }
}
