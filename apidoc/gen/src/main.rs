//! Apidoc generator CLI
//!
//! Resolves the definitions of an API document and inspects type expressions.

use std::path::PathBuf;

use apidoc_define::Definition;
use apidoc_gen::errors::GeneratorError;
use apidoc_gen::loader::load_document;
use apidoc_gen::{TypeNode, parse_type, resolve_definitions, validate_type};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{
    Layer, Registry, filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Apidoc generator - resolves generic definitions of an API document
#[derive(Parser, Debug)]
#[command(name = "apidoc-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the emittable definitions of an API document (JSON or YAML)
    Resolve {
        /// Path to the document
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the resolved definitions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the parsed tree of a type expression
    Parse {
        #[arg(value_name = "EXPR")]
        expr: String,
    },

    /// Validate one or more type expressions
    Check {
        #[arg(value_name = "EXPR", required = true)]
        exprs: Vec<String>,
    },
}

/// Default filter directives for a `-v` count.
fn verbosity_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,apidoc_gen=info",
        2 => "info,apidoc_gen=debug",
        _ => "debug,apidoc_gen=trace",
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v` when it parses.
fn init_tracing(verbose: u8, json: bool) {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity_directives(verbose)));

    let output: Box<dyn Layer<Registry> + Send + Sync> = if json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_target(true).with_writer(std::io::stderr).boxed()
    };

    tracing_subscriber::registry().with(output).with(filter).init();
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    match cli.command {
        Commands::Resolve { file, json } => {
            let doc = load_document(&file)?;
            tracing::info!(
                title = %doc.title,
                operations = doc.operations.len(),
                definitions = doc.definitions.len(),
                "Loaded API document"
            );
            let resolved = resolve_definitions(&doc)?;
            if json {
                let out = serde_json::to_string_pretty(&resolved)
                    .map_err(|e| GeneratorError::EncodeError(e.to_string()))?;
                println!("{out}");
            } else {
                for def in &resolved {
                    print_definition(def);
                }
            }
        }
        Commands::Parse { expr } => {
            let node = parse_type(&expr)?;
            print_node(&node, 0);
        }
        Commands::Check { exprs } => {
            for expr in &exprs {
                validate_type(expr)?;
                println!("{} {}", "ok".green(), expr);
            }
        }
    }

    Ok(())
}

fn print_definition(def: &Definition) {
    println!("{}", def.name.bold());
    if !def.description.is_empty() {
        println!("  {}", def.description.dimmed());
    }
    for prop in &def.properties {
        let marker = if prop.required { "*" } else { " " };
        println!(
            "  {}{}: {}",
            prop.name,
            marker.red(),
            prop.type_expr.cyan()
        );
    }
}

fn print_node(node: &TypeNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        TypeNode::Primitive { base, format, .. } => {
            if format.is_empty() {
                println!("{indent}{} {}", "primitive".yellow(), base);
            } else {
                println!("{indent}{} {} ({})", "primitive".yellow(), base, format);
            }
        }
        TypeNode::Array { item, .. } => {
            println!("{indent}{}", "array of".yellow());
            print_node(item, depth + 1);
        }
        TypeNode::Object {
            type_name,
            generic_args,
            ..
        } => {
            println!("{indent}{} {}", "object".yellow(), type_name.bold());
            for arg in generic_args {
                print_node(arg, depth + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_crate_level_first() {
        assert_eq!(verbosity_directives(0), "warn");
        assert_eq!(verbosity_directives(1), "warn,apidoc_gen=info");
        assert_eq!(verbosity_directives(7), "debug,apidoc_gen=trace");
        for v in 0..4 {
            assert!(EnvFilter::try_new(verbosity_directives(v)).is_ok());
        }
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["apidoc-gen", "check", "integer", "-vv", "--log-json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.log_json);
        match cli.command {
            Commands::Check { exprs } => assert_eq!(exprs, vec!["integer"]),
            other => panic!("Expected Check, got: {other:?}"),
        }
    }
}
