use std::path::PathBuf;
use std::{fs, io, process};

use clap::Parser;
use nfcheck_cli::check::{check_document, RelationOutcome};
use nfcheck_cli::report;
use nfcheck_cli::{App, CheckArgs, Command, FmtArgs, GenerateArgs};
use nfcheck_core::NormalForm;
use nfcheck_parser::{format_relations, parse_relations, RelationDecl};
use tracing_subscriber::EnvFilter;

const EXTENSION: &str = "fds";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let app = App::parse();
    match &app.command {
        Command::Check(args) => check(args),
        Command::Fmt(args) => fmt(args),
        Command::Generate(args) => generate(args),
        Command::Schema => schema(),
    }
}

/// Expand directories into their `.fds` files, sorted; files pass through.
fn collect_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)
                .unwrap_or_else(|e| {
                    eprintln!("Failed to read directory {}: {e}", path.display());
                    process::exit(1);
                })
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == EXTENSION))
                .collect();
            entries.sort();
            if entries.is_empty() {
                eprintln!("No .{EXTENSION} files found in {}", path.display());
            }
            inputs.extend(entries);
        } else {
            inputs.push(path.clone());
        }
    }
    if inputs.is_empty() {
        eprintln!("No input files");
        process::exit(1);
    }
    inputs
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{line}"),
        Err(e) => eprintln!("Failed to serialize result: {e}"),
    }
}

fn check(args: &CheckArgs) {
    let required = args.require.map(NormalForm::from);
    let mut any_invalid = false;
    let mut any_below = false;

    for path in collect_inputs(&args.paths) {
        let filename = path.display().to_string();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                any_invalid = true;
                let message = format!("Failed to read: {e}");
                if args.json {
                    print_json(&report::render_json_error(&filename, "", &message));
                } else {
                    eprintln!("{filename}: {message}");
                }
                continue;
            }
        };

        for outcome in check_document(&text, args.verbose) {
            match outcome {
                RelationOutcome::Invalid { label, line, error } => {
                    any_invalid = true;
                    if args.json {
                        print_json(&report::render_json_error(&filename, &label, &error));
                    } else {
                        eprintln!("{filename}:{line}: {label}: {error}");
                    }
                }
                RelationOutcome::Analyzed {
                    label,
                    schema,
                    analysis,
                    diagnostics,
                } => {
                    if let Some(level) = required {
                        if !analysis.verdict(level).is_satisfied() {
                            any_below = true;
                            tracing::debug!(relation = %label, %level, "requirement not met");
                        }
                    }

                    if args.json {
                        print_json(&report::render_json(
                            &filename,
                            &label,
                            &analysis,
                            diagnostics.as_ref(),
                        ));
                    } else {
                        println!(
                            "{}",
                            report::render_text(&label, &schema, &analysis, diagnostics.as_ref())
                        );
                    }
                }
            }
        }
    }

    if any_invalid || any_below {
        process::exit(1);
    }
}

fn fmt(args: &FmtArgs) {
    let mut any_failed = false;

    for path in collect_inputs(&args.paths) {
        let filename = path.display().to_string();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Failed to read {filename}: {e}");
                any_failed = true;
                continue;
            }
        };

        let relations = match parse_relations(&text) {
            Ok(relations) => relations,
            Err(e) => {
                eprintln!("{filename}: {e}");
                any_failed = true;
                continue;
            }
        };

        let formatted = format_relations(&relations);
        if formatted == text {
            continue;
        }

        if args.check {
            println!("{filename}: not formatted");
            any_failed = true;
        } else if let Err(e) = fs::write(&path, &formatted) {
            eprintln!("Failed to write {filename}: {e}");
            any_failed = true;
        } else {
            println!("{filename}: formatted");
        }
    }

    if any_failed {
        process::exit(1);
    }
}

fn generate(args: &GenerateArgs) {
    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create output directory: {e}");
        process::exit(1);
    });

    let params = nfcheck_testgen::generator::SchemaParams::from(args);
    let schemas = nfcheck_testgen::generator::generate_mult_schemas(args.n_schema, &params);

    for generated in &schemas {
        let id = generated.get_id();
        let path = args.output_dir.join(format!("{id}.{EXTENSION}"));
        let relation = RelationDecl::from_schema(format!("R{id}"), generated.get_schema());
        tracing::info!(id, seed = generated.get_seed(), path = %path.display(), "writing schema");
        fs::write(&path, format_relations(&[relation])).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });
    }

    println!(
        "Generated {} schemas to {}",
        schemas.len(),
        args.output_dir.display()
    );
}

fn schema() {
    let schema = schemars::schema_for!(nfcheck_core::Analysis<String>);
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize schema: {e}");
            process::exit(1);
        }
    }
}
