use clap::{Parser, Subcommand};
use constellar::prelude::*;
use serde::Serialize;
use std::{collections::BTreeSet, process::ExitCode};
use thiserror::Error as ThisError;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "constellar",
    version,
    about = "Inspect the collection topology derived for each logical model"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the flattened, classified collection list for one model.
    Collections {
        /// Logical model: user-profile-store, first-level-projection or
        /// second-level-projection.
        #[arg(long)]
        model: ModelKind,

        /// Namespacing prefix applied to every collection name.
        #[arg(long, env = "CONSTELLAR_PREFIX", default_value = "")]
        prefix: String,

        /// Emit JSON instead of the table view.
        #[arg(long)]
        json: bool,
    },

    /// Print one model's constellation partitioned by collection role.
    Constellation {
        /// Logical model: user-profile-store, first-level-projection or
        /// second-level-projection.
        #[arg(long)]
        model: ModelKind,

        /// Namespacing prefix applied to every collection name.
        #[arg(long, env = "CONSTELLAR_PREFIX", default_value = "")]
        prefix: String,

        /// Emit JSON instead of the grouped view.
        #[arg(long)]
        json: bool,
    },
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Render(#[from] serde_json::Error),
}

///
/// Report
///
/// JSON envelope for the collections view.
///

#[derive(Serialize)]
struct Report {
    model: ModelKind,
    prefix: String,
    collections: Vec<CollectionDetail>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Collections {
            model,
            prefix,
            json,
        } => {
            let constellation = model.constellation(&prefix)?;
            let collections = collection_details(&constellation);

            if json {
                let report = Report {
                    model,
                    prefix,
                    collections,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for detail in &collections {
                    println!("{:<8}  {}", detail.kind.as_str(), detail.name);
                }
            }
        }
        Command::Constellation {
            model,
            prefix,
            json,
        } => {
            let constellation = model.constellation(&prefix)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&constellation)?);
            } else {
                println!("model: {}", constellation.model());
                println!("prefix: {:?}", constellation.prefix().as_str());
                print_group("document collections", constellation.document_collections());
                print_group(
                    "query document collections",
                    constellation.query_document_collections(),
                );
                print_group("edge collections", constellation.edge_collections());
            }
        }
    }

    Ok(())
}

fn print_group(label: &str, names: &BTreeSet<CollectionName>) {
    println!("{label}:");

    if names.is_empty() {
        println!("  (none)");
    }
    for name in names {
        println!("  {name}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn collections_command_runs_for_every_model() {
        for model in ModelKind::ALL {
            let cli = Cli {
                command: Command::Collections {
                    model,
                    prefix: "svc".to_string(),
                    json: true,
                },
            };

            assert!(run(cli).is_ok());
        }
    }

    #[test]
    fn constellation_command_reports_invalid_prefix() {
        let cli = Cli {
            command: Command::Constellation {
                model: ModelKind::SecondLevelProjection,
                prefix: "bad prefix".to_string(),
                json: false,
            },
        };

        assert!(run(cli).is_err());
    }

    #[test]
    fn model_argument_parses_kebab_case_labels() {
        let cli = Cli::try_parse_from([
            "constellar",
            "collections",
            "--model",
            "first-level-projection",
        ])
        .expect("valid arguments");

        match cli.command {
            Command::Collections { model, .. } => {
                assert_eq!(model, ModelKind::FirstLevelProjection);
            }
            Command::Constellation { .. } => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn explicit_prefix_overrides_the_environment_default() {
        let cli = Cli::try_parse_from([
            "constellar",
            "constellation",
            "--model",
            "user-profile-store",
            "--prefix",
            "tenant-a",
        ])
        .expect("valid arguments");

        match cli.command {
            Command::Constellation { prefix, .. } => assert_eq!(prefix, "tenant-a"),
            Command::Collections { .. } => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn unknown_model_is_a_usage_error() {
        let err = Cli::try_parse_from([
            "constellar",
            "collections",
            "--model",
            "third-level-projection",
        ])
        .expect_err("unknown model label");

        assert!(err.to_string().contains("third-level-projection"));
    }
}
