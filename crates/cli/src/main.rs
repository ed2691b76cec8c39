//! entity-console CLI - define entity fields and drive the entity backend
//! from the command line.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use console_cli::{add_fields, parse_field_spec, print_latest_alert};
use console_client::{ClientConfig, HttpBackend};
use console_core::{FieldDescriptor, SubmitAction};
use console_form::{FormController, FormStore, shared_form};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "entity-console")]
#[command(version, about = "Define entity fields and drive entity, demo-data and index requests", long_about = None)]
struct Cli {
    /// Backend base URL, e.g. http://127.0.0.1:8080
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// TOML file with base_url, timeout_secs and user_agent keys
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FieldArgs {
    /// Field as name:datatype[:indexed][:pk]; repeat for more fields
    #[arg(long = "field", value_name = "SPEC", value_parser = parse_field_spec)]
    fields: Vec<FieldDescriptor>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an entity with the given fields
    CreateEntity {
        /// Entity name
        #[arg(long)]
        entity: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Insert generated demo data into an entity
    InsertDemo {
        /// Entity name
        #[arg(long)]
        entity: String,

        /// Number of tuples to generate
        #[arg(long, value_name = "N")]
        ntuples: String,

        /// Number of dimensions of feature fields
        #[arg(long, value_name = "N")]
        ndims: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Create the indexes of an entity
    CreateIndex {
        /// Entity name
        #[arg(long)]
        entity: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Show the field list as it would appear in the form, without contacting the backend
    Fields {
        #[command(flatten)]
        fields: FieldArgs,
    },
}

/// What one submission command sends
struct Submission {
    action: SubmitAction,
    entity: String,
    ntuples: String,
    ndims: String,
    fields: Vec<FieldDescriptor>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let submission = match cli.command {
        Commands::Fields { fields } => return Ok(preview_fields(&fields.fields)),
        Commands::CreateEntity { entity, fields } => Submission {
            action: SubmitAction::CreateEntity,
            entity,
            ntuples: String::new(),
            ndims: String::new(),
            fields: fields.fields,
        },
        Commands::InsertDemo {
            entity,
            ntuples,
            ndims,
            fields,
        } => Submission {
            action: SubmitAction::InsertDemoData,
            entity,
            ntuples,
            ndims,
            fields: fields.fields,
        },
        Commands::CreateIndex { entity, fields } => Submission {
            action: SubmitAction::CreateIndex,
            entity,
            ntuples: String::new(),
            ndims: String::new(),
            fields: fields.fields,
        },
    };

    let config = load_config(cli.config, cli.base_url, cli.timeout)?;
    let backend = HttpBackend::new(config).context("failed to build HTTP client")?;
    Ok(submit(backend, submission).await)
}

/// Defaults, then environment, then the config file, then flags
fn load_config(
    file: Option<PathBuf>,
    base_url: Option<String>,
    timeout: Option<u64>,
) -> anyhow::Result<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(path) = file {
        config = config.with_file(path)?;
    }
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config.validate()?;
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "configuration loaded");
    Ok(config)
}

fn preview_fields(fields: &[FieldDescriptor]) -> ExitCode {
    let controller = FormController::new(shared_form(), ());
    if add_fields(&controller, fields).is_none() {
        print_latest_alert(&controller);
        return ExitCode::FAILURE;
    }
    for (id, label) in controller.store().read(|state| state.field_options()) {
        println!("{}. {}", id, label);
    }
    ExitCode::SUCCESS
}

async fn submit(backend: HttpBackend, submission: Submission) -> ExitCode {
    let controller = FormController::new(shared_form(), backend);
    controller.store().update(|state| {
        state.inputs.entity_name = submission.entity;
        state.inputs.ntuples = submission.ntuples;
        state.inputs.ndims = submission.ndims;
    });

    if add_fields(&controller, &submission.fields).is_none() {
        print_latest_alert(&controller);
        return ExitCode::FAILURE;
    }

    let outcome = controller.submit(submission.action).await;
    print_latest_alert(&controller);

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
