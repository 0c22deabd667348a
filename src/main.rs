//! Local authorizer injection CLI.
//!
//! Runs the two host hooks against a service descriptor and prints the
//! mutated function mapping, so the rewrite can be inspected without a full
//! simulator run.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use offline_local_auth::config::FsProbe;
use offline_local_auth::loader::JsExportScanner;
use offline_local_auth::service::model::ServiceContext;
use offline_local_auth::service::{local_auth_setting, read_descriptor};
use offline_local_auth::{before_server_start, initialize};

#[derive(Parser)]
#[command(name = "offline-local-auth")]
#[command(about = "Apply local authorizers to a service descriptor", long_about = None)]
struct Cli {
    /// Service descriptor to read
    #[arg(short, long, default_value = "serverless.yml")]
    descriptor: PathBuf,

    /// Stage override; defaults to the provider stage, then "dev"
    #[arg(short, long)]
    stage: Option<String>,

    /// Output format for the mutated function mapping
    #[arg(short, long, value_enum, default_value = "yaml")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "offline_local_auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let descriptor = read_descriptor(&cli.descriptor)?;

    let service_root = match cli.descriptor.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let context = ServiceContext {
        service_name: descriptor
            .service
            .clone()
            .unwrap_or_else(|| "service".into()),
        stage: cli
            .stage
            .or_else(|| descriptor.provider.stage.clone())
            .unwrap_or_else(|| "dev".into()),
        service_root,
    };

    tracing::info!(
        descriptor = %cli.descriptor.display(),
        service = %context.service_name,
        stage = %context.stage,
        "descriptor loaded"
    );

    let setting = local_auth_setting(&descriptor.custom);
    let resolved = initialize(&setting, &context.service_root, &FsProbe);

    let mut functions = descriptor.functions;
    before_server_start(&resolved, &mut functions, &context, &JsExportScanner)?;

    let rendered = match cli.format {
        Format::Yaml => serde_yaml::to_string(&functions)?,
        Format::Json => serde_json::to_string_pretty(&functions)?,
    };
    println!("{rendered}");
    Ok(())
}
