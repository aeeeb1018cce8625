use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use docai_toolbox::{
    DEFAULT_BATCH_SIZE, LocalStorage, create_batches, document_type_to_processor_type,
    supported_document_types,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Document AI batching and processor routing helpers
#[derive(Parser, Debug)]
#[command(name = "docai-toolbox", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Group the documents under a bucket prefix into batch request inputs
    Batches {
        /// Directory whose subdirectories act as buckets
        #[arg(long)]
        root: PathBuf,
        /// Bucket name (a subdirectory of --root)
        #[arg(long)]
        bucket: String,
        /// Only include objects whose names start with this prefix
        #[arg(long, default_value = "")]
        prefix: String,
        /// Documents per batch
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,
    },
    /// Print the specialized processor type for a classifier label
    ProcessorType {
        /// Label emitted by a splitter/classifier (e.g., "w2")
        document_type: String,
    },
    /// List every classifier label with a known processor
    DocumentTypes,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Batches {
            root,
            bucket,
            prefix,
            batch_size,
        } => {
            let storage = LocalStorage::new(root);
            let batches = create_batches(&storage, &bucket, &prefix, Some(batch_size))
                .with_context(|| {
                    format!("Failed to create batches for gs://{}/{}", bucket, prefix)
                })?;

            println!("{}", serde_json::to_string_pretty(&batches)?);
        }
        Command::ProcessorType { document_type } => {
            match document_type_to_processor_type(&document_type) {
                Some(processor_type) => println!("{}", processor_type),
                None => bail!("No specialized processor for document type '{}'", document_type),
            }
        }
        Command::DocumentTypes => {
            for document_type in supported_document_types() {
                println!("{}", document_type);
            }
        }
    }

    Ok(())
}
