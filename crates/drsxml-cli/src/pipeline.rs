//! Load, assemble and render steps shared by the CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use drsxml_core::{Clock, Deposit, DoiBatch, build_doi_batch};
use drsxml_ingest::{
    LoadOptions, LoadedRecords, RecordKind, load_collection_metadata, load_depositor_config,
    load_records,
};
use drsxml_model::{CollectionMetadata, DepositorConfig};
use drsxml_report::validate_batch;

/// Inputs to one conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub load: LoadOptions,
    /// Collection metadata JSON; required for proceedings.
    pub collection: Option<PathBuf>,
    /// Depositor configuration JSON.
    pub config: Option<PathBuf>,
    /// XSD the assembled document must satisfy.
    pub schema: Option<PathBuf>,
}

/// An assembled batch with the deposit it was built from.
#[derive(Debug)]
pub struct Assembled {
    pub source: PathBuf,
    pub deposit: Deposit,
    pub batch: DoiBatch,
}

impl Assembled {
    pub fn batch_id(&self) -> &str {
        self.batch.head.find_text("doi_batch_id").unwrap_or_default()
    }

    /// Total `person_name` entries across all records.
    pub fn contributor_count(&self) -> usize {
        self.deposit
            .records()
            .iter()
            .map(|record| record.authors().len())
            .sum()
    }
}

/// Load `input`, build the deposit and assemble its `doi_batch`.
///
/// With `options.schema` set, the batch is validated before it is returned.
pub fn assemble(input: &Path, options: &ConvertOptions, clock: &dyn Clock) -> Result<Assembled> {
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();

    let loaded = load_records(input, &options.load)
        .with_context(|| format!("load records from {}", input.display()))?;
    let config = match &options.config {
        Some(path) => load_depositor_config(path)?,
        None => DepositorConfig::default(),
    };
    let collection = options
        .collection
        .as_deref()
        .map(load_collection_metadata)
        .transpose()?;

    let source_name = source_name(&loaded.source);
    let source = loaded.source.clone();
    let deposit = build_deposit(loaded, collection)?;
    let batch = build_doi_batch(&deposit, &source_name, &config, clock)?;
    if let Some(schema) = &options.schema {
        validate_batch(&batch, schema)?;
    }
    info!(deposit = %deposit, "conversion assembled");
    Ok(Assembled {
        source,
        deposit,
        batch,
    })
}

/// Pick the body shape for loaded records.
pub fn build_deposit(
    loaded: LoadedRecords,
    collection: Option<CollectionMetadata>,
) -> Result<Deposit> {
    match loaded.kind {
        RecordKind::BookReviews => {
            if collection.is_some() {
                warn!("collection metadata is ignored for book reviews");
            }
            Ok(Deposit::book_reviews(loaded.records))
        }
        RecordKind::Proceedings => {
            let Some(collection) = collection else {
                bail!(
                    "{} holds proceedings; pass --collection with the volume metadata",
                    loaded.source.display()
                );
            };
            Ok(Deposit::proceedings(collection, loaded.records)?)
        }
    }
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
