use anyhow::Result;
use tracing::info;

use drsxml_core::SystemClock;
use drsxml_ingest::{LoadOptions, RecordKind, load_records};
use drsxml_model::record::{CONFERENCE_DATES, PUBLICATION_DATE};
use drsxml_report::{output_path, render_document, write_document};
use drsxml_cli::pipeline::{ConvertOptions, assemble};

use crate::cli::{ConvertArgs, InspectArgs};
use crate::types::{ConvertResult, InspectResult, RecordRow};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let options = ConvertOptions {
        load: LoadOptions {
            sheet: args.sheet.clone(),
            kind: args.kind.record_kind(),
        },
        collection: args.collection.clone(),
        config: args.config.clone(),
        schema: args.validate.clone(),
    };
    let assembled = assemble(&args.input, &options, &SystemClock)?;

    let output = if args.stdout {
        print!("{}", render_document(&assembled.batch)?);
        None
    } else {
        let path = output_path(&args.output_dir, &assembled.source);
        write_document(&path, &assembled.batch)?;
        Some(path)
    };
    info!(records = assembled.deposit.records().len(), "convert complete");

    Ok(ConvertResult {
        source: assembled.source.clone(),
        deposit: assembled.deposit.label(),
        batch_id: assembled.batch_id().to_string(),
        records: assembled.deposit.records().len(),
        contributors: assembled.contributor_count(),
        output,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let options = LoadOptions {
        sheet: args.sheet.clone(),
        kind: args.kind.record_kind(),
    };
    let loaded = load_records(&args.input, &options)?;
    let date_column = match loaded.kind {
        RecordKind::BookReviews => PUBLICATION_DATE,
        RecordKind::Proceedings => CONFERENCE_DATES,
    };
    let rows = loaded
        .records
        .iter()
        .map(|record| RecordRow {
            title: record.title().to_string(),
            doi: record.doi().to_string(),
            authors: record.authors().len(),
            date: record.get(date_column).to_string(),
        })
        .collect();
    Ok(InspectResult {
        source: loaded.source,
        kind: loaded.kind.label(),
        rows,
    })
}
