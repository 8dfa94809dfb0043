//! Schema validation of rendered deposits.
//!
//! Documents are checked with libxml2 against an XSD on disk, normally
//! `crossref5.3.0.xsd` and the files it includes.

use std::fmt::Debug;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use anyhow::{Result, anyhow, bail};
use libxml::parser::Parser;
use libxml::schemas::{SchemaParserContext, SchemaValidationContext};
use tracing::{debug, info};

use drsxml_core::DoiBatch;

use crate::writer::render_document;

/// libxml2 keeps parser and schema state in globals.
static LIBXML: Mutex<()> = Mutex::new(());

/// Schema errors quoted in a failure message.
const MAX_REPORTED_ERRORS: usize = 10;

/// Validate a serialized deposit against the schema at `xsd_path`.
///
/// Fails when the schema cannot be loaded, the document is not well-formed,
/// or the document breaks the schema. The message carries the first few
/// libxml2 errors.
pub fn validate_document(xml: &str, xsd_path: &Path) -> Result<()> {
    if !xsd_path.is_file() {
        bail!("schema not found: {}", xsd_path.display());
    }
    let schema_location = xsd_path
        .to_str()
        .ok_or_else(|| anyhow!("schema path is not valid UTF-8: {}", xsd_path.display()))?;

    let _guard = LIBXML.lock().unwrap_or_else(PoisonError::into_inner);
    let mut schema_parser = SchemaParserContext::from_file(schema_location);
    let mut schema = SchemaValidationContext::from_parser(&mut schema_parser).map_err(|errors| {
        anyhow!(
            "cannot load schema {}: {}",
            xsd_path.display(),
            summarize(&errors)
        )
    })?;
    debug!(schema = %xsd_path.display(), "schema loaded");

    let document = Parser::default()
        .parse_string(xml)
        .map_err(|error| anyhow!("deposit is not well-formed: {error:?}"))?;
    schema.validate_document(&document).map_err(|errors| {
        anyhow!(
            "deposit does not match {} ({} errors): {}",
            xsd_path.display(),
            errors.len(),
            summarize(&errors)
        )
    })?;

    info!(schema = %xsd_path.display(), "deposit is schema-valid");
    Ok(())
}

/// Render `batch` and validate the result.
pub fn validate_batch(batch: &DoiBatch, xsd_path: &Path) -> Result<()> {
    validate_document(&render_document(batch)?, xsd_path)
}

fn summarize<E: Debug>(errors: &[E]) -> String {
    let mut shown: Vec<String> = errors
        .iter()
        .take(MAX_REPORTED_ERRORS)
        .map(|error| format!("{error:?}"))
        .collect();
    if errors.len() > MAX_REPORTED_ERRORS {
        shown.push(format!("and {} more", errors.len() - MAX_REPORTED_ERRORS));
    }
    shown.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_schema_is_reported() {
        let error = validate_document("<doi_batch/>", Path::new("no/such/schema.xsd"))
            .expect_err("missing schema");
        assert!(error.to_string().starts_with("schema not found"));
    }

    #[test]
    fn summary_is_capped() {
        let errors: Vec<u32> = (0..12).collect();
        let summary = summarize(&errors);
        assert!(summary.starts_with("0; 1; "));
        assert!(summary.ends_with("9; and 2 more"));
    }
}
