//! Per-input conversion and the ordered batch run.
//!
//! Each input becomes a [`ConversionRequest`]; [`convert`] turns one request
//! into a markup line, and [`process_all`] runs every request strictly in
//! order. A failing input never stops the batch: its error is recorded with the
//! source path and the next input starts from a clean slate.
//!
//! Within one run a destination is written at most once. A later input that
//! maps onto a thumbnail an earlier input already produced (two `x.png` from
//! different directories with `--dest`) fails instead of replacing it.

use crate::imaging::{ImageBackend, ImagingError, RustBackend, create_thumbnail};
use crate::markup::MarkupStyle;
use crate::naming::thumbnail_destination;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single input's failure, tagged with the source it came from.
#[derive(Error, Debug)]
#[error("{}: {error}", .source_path.display())]
pub struct ConversionError {
    pub source_path: PathBuf,
    #[source]
    pub error: ImagingError,
}

impl ConversionError {
    pub fn new(source_path: impl Into<PathBuf>, error: ImagingError) -> Self {
        Self {
            source_path: source_path.into(),
            error,
        }
    }
}

/// Everything needed to turn one source image into a thumbnail and a snippet.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub size: u32,
    pub style: MarkupStyle,
}

impl ConversionRequest {
    /// Build a request, deriving the destination from `dest_dir`.
    pub fn new(
        source: &Path,
        dest_dir: &Path,
        size: u32,
        style: MarkupStyle,
    ) -> Result<Self, ConversionError> {
        let destination = thumbnail_destination(source, dest_dir).ok_or_else(|| {
            ConversionError::new(
                source,
                ImagingError::UnreadableSource(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "path does not name a file",
                )),
            )
        })?;

        Ok(Self {
            source: source.to_path_buf(),
            destination,
            size,
            style,
        })
    }
}

/// Outcome of a whole run, one entry per input in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Result<String, ConversionError>>,
}

impl BatchReport {
    /// Markup lines of the inputs that converted, in input order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok().map(String::as_str))
    }

    pub fn failures(&self) -> impl Iterator<Item = &ConversionError> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| o.is_err())
    }
}

/// Convert one request: write the thumbnail, then render its snippet.
pub fn convert(
    backend: &impl ImageBackend,
    request: &ConversionRequest,
) -> Result<String, ConversionError> {
    let thumbnail = create_thumbnail(backend, &request.source, &request.destination, request.size)
        .map_err(|e| ConversionError::new(&request.source, e))?;
    log::info!("{} → {}", request.source.display(), thumbnail.display());
    Ok(request.style.render(&request.source, &thumbnail))
}

/// Run every request in order with the production backend.
pub fn process(requests: Vec<Result<ConversionRequest, ConversionError>>) -> BatchReport {
    process_all(&RustBackend::new(), requests)
}

/// Run every request in order; requests that failed to build are carried through.
pub fn process_all(
    backend: &impl ImageBackend,
    requests: Vec<Result<ConversionRequest, ConversionError>>,
) -> BatchReport {
    let mut written: HashSet<PathBuf> = HashSet::new();
    let mut outcomes = Vec::with_capacity(requests.len());

    for request in requests {
        let outcome = request.and_then(|r| {
            if written.contains(&r.destination) {
                return Err(ConversionError::new(
                    &r.source,
                    ImagingError::DestinationTaken(r.destination.display().to_string()),
                ));
            }
            let line = convert(backend, &r)?;
            written.insert(r.destination);
            Ok(line)
        });
        if let Err(e) = &outcome {
            log::warn!("{e}");
        }
        outcomes.push(outcome);
    }

    BatchReport { outcomes }
}
