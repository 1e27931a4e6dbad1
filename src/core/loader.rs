//! Vehicle record loading
//!
//! Turns record files on disk into [`Vehicle`] values. The format is chosen
//! by extension: `.yaml`/`.yml` records go through serde_yml, `.json`
//! records through serde_json.

use miette::Diagnostic;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::entities::vehicle::Vehicle;
use crate::yaml::RecordSyntaxError;

/// Record file formats understood by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Yaml,
    Json,
}

impl RecordFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(RecordFormat::Yaml),
            "json" => Some(RecordFormat::Json),
            _ => None,
        }
    }
}

/// Failure to turn a file into a vehicle record
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("An error occurred attempting to load {}", path.display())]
    #[diagnostic(
        code(cardiag::load::not_found),
        help("pass a record path, or set `record` in .cardiag/config.yaml")
    )]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    #[diagnostic(code(cardiag::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported record format: {} (expected .yaml, .yml or .json)", path.display())]
    #[diagnostic(code(cardiag::load::format))]
    UnsupportedFormat { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] RecordSyntaxError),
}

/// Load a vehicle record from a file
pub fn load_vehicle(path: &Path) -> Result<Vehicle, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let format = RecordFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let filename = path.display().to_string();
    let vehicle = parse_vehicle(&content, &filename, format)?;
    tracing::debug!(path = %path.display(), vehicle = %vehicle, "loaded record");
    Ok(vehicle)
}

/// Parse record text in the given format
pub fn parse_vehicle(
    content: &str,
    filename: &str,
    format: RecordFormat,
) -> Result<Vehicle, RecordSyntaxError> {
    match format {
        RecordFormat::Yaml => serde_yml::from_str(content)
            .map_err(|e| RecordSyntaxError::from_yaml_error(&e, content, filename)),
        RecordFormat::Json => serde_json::from_str(content)
            .map_err(|e| RecordSyntaxError::from_json_error(&e, content, filename)),
    }
}

/// Find all record files under a directory, sorted
///
/// Hidden files and directories are skipped.
pub fn find_record_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') || e.depth() == 0
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| RecordFormat::from_path(path).is_some())
        .collect();

    files.sort();
    files
}

/// Expand a list of paths, replacing directories with the records they hold
pub fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut expanded = Vec::new();
    for path in paths {
        if path.is_dir() {
            expanded.extend(find_record_files(path));
        } else {
            expanded.push(path.clone());
        }
    }
    expanded
}
