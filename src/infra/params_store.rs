// ============================================================
// Layer 6 - Parameter File Loader
// ============================================================
// Reads the YAML parameter file (params.yaml by default).
//
// Failure modes, all reported as IngestError::Config:
//   - the file does not exist or cannot be read
//   - the content is not well-formed YAML
//   - the document is empty or its top level is not a mapping
//
// There is no fallback to defaults here. A broken parameter file
// aborts the run; the compiled-in defaults are only used when the
// caller asks for them explicitly (--use-defaults).
//
// Reference: serde_yaml crate documentation

use std::{fs, path::Path};

use crate::domain::error::{IngestError, IngestResult};
use crate::domain::params::Parameters;
use crate::infra::logging::LogErr;

/// Load and parse the parameter file at `path`.
pub fn load_params(path: impl AsRef<Path>) -> IngestResult<Parameters> {
    let path   = path.as_ref();
    let origin = path.display().to_string();

    let params = read_params(path, &origin)
        .log_err(|| format!("Error loading parameters from {origin}"))?;

    tracing::info!("Parameters loaded successfully from {}", origin);
    Ok(params)
}

fn read_params(path: &Path, origin: &str) -> IngestResult<Parameters> {
    let text = fs::read_to_string(path).map_err(|e| IngestError::config(origin, e))?;

    let root: serde_yaml::Value =
        serde_yaml::from_str(&text).map_err(|e| IngestError::config(origin, e))?;

    if !root.is_mapping() {
        return Err(IngestError::config(origin, "top level is not a mapping"));
    }

    Ok(Parameters::new(origin, root))
}
