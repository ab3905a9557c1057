use crate::error::EmitterError;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Localization service of the app the keys get pasted into.
pub const DEFAULT_RESOURCE_PATH: &str = "lib/localization_service.dart";

/// Confirms the resource can be opened and read as UTF-8 text.
///
/// The content is discarded; only the byte count is returned. The handle is
/// closed before returning.
pub fn ensure_readable(path: &Path) -> Result<usize, EmitterError> {
    let unavailable = |source: io::Error| EmitterError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let mut content = String::new();
    {
        let mut file = File::open(path).map_err(unavailable)?;
        file.read_to_string(&mut content).map_err(unavailable)?;
    }

    debug!(path = %path.display(), bytes = content.len(), "localization resource is readable");
    Ok(content.len())
}
