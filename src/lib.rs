pub mod catalog;
pub mod config;
pub mod emitter;
pub mod error;
pub mod localization;
pub mod resource;

#[cfg(test)]
mod test_utils;

use catalog::LocaleCatalog;
use config::Settings;
use emitter::Emitter;
use error::EmitterError;
use localization::Localization;
use std::io::Write;
use tracing::{debug, info};

/// Checks the resource, then writes the selected locale blocks to `out`.
///
/// Nothing is written when the resource is unavailable.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<(), EmitterError> {
    resource::ensure_readable(&settings.resource)?;

    let localization = Localization::new(&settings.ui_locale)?;
    let catalogs: Vec<LocaleCatalog<'static>> = settings
        .locales
        .iter()
        .map(|locale| catalog::catalog(*locale))
        .collect();
    debug!(locales = ?settings.locales, ui_locale = localization.current_locale(), "emitting catalogs");

    info!("{}", localization.notice());
    Emitter::new(&localization).emit(out, &catalogs)?;
    out.flush()?;
    Ok(())
}
