use crate::catalog::{LocaleCatalog, TranslationEntry};
use crate::localization::Localization;
use std::io::{self, Write};
use tracing::debug;

const ENTRY_INDENT: &str = "      ";

/// Formats one entry as a line ready to paste into a Dart map literal.
///
/// Key and value are written exactly as stored: nothing is escaped, so a
/// value holding `'` or `\n` comes out the same way it was authored.
pub fn format_entry(entry: &TranslationEntry<'_>) -> String {
    format!("{}'{}': '{}',", ENTRY_INDENT, entry.key, entry.value)
}

pub struct Emitter<'l> {
    localization: &'l Localization,
}

impl<'l> Emitter<'l> {
    pub fn new(localization: &'l Localization) -> Self {
        Self { localization }
    }

    /// Writes one block per catalog, in the order given: the header line, then
    /// one line per entry. Blocks are separated by a blank line.
    pub fn emit<W: Write>(&self, out: &mut W, catalogs: &[LocaleCatalog<'_>]) -> io::Result<()> {
        for (index, catalog) in catalogs.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            self.emit_catalog(out, catalog)?;
        }
        Ok(())
    }

    fn emit_catalog<W: Write>(&self, out: &mut W, catalog: &LocaleCatalog<'_>) -> io::Result<()> {
        writeln!(out, "{}", self.localization.locale_header(catalog.locale))?;
        for entry in catalog.entries {
            writeln!(out, "{}", format_entry(entry))?;
        }
        debug!(locale = %catalog.locale, entries = catalog.len(), "emitted locale block");
        Ok(())
    }
}
