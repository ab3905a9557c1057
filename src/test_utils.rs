#[cfg(test)]
pub mod helpers {
    use crate::catalog::{Locale, LocaleCatalog, TranslationEntry};
    use crate::localization::Localization;
    use crate::resource::DEFAULT_RESOURCE_PATH;
    use std::fs;
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    static SAMPLE_FRENCH: [TranslationEntry<'static>; 2] = [
        TranslationEntry::new("appearance", "Apparence"),
        TranslationEntry::new("theme", "Thème"),
    ];

    static SAMPLE_GERMAN: [TranslationEntry<'static>; 1] =
        [TranslationEntry::new("appearance", "Aussehen")];

    pub fn english() -> Localization {
        Localization::new("en").unwrap()
    }

    pub fn sample_catalogs() -> Vec<LocaleCatalog<'static>> {
        vec![
            LocaleCatalog::new(Locale::French, &SAMPLE_FRENCH),
            LocaleCatalog::new(Locale::German, &SAMPLE_GERMAN),
        ]
    }

    pub struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// A temp project root that may or may not hold the localization resource.
    pub struct TestWorkspace {
        pub temp_dir: TempDir,
    }

    impl TestWorkspace {
        pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
            let temp_dir = TempDir::new()?;
            Ok(Self { temp_dir })
        }

        pub fn resource_path(&self) -> PathBuf {
            self.temp_dir.path().join(DEFAULT_RESOURCE_PATH)
        }

        pub fn create_resource(&self, content: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
            self.create_binary_resource(content.as_bytes())
        }

        pub fn create_binary_resource(
            &self,
            content: &[u8],
        ) -> Result<PathBuf, Box<dyn std::error::Error>> {
            let path = self.resource_path();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)?;
            Ok(path)
        }

        pub fn path(&self) -> &Path {
            self.temp_dir.path()
        }
    }
}
