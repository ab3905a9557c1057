use crate::catalog::Locale;
use crate::localization::{DEFAULT_UI_LOCALE, available_ui_locales};
use crate::resource::DEFAULT_RESOURCE_PATH;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Resolved options for one run. With no flags this is the plain
/// "check the resource, print both locales in English" behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub resource: PathBuf,
    pub locales: Vec<Locale>,
    pub ui_locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resource: PathBuf::from(DEFAULT_RESOURCE_PATH),
            locales: Locale::ALL.to_vec(),
            ui_locale: DEFAULT_UI_LOCALE.to_string(),
        }
    }
}

pub fn command() -> Command {
    Command::new("add-translations")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints French and German translation keys to paste into the localization service")
        .arg(
            Arg::new("resource")
                .long("resource")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_RESOURCE_PATH)
                .help("Localization resource that must be readable before printing"),
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .value_name("CODE")
                .action(ArgAction::Append)
                .value_parser(["fr", "de"])
                .help("Only print these locales (repeatable); defaults to all"),
        )
        .arg(
            Arg::new("ui-lang")
                .long("ui-lang")
                .value_name("LANG")
                .default_value(DEFAULT_UI_LOCALE)
                .help(format!(
                    "Language of headers and notices ({})",
                    available_ui_locales().join(", ")
                )),
        )
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let mut settings = Self::default();

        if let Some(resource) = matches.get_one::<PathBuf>("resource") {
            settings.resource = resource.clone();
        }

        if let Some(codes) = matches.get_many::<String>("locale") {
            let requested = codes
                .map(|code| code.parse::<Locale>())
                .collect::<Result<Vec<_>, _>>()?;
            // Catalog order wins over flag order
            settings.locales = Locale::ALL
                .into_iter()
                .filter(|locale| requested.contains(locale))
                .collect();
        }

        if let Some(ui_locale) = matches.get_one::<String>("ui-lang") {
            settings.ui_locale = ui_locale.clone();
        }

        Ok(settings)
    }
}
