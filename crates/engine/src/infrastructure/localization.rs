//! JSON catalog localization.
//!
//! A catalog is a flat JSON object of `key -> pattern` stored as
//! `<locale>.json`. Lookups walk the exact locale, then its language, then
//! English; in each catalog the key is tried as given, then with the `bedrock.` prefix.

use std::collections::HashMap;
use std::path::Path;

use guildforms_domain::LocaleTag;

use crate::infrastructure::ports::Localizer;

const BUILTIN_ENGLISH: &str = include_str!("../../assets/lang/en.json");

const FALLBACK_LOCALE: &str = "en";
const BEDROCK_KEY_PREFIX: &str = "bedrock.";

/// ISO 639-1 codes written right to left.
const RTL_LANGUAGES: [&str; 6] = ["ar", "he", "fa", "ur", "yi", "ji"];
const RTL_MARKER: char = '\u{200F}';
const LTR_MARKER: char = '\u{200E}';

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {message}")]
    Io { path: String, message: String },
    #[error("Invalid catalog {path}: {message}")]
    Parse { path: String, message: String },
}

/// In-memory catalogs keyed by lowercased locale tag.
#[derive(Debug, Clone, Default)]
pub struct CatalogLocalizer {
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl CatalogLocalizer {
    /// Localizer holding only the English catalog shipped with the engine.
    pub fn builtin() -> Result<Self, CatalogError> {
        let entries = parse_catalog("builtin:en.json", BUILTIN_ENGLISH)?;
        Ok(Self::default().with_catalog(&LocaleTag::english(), entries))
    }

    /// Merge `entries` into the catalog for `locale`; later entries win.
    pub fn with_catalog(mut self, locale: &LocaleTag, entries: HashMap<String, String>) -> Self {
        self.catalogs
            .entry(catalog_key(locale.as_str()))
            .or_default()
            .extend(entries);
        self
    }

    /// Load every `<locale>.json` file in `dir`.
    ///
    /// Files whose stem is not a locale tag are skipped. A catalog that fails
    /// to parse is an error.
    pub fn load_dir(mut self, dir: &Path) -> Result<Self, CatalogError> {
        let read_dir = std::fs::read_dir(dir).map_err(|e| CatalogError::Io {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;

        for entry in read_dir {
            let entry = entry.map_err(|e| CatalogError::Io {
                path: dir.display().to_string(),
                message: e.to_string(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let locale = match LocaleTag::new(stem) {
                Ok(locale) => locale,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping catalog with invalid locale name");
                    continue;
                }
            };

            let display = path.display().to_string();
            let contents = std::fs::read_to_string(&path).map_err(|e| CatalogError::Io {
                path: display.clone(),
                message: e.to_string(),
            })?;
            let entries = parse_catalog(&display, &contents)?;
            tracing::info!(locale = %locale, keys = entries.len(), "Loaded localization catalog");
            self = self.with_catalog(&locale, entries);
        }

        Ok(self)
    }

    /// Locale tags with a loaded catalog, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    pub fn is_rtl(locale: &LocaleTag) -> bool {
        RTL_LANGUAGES.contains(&locale.language())
    }

    /// First catalog in the chain holding `key` or its `bedrock.` form wins;
    /// within a catalog the plain key is preferred.
    fn pattern(&self, locale: &LocaleTag, key: &str) -> Option<&str> {
        let exact = catalog_key(locale.as_str());
        let language = catalog_key(locale.language());
        let mut chain: Vec<&str> = vec![exact.as_str()];
        for candidate in [language.as_str(), FALLBACK_LOCALE] {
            if !chain.contains(&candidate) {
                chain.push(candidate);
            }
        }
        let prefixed = format!("{}{}", BEDROCK_KEY_PREFIX, key);

        chain
            .iter()
            .filter_map(|tag| self.catalogs.get(*tag))
            .find_map(|catalog| catalog.get(key).or_else(|| catalog.get(&prefixed)))
            .map(String::as_str)
    }
}

impl Localizer for CatalogLocalizer {
    fn resolve(&self, locale: &LocaleTag, key: &str, args: &[String]) -> String {
        let text = match self.pattern(locale, key) {
            Some(pattern) => substitute(pattern, args),
            None => {
                tracing::debug!(locale = %locale, key, "No translation found");
                key.to_string()
            }
        };

        if Self::is_rtl(locale) {
            format!("{}{}{}", RTL_MARKER, text, LTR_MARKER)
        } else {
            text
        }
    }
}

fn catalog_key(tag: &str) -> String {
    tag.to_ascii_lowercase()
}

fn parse_catalog(path: &str, contents: &str) -> Result<HashMap<String, String>, CatalogError> {
    serde_json::from_str(contents).map_err(|e| CatalogError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Replace `{n}` with `args[n]`. Placeholders without an argument, and braces
/// that do not enclose an index, are kept verbatim.
fn substitute(pattern: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .map(|arg| (arg, close))
        });
        match replaced {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
