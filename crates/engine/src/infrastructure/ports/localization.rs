//! Localization port.

use guildforms_domain::LocaleTag;

/// Resolves a message key for a viewer's locale.
///
/// Never fails: a key with no translation anywhere in the fallback chain
/// resolves to the key itself. `args` fill `{0}`, `{1}`, ... in order.
pub trait Localizer: Send + Sync {
    fn resolve(&self, locale: &LocaleTag, key: &str, args: &[String]) -> String;
}
