//! Value objects - Immutable objects defined by their attributes

mod locale;
mod names;

pub use locale::LocaleTag;
pub use names::{ClaimName, MAX_CLAIM_NAME_LENGTH, MIN_CLAIM_NAME_LENGTH};
