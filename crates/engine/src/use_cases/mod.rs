//! Use cases - User story orchestration.
//!
//! - `dialogs` - what each dialog shows and how it reacts to a response
//! - `navigation` - stacks, sessions and the session registry

pub mod dialogs;
pub mod navigation;
