//! Xcode project file section completion
//!
//! Downstream pbxproj parsers only create a section object when the file
//! already contains that section. [`add_missing_sections_to_pbxproj`] is a
//! pre-pass that inserts every absent catalog section, empty, at its
//! catalog position.

mod catalog;
mod completer;
mod error;
mod file;

pub use catalog::{begin_marker, OBJECTS_ANCHOR, SECTION_CATALOG};
pub use completer::{
    add_missing_sections_to_pbxproj, complete_file, complete_sections, get_missing_sections,
    missing_sections, Completion, CompletionReport,
};
pub use error::{PatchError, PatchResult};
