//! pbxproj-sections: Section completion for Xcode project files
//!
//! A `project.pbxproj` only lists the object sections it actually uses.
//! Tools that add objects to a section generally need that section to exist
//! first, so this crate patches the file to carry every section of a fixed
//! catalog, each in its required position.
//!
//! # Core Concepts
//!
//! - **Section Catalog**: the 14 standard section names, in file order
//! - **Markers**: `/* Begin X section */` and `/* End X section */` comment lines
//! - **Anchor**: the text a missing section is inserted after
//!
//! # Example
//!
//! ```
//! use pbxproj_sections::{complete_sections, missing_sections, SECTION_CATALOG};
//!
//! let text = "{\n\tobjects = {\n\n\t};\n}\n";
//! assert_eq!(missing_sections(text).len(), SECTION_CATALOG.len());
//!
//! let completion = complete_sections(text).unwrap();
//! assert!(missing_sections(&completion.content).is_empty());
//! ```

pub mod pbxproj;

pub use pbxproj::{
    add_missing_sections_to_pbxproj, begin_marker, complete_file, complete_sections,
    get_missing_sections, missing_sections, Completion, CompletionReport, PatchError,
    PatchResult, OBJECTS_ANCHOR, SECTION_CATALOG,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
