//! The fixed section catalog and the literal markers that delimit sections
//!
//! A `project.pbxproj` groups its objects into comment-delimited sections:
//!
//! ```text
//! /* Begin PBXGroup section */
//!         ...
//! /* End PBXGroup section */
//!
//! ```
//!
//! Sections must appear in the order given by [`SECTION_CATALOG`].

/// Every section name the completer guarantees, in required file order.
pub const SECTION_CATALOG: &[&str] = &[
    "PBXBuildFile",
    "PBXContainerItemProxy",
    "PBXFileReference",
    "PBXFrameworksBuildPhase",
    "PBXGroup",
    "PBXHeadersBuildPhase",
    "PBXNativeTarget",
    "PBXProject",
    "PBXReferenceProxy",
    "PBXResourcesBuildPhase",
    "PBXSourcesBuildPhase",
    "PBXTargetDependency",
    "XCBuildConfiguration",
    "XCConfigurationList",
];

/// Opening of the object table; the first catalog section goes right after it.
pub const OBJECTS_ANCHOR: &str = "objects = {\n\n";

/// Begin marker comment without its line terminator.
pub fn begin_marker(section: &str) -> String {
    format!("/* Begin {} section */", section)
}

/// Begin marker as a full line.
pub fn begin_line(section: &str) -> String {
    format!("{}\n", begin_marker(section))
}

/// End marker as a full line plus the blank separator line.
pub fn end_line(section: &str) -> String {
    format!("/* End {} section */\n\n", section)
}

/// Insertion anchor for a catalog section.
///
/// The first section anchors on the object table opening, every other one on
/// the end marker of the section immediately before it in the catalog.
pub fn anchor_for(index: usize) -> String {
    match index {
        0 => OBJECTS_ANCHOR.to_string(),
        i => end_line(SECTION_CATALOG[i - 1]),
    }
}
