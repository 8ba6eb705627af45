//! Shared fixtures for section completion tests
//!
//! Builds pbxproj text and copies it into temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Project with only the PBXGroup and PBXProject sections.
pub const PARTIAL_PROJECT: &str = include_str!("../fixtures/partial.pbxproj");

/// A project file living in its own temp directory.
pub struct ProjectFile {
    dir: TempDir,
    pub path: PathBuf,
}

impl ProjectFile {
    pub fn with_content(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("project.pbxproj");
        fs::write(&path, content).expect("Failed to write project file");
        Self { dir, path }
    }

    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("Failed to read project file")
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Build a project whose object table holds `sections`, each with one entry.
pub fn project_with_sections(sections: &[&str]) -> String {
    let mut text = String::from("// !$*UTF8*$!\n{\n\tarchiveVersion = 1;\n\tobjects = {\n\n");
    for (i, name) in sections.iter().enumerate() {
        text.push_str(&format!(
            "/* Begin {name} section */\n\t\t{id:024X} = {{isa = {name}; }};\n/* End {name} section */\n\n",
            name = name,
            id = i
        ));
    }
    text.push_str("\t};\n\trootObject = 000000000000000000000000;\n}\n");
    text
}

/// Section names in the order their begin markers appear in `text`.
pub fn begin_marker_order(text: &str) -> Vec<String> {
    let re = regex_lite::Regex::new(r"/\* Begin (\w+) section \*/").unwrap();
    re.captures_iter(text).map(|c| c[1].to_string()).collect()
}
