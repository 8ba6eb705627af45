//! Section completion: detect missing catalog sections and splice in empty ones
//!
//! The text functions ([`missing_sections`], [`complete_sections`]) do the
//! work; the path functions read the file, delegate, and write it back.

use super::catalog::{anchor_for, begin_line, begin_marker, end_line, SECTION_CATALOG};
use super::error::{PatchError, PatchResult};
use super::file::{read_project, write_project};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of completing a project file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionReport {
    /// File that was inspected
    pub path: PathBuf,
    /// Sections inserted, in catalog order. Empty when the file was complete.
    pub inserted: Vec<&'static str>,
}

impl CompletionReport {
    /// True when the file already contained every catalog section.
    pub fn is_unchanged(&self) -> bool {
        self.inserted.is_empty()
    }
}

/// Completed text plus the sections that were inserted into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Full project text with every catalog section present
    pub content: String,
    /// Sections inserted, in catalog order
    pub inserted: Vec<&'static str>,
}

/// Catalog sections whose begin marker does not occur in `content`, in catalog order.
pub fn missing_sections(content: &str) -> Vec<&'static str> {
    SECTION_CATALOG
        .iter()
        .copied()
        .filter(|section| !content.contains(&begin_marker(section)))
        .collect()
}

/// Insert an empty section for every missing catalog entry.
///
/// Each missing section is spliced in directly after the first occurrence of
/// its anchor (see [`anchor_for`]). Sections are processed in catalog order,
/// so a section inserted earlier in the pass can anchor the next one.
/// Existing sections are left exactly as they are.
pub fn complete_sections(content: &str) -> PatchResult<Completion> {
    let mut working = content.to_string();
    let mut inserted = Vec::new();

    for (index, section) in SECTION_CATALOG.iter().copied().enumerate() {
        if working.contains(&begin_marker(section)) {
            continue;
        }
        working = splice_section(&working, index, section)?;
        debug!(section, "inserted empty section");
        inserted.push(section);
    }

    Ok(Completion {
        content: working,
        inserted,
    })
}

fn splice_section(text: &str, index: usize, section: &'static str) -> PatchResult<String> {
    let anchor = anchor_for(index);
    let (before, after) = text
        .split_once(anchor.as_str())
        .ok_or_else(|| PatchError::AnchorNotFound {
            section: section.to_string(),
            anchor: anchor.clone(),
        })?;

    let begin = begin_line(section);
    let end = end_line(section);
    let mut out = String::with_capacity(text.len() + begin.len() + end.len());
    out.push_str(before);
    out.push_str(&anchor);
    out.push_str(&begin);
    out.push_str(&end);
    out.push_str(after);
    Ok(out)
}

/// Names of the catalog sections missing from the project file at `path`.
pub fn get_missing_sections(path: impl AsRef<Path>) -> PatchResult<Vec<&'static str>> {
    let content = read_project(path.as_ref())?;
    Ok(missing_sections(&content))
}

/// Read the project file at `path` and complete it in memory without writing.
pub fn complete_file(path: impl AsRef<Path>) -> PatchResult<Completion> {
    let content = read_project(path.as_ref())?;
    complete_sections(&content)
}

/// Patch the project file at `path` in place so it contains every catalog
/// section in catalog order.
///
/// Nothing is written when the file is already complete or when an anchor
/// cannot be found. No backup is kept.
pub fn add_missing_sections_to_pbxproj(path: impl AsRef<Path>) -> PatchResult<CompletionReport> {
    let path = path.as_ref();
    let completion = complete_file(path)?;

    if completion.inserted.is_empty() {
        debug!(path = %path.display(), "all sections present");
    } else {
        write_project(path, &completion.content)?;
        info!(
            path = %path.display(),
            count = completion.inserted.len(),
            "added missing sections"
        );
    }

    Ok(CompletionReport {
        path: path.to_path_buf(),
        inserted: completion.inserted,
    })
}
