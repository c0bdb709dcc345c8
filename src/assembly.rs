// SPDX-License-Identifier: MPL-2.0
//! Static-page assembly from section partials.
//!
//! The showcase also ships as a plain HTML page; this module concatenates
//! the ordered section partials from a directory into the final page file.
//! Each partial is a file named `<part>.html`. The parts are joined with a
//! single newline, in order, and the result is written in one shot — a
//! missing or unreadable partial fails the whole build rather than
//! producing a page with a hole in it.

use crate::error::{AssemblyError, Result};
use crate::showcase::SectionId;
use std::path::Path;

/// Partial names in page order: the layout shell wrapping every section.
pub fn default_parts() -> Vec<String> {
    let mut parts = Vec::with_capacity(SectionId::ALL.len() + 2);
    parts.push("layout-head".to_string());
    parts.extend(SectionId::ALL.iter().map(|s| s.slug().to_string()));
    parts.push("layout-foot".to_string());
    parts
}

/// Concatenates `parts` from `sections_dir` into `output`.
pub fn assemble(sections_dir: &Path, parts: &[String], output: &Path) -> Result<()> {
    let mut fragments = Vec::with_capacity(parts.len());
    for part in parts {
        let path = sections_dir.join(format!("{part}.html"));
        let fragment = std::fs::read_to_string(&path).map_err(|e| AssemblyError::MissingPartial {
            name: part.clone(),
            detail: e.to_string(),
        })?;
        fragments.push(fragment);
    }

    let page = fragments.join("\n");
    std::fs::write(output, page).map_err(|e| AssemblyError::WriteFailed {
        path: output.display().to_string(),
        detail: e.to_string(),
    })?;

    Ok(())
}

/// Assembles the full page with the default part order.
pub fn assemble_page(sections_dir: &Path, output: &Path) -> Result<()> {
    assemble(sections_dir, &default_parts(), output)
}
