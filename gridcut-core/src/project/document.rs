use std::path::Path;

use crate::foundation::core::Canvas;
use crate::foundation::error::{GridcutError, GridcutResult};
use crate::xml::read::parse_document;
use crate::xml::tree::{XmlDocument, XmlElement};
use crate::xml::write::write_document;

/// An MLT project document held in memory.
///
/// The document is read once, mutated in place, and serialized once; no
/// mutation is visible externally until [`write_to`](Self::write_to) is
/// called.
#[derive(Clone, Debug)]
pub struct ProjectDocument {
    doc: XmlDocument,
}

impl ProjectDocument {
    /// Read and parse a project file.
    pub fn from_path(path: impl AsRef<Path>) -> GridcutResult<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::parse(&input)
    }

    /// Parse a project from an XML string.
    pub fn parse(input: &str) -> GridcutResult<Self> {
        Ok(Self {
            doc: parse_document(input)?,
        })
    }

    /// The document root element (normally `<mlt>`).
    pub fn root(&self) -> &XmlElement {
        &self.doc.root
    }

    /// Mutable document root element.
    pub fn root_mut(&mut self) -> &mut XmlElement {
        &mut self.doc.root
    }

    /// Canvas dimensions declared by the project's `profile` element.
    pub fn canvas(&self) -> GridcutResult<Canvas> {
        let profile = self
            .doc
            .root
            .find("profile")
            .ok_or_else(|| GridcutError::malformed_project("project has no profile element"))?;
        Ok(Canvas {
            width: dimension(profile, "width")?,
            height: dimension(profile, "height")?,
        })
    }

    /// Index of the `tractor` element among the root's children.
    pub fn tractor_position(&self) -> GridcutResult<usize> {
        self.doc
            .root
            .position("tractor")
            .ok_or_else(|| GridcutError::malformed_project("project has no tractor element"))
    }

    /// Mutable `tractor` element.
    pub fn tractor_mut(&mut self) -> GridcutResult<&mut XmlElement> {
        self.doc
            .root
            .find_mut("tractor")
            .ok_or_else(|| GridcutError::malformed_project("project has no tractor element"))
    }

    /// Serialize the current tree verbatim. No validation is performed;
    /// whatever tree state exists is written.
    pub fn to_bytes(&self) -> GridcutResult<Vec<u8>> {
        write_document(&self.doc)
    }

    /// Serialize the current tree to a file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> GridcutResult<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}

fn dimension(profile: &XmlElement, attr: &str) -> GridcutResult<u32> {
    let raw = profile.attr(attr).ok_or_else(|| {
        GridcutError::malformed_project(format!("profile has no {attr} attribute"))
    })?;
    raw.parse().map_err(|_| {
        GridcutError::malformed_project(format!("profile {attr} {raw:?} is not a number"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/project/document.rs"]
mod tests;
