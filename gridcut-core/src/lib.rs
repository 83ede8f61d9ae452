//! Gridcut arranges source videos into a multi-camera grid inside an
//! existing MLT (Shotcut) project file.
//!
//! The whole pipeline is one deterministic pass over one XML document:
//!
//! 1. **Parse**: read the project into an owned tree ([`ProjectDocument`])
//! 2. **Layout**: derive the grid geometry from the project profile
//!    ([`GridLayout`])
//! 3. **Mutate**: insert one producer/playlist/track/transition set per
//!    video ([`GridBuilder`])
//! 4. **Serialize**: write the mutated tree back out
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the same inputs always serialize to
//!   byte-identical output.
//! - **No hidden IO**: the document is read once at construction and written
//!   only when the caller asks for it; everything in between is in-memory
//!   tree surgery.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod grid;
mod project;
mod xml;

pub use foundation::core::{Canvas, CellRect};
pub use foundation::error::{GridcutError, GridcutResult};
pub use grid::builder::{GridBuilder, SlotSource};
pub use grid::layout::GridLayout;
pub use project::document::ProjectDocument;
pub use xml::tree::{XmlDeclaration, XmlDocument, XmlElement, XmlNode};
