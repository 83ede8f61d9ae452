use std::path::Path;

use crate::foundation::core::CellRect;
use crate::foundation::error::{GridcutError, GridcutResult};
use crate::grid::layout::GridLayout;
use crate::project::document::ProjectDocument;
use crate::xml::tree::XmlElement;

/// Fixed zoom applied to every clip so it overfills its cell before the crop
/// filter clips it back to the cell bounds.
const ZOOM_FACTOR: f64 = 1.4;

/// Tractor index of the project's main video track.
const MAIN_VIDEO_TRACK: u32 = 1;

/// Tractor index of the project's main audio track.
const MAIN_AUDIO_TRACK: u32 = 0;

const PRODUCER_ID_PREFIX: &str = "gridProducer";
const PLAYLIST_ID_PREFIX: &str = "gridPlaylist";

/// Zero timecode used for entry in-points and filter animation bounds.
const TIME_ZERO: &str = "00:00:00.000";

/// One input handed to [`GridBuilder::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotSource<'a> {
    /// A source video file to place into the next grid cell.
    Video(&'a str),
    /// A fill marker: consumes one cell position and widens the next video
    /// by one cell-width instead of producing a slot of its own.
    Fill,
}

/// Mutates an MLT project into a multi-camera grid, one slot per video.
///
/// Usage follows a fixed sequence: construct once, call [`add`](Self::add)
/// once per input in the exact order the videos should appear
/// (left-to-right, top-to-bottom), then serialize with
/// [`write`](Self::write). All mutation is in-memory on the held document;
/// nothing is visible externally until the write.
#[derive(Debug)]
pub struct GridBuilder {
    project: ProjectDocument,
    layout: GridLayout,
    blank: String,
    /// Inputs added so far, fill markers included.
    added: u32,
    /// Fill markers seen since the last real video.
    pending_fills: u32,
    next_producer_id: u32,
    next_playlist_id: u32,
    /// Root child index where the next producer node lands; starts at the
    /// tractor and stays immediately before it as pairs are inserted.
    insert_at: usize,
}

impl GridBuilder {
    /// Prepare a builder for `slot_count` inputs (fill markers included)
    /// across `columns` columns.
    ///
    /// Reads the canvas from the project profile and records the tractor
    /// position; fails with [`GridcutError::MalformedProject`] when either
    /// is missing or unparsable.
    pub fn new(
        project: ProjectDocument,
        columns: u32,
        slot_count: u32,
        blank: impl Into<String>,
    ) -> GridcutResult<Self> {
        let canvas = project.canvas()?;
        let layout = GridLayout::new(canvas, columns, slot_count)?;
        let insert_at = project.tractor_position()?;
        Ok(Self {
            project,
            layout,
            blank: blank.into(),
            added: 0,
            pending_fills: 0,
            next_producer_id: 0,
            next_playlist_id: 0,
            insert_at,
        })
    }

    /// Grid geometry derived at construction.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Place the next input.
    ///
    /// A fill marker mutates nothing; a video inserts its producer/playlist
    /// pair before the tractor and appends its track and transitions to the
    /// tractor.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn add(&mut self, source: SlotSource<'_>) -> GridcutResult<()> {
        match source {
            SlotSource::Fill => {
                self.pending_fills += 1;
                self.added += 1;
                Ok(())
            }
            SlotSource::Video(resource) => self.add_video(resource),
        }
    }

    fn add_video(&mut self, resource: &str) -> GridcutResult<()> {
        // Consumed fills keep counting as occupied cells, so the column is
        // based on the slot index with only the still-pending fills removed.
        let col = (self.added - self.pending_fills) % self.layout.columns;
        let row = self.added / self.layout.columns;
        let span = 1 + self.pending_fills;
        let cell = self.layout.cell(col, row, span);
        self.pending_fills = 0;
        self.added += 1;

        let producer_id = format!("{PRODUCER_ID_PREFIX}{}", self.next_producer_id);
        self.next_producer_id += 1;
        let playlist_id = format!("{PLAYLIST_ID_PREFIX}{}", self.next_playlist_id);
        self.next_playlist_id += 1;

        let caption = basename(resource);
        tracing::debug!(%producer_id, col, row, span, ?cell, "placing slot");

        let root = self.project.root_mut();
        root.insert_element(
            self.insert_at,
            build_producer(&producer_id, resource, &caption, cell),
        );
        root.insert_element(
            self.insert_at + 1,
            build_playlist(&playlist_id, &producer_id, &caption, &self.blank),
        );
        self.insert_at += 2;

        let tractor = self.project.tractor_mut()?;
        tractor.push_element(
            XmlElement::new("track")
                .with_attr("producer", playlist_id.as_str())
                .with_attr("hide", "audio"),
        );
        let track_nr = track_number(tractor, &playlist_id)?;
        tractor.push_element(build_video_transition(
            &playlist_id,
            MAIN_VIDEO_TRACK,
            track_nr,
        ));
        tractor.push_element(build_audio_transition(
            &playlist_id,
            MAIN_AUDIO_TRACK,
            track_nr,
        ));
        Ok(())
    }

    /// Serialize the current document state to `path`.
    ///
    /// No validation happens here; whatever tree exists (even if
    /// [`add`](Self::add) was never called) is written.
    pub fn write(&self, path: impl AsRef<Path>) -> GridcutResult<()> {
        self.project.write_to(path)
    }

    /// The held project document.
    pub fn project(&self) -> &ProjectDocument {
        &self.project
    }

    /// Consume the builder, returning the mutated document.
    pub fn into_project(self) -> ProjectDocument {
        self.project
    }
}

/// 0-based index of the track referencing `playlist_id` in the tractor's
/// track list.
fn track_number(tractor: &XmlElement, playlist_id: &str) -> GridcutResult<u32> {
    tractor
        .elements_named("track")
        .position(|track| track.attr("producer") == Some(playlist_id))
        .map(|n| n as u32)
        .ok_or_else(|| {
            GridcutError::track_not_found(format!("no track references playlist {playlist_id}"))
        })
}

fn property(name: &str, value: impl Into<String>) -> XmlElement {
    XmlElement::new("property")
        .with_attr("name", name)
        .with_text(value)
}

fn build_producer(producer_id: &str, resource: &str, caption: &str, cell: CellRect) -> XmlElement {
    let mut producer = XmlElement::new("producer").with_attr("id", producer_id);
    for (name, value) in [
        ("resource", resource),
        ("eof", "pause"),
        ("audio_index", "1"),
        ("video_index", "0"),
        ("mute_on_pause", "0"),
        ("mlt_service", "avformat-novalidate"),
        ("seekable", "1"),
        ("aspect_ratio", "1"),
        ("ignore_points", "0"),
        ("shotcut:caption", caption),
        ("global_feed", "1"),
        ("xml", "was here"),
    ] {
        producer.push_element(property(name, value));
    }
    producer.push_element(build_affine_filter(
        producer_id,
        cell.scaled_about_center(ZOOM_FACTOR),
    ));
    producer.push_element(build_crop_filter(producer_id, cell));
    producer
}

/// Size/position filter that overfills the cell by [`ZOOM_FACTOR`].
fn build_affine_filter(producer_id: &str, rect: CellRect) -> XmlElement {
    let mut filter = XmlElement::new("filter").with_attr("id", format!("{producer_id}-affine"));
    for (name, value) in [
        ("mlt_service", "affine".to_string()),
        ("background", "color:#00000000".to_string()),
        ("shotcut:filter", "affineSizePosition".to_string()),
        ("transition.fill", "1".to_string()),
        ("transition.distort", "0".to_string()),
        (
            "transition.rect",
            format!("{} {} {} {} 1", rect.left, rect.top, rect.width, rect.height),
        ),
        ("transition.valign", "middle".to_string()),
        ("transition.halign", "center".to_string()),
        ("shotcut:animIn", TIME_ZERO.to_string()),
        ("shotcut:animOut", TIME_ZERO.to_string()),
        ("transition.threads", "0".to_string()),
        ("transition.fix_rotate_x", "0".to_string()),
    ] {
        filter.push_element(property(name, value));
    }
    filter
}

/// Crop filter that clips the zoomed clip back to its unzoomed cell.
fn build_crop_filter(producer_id: &str, cell: CellRect) -> XmlElement {
    let mut filter = XmlElement::new("filter").with_attr("id", format!("{producer_id}-crop"));
    for (name, value) in [
        ("mlt_service", "qtcrop".to_string()),
        ("shotcut:filter", "cropRectangle".to_string()),
        (
            "rect",
            format!("{} {} {} {}", cell.left, cell.top, cell.width, cell.height),
        ),
        ("circle", "0".to_string()),
        ("color", "#00000000".to_string()),
        ("radius", "0".to_string()),
    ] {
        filter.push_element(property(name, value));
    }
    filter
}

fn build_playlist(playlist_id: &str, producer_id: &str, caption: &str, blank: &str) -> XmlElement {
    let mut playlist = XmlElement::new("playlist").with_attr("id", playlist_id);
    playlist.push_element(property("shotcut:video", "1"));
    playlist.push_element(property("shotcut:name", caption));
    playlist.push_element(XmlElement::new("blank").with_attr("length", blank));
    playlist.push_element(
        XmlElement::new("entry")
            .with_attr("producer", producer_id)
            .with_attr("in", TIME_ZERO),
    );
    playlist
}

/// Blends the new track over the main video track so every slot is visible
/// at once.
fn build_video_transition(playlist_id: &str, a_track: u32, b_track: u32) -> XmlElement {
    let mut transition =
        XmlElement::new("transition").with_attr("id", format!("{playlist_id}-blend"));
    for (name, value) in [
        ("a_track", a_track.to_string()),
        ("b_track", b_track.to_string()),
        ("version", "0.9".to_string()),
        ("mlt_service", "frei0r.cairoblend".to_string()),
        ("disable", "0".to_string()),
        ("1", "normal".to_string()),
    ] {
        transition.push_element(property(name, value));
    }
    transition
}

/// Sums the new track's audio into the master output; the track itself is
/// audio-hidden, so this is what keeps its audio audible.
fn build_audio_transition(playlist_id: &str, a_track: u32, b_track: u32) -> XmlElement {
    let mut transition =
        XmlElement::new("transition").with_attr("id", format!("{playlist_id}-mix"));
    for (name, value) in [
        ("a_track", a_track.to_string()),
        ("b_track", b_track.to_string()),
        ("mlt_service", "mix".to_string()),
        ("always_active", "1".to_string()),
        ("sum", "1".to_string()),
    ] {
        transition.push_element(property(name, value));
    }
    transition
}

/// Final path component of `resource`, used for captions.
fn basename(resource: &str) -> String {
    Path::new(resource)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| resource.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/grid/builder.rs"]
mod tests;
