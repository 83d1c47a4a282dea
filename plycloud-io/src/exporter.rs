//! Activation-gated export with last-written-path memory
//!
//! The exporter wraps [`PlyWriter`] with the caller-facing contract of an
//! on-demand export node: it only touches the filesystem when explicitly
//! activated, and it remembers the last path it wrote successfully so
//! downstream consumers can keep referencing the same output.

use crate::error::Result;
use crate::ply::{PlyWriteOptions, PlyWriter};
use plycloud_core::PointCloud;
use std::path::Path;

/// Outcome of a single [`PlyExporter::export`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStatus {
    /// The activation flag was false; nothing was written
    Skipped,
    /// The file was written; `colors_written` reports whether per-vertex
    /// colors made it into the output
    Written { colors_written: bool },
}

impl ExportStatus {
    /// Whether the caller should surface a point/color length-mismatch remark
    ///
    /// True when colors were supplied but did not pair with the points and
    /// were therefore omitted from a completed write.
    pub fn color_advisory(&self, cloud: &PointCloud) -> bool {
        matches!(self, ExportStatus::Written { colors_written: false }) && cloud.has_colors()
    }
}

/// Stateful PLY exporter
///
/// One instance per logical export node. The recorded path starts empty, is
/// replaced only by a successful activated write, and is never cleared; a
/// failed or skipped call reports the previous path unchanged.
#[derive(Debug, Default)]
pub struct PlyExporter {
    last_written_path: String,
}

impl PlyExporter {
    /// Create an exporter that has never written anything
    pub fn new() -> Self {
        Self::default()
    }

    /// The path of the last successful write, or the empty string
    pub fn last_written_path(&self) -> &str {
        &self.last_written_path
    }

    /// Export `cloud` to `path` if `active` is set
    ///
    /// With `active` false this is a no-op returning
    /// [`ExportStatus::Skipped`]. With `active` true the cloud is written
    /// through [`PlyWriter`]; on success the recorded path updates, on
    /// failure the error propagates and the recorded path is left as it was.
    pub fn export<P: AsRef<Path>>(
        &mut self,
        path: P,
        cloud: &PointCloud,
        options: &PlyWriteOptions,
        active: bool,
    ) -> Result<ExportStatus> {
        if !active {
            return Ok(ExportStatus::Skipped);
        }

        let path = path.as_ref();
        let colors_written = PlyWriter::write_point_cloud_with(cloud, path, options)?;
        self.last_written_path = path.to_string_lossy().into_owned();
        Ok(ExportStatus::Written { colors_written })
    }
}
