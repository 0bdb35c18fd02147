//! Core types for the LD encoder library
//!
//! This module defines the data model shared by the channel table, the
//! sample encoder and the container writer. The encoder is stateless and
//! only transforms data - it does not perform I/O or track history.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for encoder operations
pub type Result<T> = std::result::Result<T, EncoderError>;

/// One encoded sample row: one value per accepted channel, in table order.
///
/// Values are stored at the artifact's precision (4-byte float), so the
/// row is `f32` end to end.
pub type EncodedRow = Vec<f32>;

/// Maximum length of a channel short name in the output artifact.
///
/// The analysis tool reads this as a fixed-width field; longer names are
/// truncated (never padded) at table-build time.
pub const MAX_SHORT_NAME_LEN: usize = 8;

/// Errors that can occur during a conversion run
///
/// Channel-level and field-level problems are absorbed by the pipeline
/// (skipped channels, zero-defaulted fields) and never surface here; the
/// only failure the library propagates is the container writer failing
/// to produce the artifact.
#[derive(Debug, thiserror::Error)]
pub enum EncoderError {
    #[error("Failed to write artifact: {0}")]
    IoError(#[from] std::io::Error),
}

/// Static channel specification - one entry of the deployment's channel map
///
/// The spec list is ordered configuration: its order defines the output
/// channel order, and `source_column` maps each channel to a column of
/// the input rows. Specs are defined once per deployment and never
/// modified at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSpec {
    /// Column index in the input rows holding this channel's values
    pub source_column: usize,
    /// Column name as it appears in the input header (diagnostics only)
    pub source_name: String,
    /// Full display name shown by the analysis tool
    pub display_name: String,
    /// Short name (truncated to [`MAX_SHORT_NAME_LEN`] when the table is built)
    pub short_name: String,
    /// Engineering unit (e.g., "kPa", "deg/s", "V")
    pub units: String,
}

impl ChannelSpec {
    /// Create a new channel spec
    pub fn new(
        source_column: usize,
        source_name: impl Into<String>,
        display_name: impl Into<String>,
        short_name: impl Into<String>,
        units: impl Into<String>,
    ) -> Self {
        Self {
            source_column,
            source_name: source_name.into(),
            display_name: display_name.into(),
            short_name: short_name.into(),
            units: units.into(),
        }
    }
}

/// Linear scaling parameters attached to a channel descriptor
///
/// The pipeline is a pass-through: the default `(0, 1, 1, 0)` transform
/// leaves stored values equal to input values. Any real scaling belongs
/// to upstream instrumentation, not this converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleParams {
    /// Additive shift applied by the reader
    pub shift: i32,
    /// Multiplier applied by the reader
    pub multiplier: i32,
    /// Divisor applied by the reader
    pub scale: i32,
    /// Decimal places shown by the reader
    pub dec_places: i32,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            shift: 0,
            multiplier: 1,
            scale: 1,
            dec_places: 0,
        }
    }
}

/// Storage format of a channel's samples in the artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageFormat {
    /// Data type code understood by the analysis tool
    pub datatype: u16,
    /// Sample width in bytes
    pub datasize: u16,
}

impl StorageFormat {
    /// 4-byte IEEE float - accommodates any channel's value range
    /// without per-channel tuning.
    pub const FLOAT32: StorageFormat = StorageFormat {
        datatype: 0x07,
        datasize: 4,
    };
}

impl Default for StorageFormat {
    fn default() -> Self {
        Self::FLOAT32
    }
}

/// Finalized, id-bearing representation of one channel
///
/// Descriptors are produced by [`crate::channels::ChannelTable::build`]
/// and are immutable from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelDescriptor {
    /// Unique channel id: `id_base + position` in the finished table
    pub id: u32,
    /// Full display name
    pub display_name: String,
    /// Short name, at most [`MAX_SHORT_NAME_LEN`] characters
    pub short_name: String,
    /// Engineering unit
    pub units: String,
    /// Sampling rate in Hz, shared by every channel in the session
    pub sample_rate: u32,
    /// Linear scaling parameters (no-op by construction)
    pub scale: ScaleParams,
    /// Sample storage format (fixed 4-byte float)
    pub storage: StorageFormat,
}

impl fmt::Display for ChannelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({}, {} Hz)",
            self.display_name, self.short_name, self.units, self.sample_rate
        )
    }
}

/// Event metadata embedded in the artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    /// Event name
    pub name: String,
    /// Session label
    pub session: String,
    /// Free-text comment
    pub comment: String,
    /// Venue position marker
    pub venue_pos: u16,
}

/// Session metadata captured once at pipeline start
///
/// Constructed before processing begins, immutable thereafter, and
/// handed to the container writer exactly once alongside the channel
/// table and the encoded rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// Capture date, `DD/MM/YYYY`
    pub date: String,
    /// Capture time, `HH:MM:SS`
    pub time: String,
    /// Driver name
    pub driver: String,
    /// Vehicle name
    pub vehicle: String,
    /// Venue name
    pub venue: String,
    /// Free-text comment
    pub comment: String,
    /// Event metadata
    pub event: EventInfo,
}

impl SessionMetadata {
    /// Capture metadata for a session starting now, with the given
    /// descriptive fields.
    pub fn now(
        driver: impl Into<String>,
        vehicle: impl Into<String>,
        venue: impl Into<String>,
        comment: impl Into<String>,
        event: EventInfo,
    ) -> Self {
        let now = Local::now();
        Self {
            date: now.format("%d/%m/%Y").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            driver: driver.into(),
            vehicle: vehicle.into(),
            venue: venue.into(),
            comment: comment.into(),
            event,
        }
    }
}
