//! Binary container writer
//!
//! Serializes a finished conversion (session metadata, channel table,
//! encoded rows) into a single self-describing artifact. The writer is
//! behind [`ContainerWriter`] so the pipeline can be exercised without
//! touching the filesystem; [`LdFileWriter`] is the production
//! implementation.
//!
//! ## Artifact layout (little-endian throughout)
//! - header: 8-byte magic, format version `u16`, channel count `u16`,
//!   row count `u32`, sample rate `u32`
//! - metadata block: fixed-width NUL-padded strings (date 16, time 16,
//!   driver/vehicle/venue 64 each, comment 128, event name 64, session
//!   64, event comment 128) plus venue position `u16`
//! - one 72-byte record per channel: id `u32`, rate `u32`,
//!   shift/multiplier/scale/dec_places `i32`, datatype `u16`,
//!   datasize `u16`, display name 24, short name 8, units 12
//! - sample block: rows in input order, each value an `f32`
//!
//! String fields are truncated to their field width and NUL-padded;
//! samples are row-major, one `f32` per accepted channel.

use crate::channels::ChannelTable;
use crate::types::{ChannelDescriptor, EncodedRow, Result, SessionMetadata};
use byteorder::{LittleEndian, WriteBytesExt};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Artifact magic, first 8 bytes of every file
pub const MAGIC: &[u8; 8] = b"LDTELEM\0";

/// Artifact format version
pub const FORMAT_VERSION: u16 = 1;

/// Fixed header length in bytes
pub const HEADER_LEN: u64 = 20;

/// Fixed metadata block length in bytes
pub const METADATA_BLOCK_LEN: u64 = 610;

/// Fixed per-channel record length in bytes
pub const CHANNEL_RECORD_LEN: u64 = 72;

/// Total artifact size for a given channel and row count.
///
/// The layout is fully fixed-width, so the size is arithmetic: header,
/// metadata block, one record per channel, then 4 bytes per value.
pub fn artifact_size(channels: usize, rows: usize) -> u64 {
    HEADER_LEN
        + METADATA_BLOCK_LEN
        + CHANNEL_RECORD_LEN * channels as u64
        + 4 * (channels * rows) as u64
}

/// Sink for one finished conversion
///
/// The pipeline calls `write` exactly once per run, after all rows have
/// been encoded. Implementations must not retain the borrowed data.
pub trait ContainerWriter {
    /// Consume the finished conversion and produce the artifact.
    /// Returns the number of bytes written.
    fn write(
        &mut self,
        metadata: &SessionMetadata,
        table: &ChannelTable,
        rows: &[EncodedRow],
    ) -> Result<u64>;
}

/// Production writer - serializes the artifact to a file on disk
pub struct LdFileWriter {
    path: PathBuf,
}

impl LdFileWriter {
    /// Create a writer targeting `path`. The file is created (or
    /// truncated) only when `write` runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output path this writer targets
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContainerWriter for LdFileWriter {
    fn write(
        &mut self,
        metadata: &SessionMetadata,
        table: &ChannelTable,
        rows: &[EncodedRow],
    ) -> Result<u64> {
        log::info!("Writing artifact: {:?}", self.path);

        let file = File::create(&self.path)?;
        let mut out = BufWriter::new(file);
        write_artifact(&mut out, metadata, table, rows)?;
        out.flush()?;

        Ok(artifact_size(table.len(), rows.len()))
    }
}

/// Serialize one conversion to any byte sink.
fn write_artifact<W: Write>(
    out: &mut W,
    metadata: &SessionMetadata,
    table: &ChannelTable,
    rows: &[EncodedRow],
) -> Result<()> {
    // Header
    out.write_all(MAGIC)?;
    out.write_u16::<LittleEndian>(FORMAT_VERSION)?;
    out.write_u16::<LittleEndian>(table.len() as u16)?;
    out.write_u32::<LittleEndian>(rows.len() as u32)?;
    let sample_rate = table
        .descriptors()
        .first()
        .map(|d| d.sample_rate)
        .unwrap_or(0);
    out.write_u32::<LittleEndian>(sample_rate)?;

    // Metadata block
    write_fixed(out, &metadata.date, 16)?;
    write_fixed(out, &metadata.time, 16)?;
    write_fixed(out, &metadata.driver, 64)?;
    write_fixed(out, &metadata.vehicle, 64)?;
    write_fixed(out, &metadata.venue, 64)?;
    write_fixed(out, &metadata.comment, 128)?;
    write_fixed(out, &metadata.event.name, 64)?;
    write_fixed(out, &metadata.event.session, 64)?;
    write_fixed(out, &metadata.event.comment, 128)?;
    out.write_u16::<LittleEndian>(metadata.event.venue_pos)?;

    // Channel records
    for desc in table.descriptors() {
        write_channel_record(out, desc)?;
    }

    // Sample block, row-major
    for row in rows {
        for &value in row {
            out.write_f32::<LittleEndian>(value)?;
        }
    }

    Ok(())
}

fn write_channel_record<W: Write>(out: &mut W, desc: &ChannelDescriptor) -> Result<()> {
    out.write_u32::<LittleEndian>(desc.id)?;
    out.write_u32::<LittleEndian>(desc.sample_rate)?;
    out.write_i32::<LittleEndian>(desc.scale.shift)?;
    out.write_i32::<LittleEndian>(desc.scale.multiplier)?;
    out.write_i32::<LittleEndian>(desc.scale.scale)?;
    out.write_i32::<LittleEndian>(desc.scale.dec_places)?;
    out.write_u16::<LittleEndian>(desc.storage.datatype)?;
    out.write_u16::<LittleEndian>(desc.storage.datasize)?;
    write_fixed(out, &desc.display_name, 24)?;
    write_fixed(out, &desc.short_name, 8)?;
    write_fixed(out, &desc.units, 12)?;
    Ok(())
}

/// Write `text` into a fixed-width field: truncated to `width` bytes,
/// NUL-padded to exactly `width`.
fn write_fixed<W: Write>(out: &mut W, text: &str, width: usize) -> Result<()> {
    let bytes = text.as_bytes();
    let take = bytes.len().min(width);
    out.write_all(&bytes[..take])?;
    for _ in take..width {
        out.write_u8(0)?;
    }
    Ok(())
}

/// Test double - records what the pipeline handed over instead of
/// serializing it.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    /// Number of times `write` was called
    pub calls: usize,
    /// Metadata from the last call
    pub metadata: Option<SessionMetadata>,
    /// Descriptors from the last call
    pub descriptors: Vec<ChannelDescriptor>,
    /// Rows from the last call, in the order they were handed over
    pub rows: Vec<EncodedRow>,
}

impl MemoryWriter {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContainerWriter for MemoryWriter {
    fn write(
        &mut self,
        metadata: &SessionMetadata,
        table: &ChannelTable,
        rows: &[EncodedRow],
    ) -> Result<u64> {
        self.calls += 1;
        self.metadata = Some(metadata.clone());
        self.descriptors = table.descriptors().to_vec();
        self.rows = rows.to_vec();
        Ok(artifact_size(table.len(), rows.len()))
    }
}
