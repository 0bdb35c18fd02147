//! Channel table construction
//!
//! Builds the ordered, immutable list of channel descriptors from a
//! static spec list. Malformed specs are skipped with a diagnostic
//! rather than aborting the run - a partial channel table is valid, and
//! the sample encoder reads only the columns that made it in.

use crate::types::{
    ChannelDescriptor, ChannelSpec, ScaleParams, StorageFormat, MAX_SHORT_NAME_LEN,
};

/// Default base for channel id assignment.
pub const DEFAULT_ID_BASE: u32 = 8000;

/// The finished channel table
///
/// Owned by the pipeline for the duration of one conversion run.
/// Descriptor order matches spec order (minus skipped specs), and
/// `accepted_columns` holds the source column for each descriptor in the
/// same order - it is the encoder's read plan for every input row.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTable {
    descriptors: Vec<ChannelDescriptor>,
    accepted_columns: Vec<usize>,
    skipped: usize,
}

/// Accepted/skipped counts for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Specs that produced a descriptor
    pub accepted: usize,
    /// Specs skipped as malformed
    pub skipped: usize,
}

impl ChannelTable {
    /// Build a channel table from `specs`, in spec order.
    ///
    /// Each well-formed spec yields one descriptor with
    /// `id = id_base + position` (position counted over accepted
    /// descriptors, so ids are contiguous even when specs are skipped),
    /// the short name truncated to [`MAX_SHORT_NAME_LEN`] characters,
    /// the shared `sample_rate`, and the fixed pass-through scale and
    /// 4-byte float storage parameters.
    ///
    /// A spec is malformed if its display name is empty or its source
    /// column was already claimed by an earlier accepted spec; such
    /// specs are logged and skipped.
    pub fn build(specs: &[ChannelSpec], sample_rate: u32, id_base: u32) -> Self {
        let mut descriptors = Vec::with_capacity(specs.len());
        let mut accepted_columns = Vec::with_capacity(specs.len());
        let mut skipped = 0;

        for spec in specs {
            if spec.display_name.trim().is_empty() {
                log::warn!(
                    "Skipping channel spec for column {} ({}): empty display name",
                    spec.source_column,
                    spec.source_name
                );
                skipped += 1;
                continue;
            }
            if accepted_columns.contains(&spec.source_column) {
                log::warn!(
                    "Skipping channel spec {:?}: source column {} already mapped",
                    spec.display_name,
                    spec.source_column
                );
                skipped += 1;
                continue;
            }

            let id = id_base + descriptors.len() as u32;
            descriptors.push(ChannelDescriptor {
                id,
                display_name: spec.display_name.clone(),
                short_name: truncate_short_name(&spec.short_name),
                units: spec.units.clone(),
                sample_rate,
                scale: ScaleParams::default(),
                storage: StorageFormat::FLOAT32,
            });
            accepted_columns.push(spec.source_column);
        }

        Self {
            descriptors,
            accepted_columns,
            skipped,
        }
    }

    /// Descriptors in output order
    pub fn descriptors(&self) -> &[ChannelDescriptor] {
        &self.descriptors
    }

    /// Source column index for each descriptor, in the same order
    pub fn accepted_columns(&self) -> &[usize] {
        &self.accepted_columns
    }

    /// Number of accepted channels
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// True if no spec produced a descriptor
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Accepted/skipped counts
    pub fn stats(&self) -> TableStats {
        TableStats {
            accepted: self.descriptors.len(),
            skipped: self.skipped,
        }
    }
}

/// Truncate (never pad) a short name to the artifact's field width.
fn truncate_short_name(name: &str) -> String {
    name.chars().take(MAX_SHORT_NAME_LEN).collect()
}
