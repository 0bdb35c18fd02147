//! LD Encoder Library
//!
//! Converts irregularly-typed time-series telemetry (rows of named
//! numeric channels sampled at a fixed interval) into a single
//! self-describing binary artifact.
//!
//! # Architecture
//!
//! The library is a strictly sequential batch pipeline:
//! - derives one uniform sample rate from the first two timestamped rows
//! - builds an ordered, immutable channel descriptor table from a
//!   static channel specification
//! - encodes each input row into a fixed-width value vector, defaulting
//!   missing or malformed fields to `0.0`
//! - hands the finished table, session metadata and all encoded rows to
//!   a container writer exactly once
//!
//! Robustness over fidelity: channel-level and field-level problems are
//! absorbed (skipped channel, zero-defaulted field) and reported only
//! as aggregate counts in the [`pipeline::ConversionSummary`]. The only
//! hard failure the library knows is the writer failing to produce the
//! artifact.
//!
//! CSV parsing, CLI handling and output-path policy live in the
//! application layer (ld-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use ld_encoder::{Pipeline, PipelineConfig, MemoryWriter};
//! use ld_encoder::types::{EventInfo, SessionMetadata};
//!
//! let specs = ld_encoder::specs::stock_channel_specs();
//! let rows: Vec<Vec<String>> = vec![/* from the CSV collaborator */];
//! let metadata = SessionMetadata::now(
//!     "Driver",
//!     "Vehicle",
//!     "Track",
//!     "All Channels",
//!     EventInfo {
//!         name: "Full Data Session".to_string(),
//!         session: "All Channels".to_string(),
//!         comment: String::new(),
//!         venue_pos: 0,
//!     },
//! );
//!
//! let pipeline = Pipeline::new(PipelineConfig::new().with_max_rows(1000));
//! let mut writer = MemoryWriter::new();
//! let summary = pipeline.run(&specs, &rows, &metadata, &mut writer).unwrap();
//! println!("{} rows at {} Hz", summary.rows_encoded, summary.sample_rate);
//! ```

// Public modules
pub mod channels;
pub mod config;
pub mod encoder;
pub mod frequency;
pub mod pipeline;
pub mod specs;
pub mod types;
pub mod writer;

// Re-export main types for convenience
pub use channels::{ChannelTable, TableStats};
pub use config::PipelineConfig;
pub use pipeline::{ConversionSummary, Pipeline};
pub use types::{
    ChannelDescriptor, ChannelSpec, EncodedRow, EncoderError, EventInfo, Result, SessionMetadata,
};
pub use writer::{ContainerWriter, LdFileWriter, MemoryWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: stock specs build into a full table
        let specs = specs::stock_channel_specs();
        let table = ChannelTable::build(&specs, 500, channels::DEFAULT_ID_BASE);
        assert_eq!(table.len(), specs.len());
    }
}
