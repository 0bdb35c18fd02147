//! Conversion pipeline
//!
//! Orchestrates one conversion run: cap the input, estimate the sample
//! rate once, build the channel table once, encode every row in input
//! order, then hand the whole session to the container writer exactly
//! once. The pipeline buffers the full session in memory - there is no
//! streaming mode.

use crate::channels::ChannelTable;
use crate::config::PipelineConfig;
use crate::encoder::encode_row;
use crate::frequency::estimate_sample_rate;
use crate::types::{ChannelSpec, EncodedRow, Result, SessionMetadata};
use crate::writer::ContainerWriter;

/// End-of-run diagnostics for the operator
///
/// Channel- and field-level problems never fail a run; this is where
/// they become visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Estimated (or default) sample rate in Hz
    pub sample_rate: u32,
    /// Channel specs that produced a descriptor
    pub channels_accepted: usize,
    /// Channel specs skipped as malformed
    pub channels_skipped: usize,
    /// Rows encoded (always equals the processed input-row count)
    pub rows_encoded: usize,
    /// Fields substituted with 0.0 across the whole session
    pub fields_defaulted: usize,
    /// Artifact size reported by the writer
    pub bytes_written: u64,
}

/// One-shot conversion pipeline
///
/// Owns nothing across runs; all per-run state (channel table, row
/// buffer) lives inside `run`.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run one conversion.
    ///
    /// Guarantees, in order:
    /// 1. the row cap (if any) is applied before anything else, so the
    ///    rate estimate only ever sees capped rows;
    /// 2. the sample rate is estimated exactly once;
    /// 3. the channel table is built exactly once;
    /// 4. every capped row is encoded exactly once, in input order -
    ///    rows are never reordered or dropped, however malformed;
    /// 5. the writer consumes the table, metadata and full row sequence
    ///    exactly once, after all encoding is done.
    ///
    /// The only failure path is the writer itself.
    pub fn run<W: ContainerWriter>(
        &self,
        specs: &[ChannelSpec],
        rows: &[Vec<String>],
        metadata: &SessionMetadata,
        writer: &mut W,
    ) -> Result<ConversionSummary> {
        let rows = match self.config.max_rows {
            Some(cap) => &rows[..rows.len().min(cap)],
            None => rows,
        };

        let sample_rate = estimate_sample_rate(rows, self.config.time_column);
        log::info!("Sample rate: {} Hz", sample_rate);

        let table = ChannelTable::build(specs, sample_rate, self.config.id_base);
        let stats = table.stats();
        log::info!(
            "Channel table: {} accepted, {} skipped",
            stats.accepted,
            stats.skipped
        );

        let mut encoded: Vec<EncodedRow> = Vec::with_capacity(rows.len());
        let mut fields_defaulted = 0;
        for row in rows {
            let (values, defaulted) = encode_row(row, table.accepted_columns());
            debug_assert_eq!(values.len(), table.len());
            encoded.push(values);
            fields_defaulted += defaulted;
        }
        log::info!(
            "Encoded {} rows ({} fields defaulted)",
            encoded.len(),
            fields_defaulted
        );

        let bytes_written = writer.write(metadata, &table, &encoded)?;

        Ok(ConversionSummary {
            sample_rate,
            channels_accepted: stats.accepted,
            channels_skipped: stats.skipped,
            rows_encoded: encoded.len(),
            fields_defaulted,
            bytes_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventInfo;
    use crate::writer::MemoryWriter;

    fn metadata() -> SessionMetadata {
        SessionMetadata::now(
            "Driver",
            "Vehicle",
            "Track",
            "",
            EventInfo {
                name: "Test".to_string(),
                session: "S1".to_string(),
                comment: String::new(),
                venue_pos: 0,
            },
        )
    }

    fn specs() -> Vec<ChannelSpec> {
        vec![
            ChannelSpec::new(1, "TS", "Time", "Time", "s"),
            ChannelSpec::new(2, "SPEED", "Speed", "Speed", "kph"),
        ]
    }

    fn rows(n: usize) -> Vec<Vec<String>> {
        (0..n)
            .map(|i| {
                vec![
                    i.to_string(),
                    format!("{}", i as f64 * 0.002),
                    format!("{}", 100 + i),
                ]
            })
            .collect()
    }

    #[test]
    fn test_row_count_preserved() {
        let pipeline = Pipeline::new(PipelineConfig::new());
        let mut writer = MemoryWriter::new();
        let summary = pipeline
            .run(&specs(), &rows(10), &metadata(), &mut writer)
            .unwrap();

        assert_eq!(summary.rows_encoded, 10);
        assert_eq!(writer.rows.len(), 10);
        assert_eq!(writer.calls, 1);
    }

    #[test]
    fn test_input_order_preserved() {
        let pipeline = Pipeline::new(PipelineConfig::new());
        let mut writer = MemoryWriter::new();
        pipeline
            .run(&specs(), &rows(5), &metadata(), &mut writer)
            .unwrap();

        // Second channel carries 100 + row index
        for (i, row) in writer.rows.iter().enumerate() {
            assert_eq!(row[1], (100 + i) as f32);
        }
    }

    #[test]
    fn test_max_rows_caps_processing_and_estimation() {
        // 1000 input rows capped at 5; rate comes from rows 0 and 1
        let pipeline = Pipeline::new(PipelineConfig::new().with_max_rows(5));
        let mut writer = MemoryWriter::new();
        let summary = pipeline
            .run(&specs(), &rows(1000), &metadata(), &mut writer)
            .unwrap();

        assert_eq!(summary.rows_encoded, 5);
        assert_eq!(summary.sample_rate, 500);
    }

    #[test]
    fn test_cap_of_one_forces_default_rate() {
        let pipeline = Pipeline::new(PipelineConfig::new().with_max_rows(1));
        let mut writer = MemoryWriter::new();
        let summary = pipeline
            .run(&specs(), &rows(100), &metadata(), &mut writer)
            .unwrap();

        assert_eq!(summary.rows_encoded, 1);
        assert_eq!(
            summary.sample_rate,
            crate::frequency::DEFAULT_SAMPLE_RATE_HZ
        );
    }

    #[test]
    fn test_defaulted_fields_aggregate() {
        let input = vec![
            vec!["0".to_string(), "0.0".to_string(), "".to_string()],
            vec!["1".to_string(), "None".to_string(), "101".to_string()],
        ];
        let pipeline = Pipeline::new(PipelineConfig::new());
        let mut writer = MemoryWriter::new();
        let summary = pipeline
            .run(&specs(), &input, &metadata(), &mut writer)
            .unwrap();

        assert_eq!(summary.rows_encoded, 2);
        assert_eq!(summary.fields_defaulted, 2);
        assert_eq!(writer.rows[0], vec![0.0, 0.0]);
        assert_eq!(writer.rows[1], vec![0.0, 101.0]);
    }

    #[test]
    fn test_empty_input_still_writes() {
        let pipeline = Pipeline::new(PipelineConfig::new());
        let mut writer = MemoryWriter::new();
        let summary = pipeline
            .run(&specs(), &[], &metadata(), &mut writer)
            .unwrap();

        assert_eq!(summary.rows_encoded, 0);
        assert_eq!(summary.sample_rate, 500);
        assert_eq!(writer.calls, 1);
    }
}
