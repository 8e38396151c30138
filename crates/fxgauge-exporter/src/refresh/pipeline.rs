//! One refresh cycle.
//!
//! Errors are split in two tiers:
//! - document-level (transport, charset, malformed XML): the cycle is aborted
//!   before anything is written, so earlier samples stay as they were;
//! - record-level (bad number, zero nominal, missing code): the record is
//!   logged and skipped, the other records are still published.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use fxgauge_core::error::{ErrorKind, FxError, Result};
use fxgauge_core::rates::RateDocument;

use crate::config::CodeNameMapping;
use crate::obs::metrics::ExporterMetrics;
use crate::refresh::source::RateSource;

/// Outcome of a cycle that got as far as publishing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub published: usize,
    pub skipped: usize,
}

pub struct Pipeline {
    source: Arc<dyn RateSource>,
    mapping: Arc<CodeNameMapping>,
    metrics: Arc<ExporterMetrics>,
}

impl Pipeline {
    pub fn new(
        source: Arc<dyn RateSource>,
        mapping: Arc<CodeNameMapping>,
        metrics: Arc<ExporterMetrics>,
    ) -> Self {
        Self {
            source,
            mapping,
            metrics,
        }
    }

    /// Run a cycle for today's local date.
    pub async fn run_cycle(&self) -> Result<CycleReport> {
        self.run_cycle_for(Local::now().date_naive()).await
    }

    pub async fn run_cycle_for(&self, date: NaiveDate) -> Result<CycleReport> {
        let res = self.fetch_and_publish(date).await;

        let outcome = match &res {
            Ok(_) => "success",
            Err(e) if e.kind() == ErrorKind::Transport => "transport_error",
            Err(_) => "decode_error",
        };
        self.metrics.refresh_cycles.inc(&[("outcome", outcome)]);

        res
    }

    async fn fetch_and_publish(&self, date: NaiveDate) -> Result<CycleReport> {
        let body = self.source.fetch(date).await?;
        let doc = RateDocument::parse(&body)?;
        tracing::debug!(
            requested = %date,
            served = doc.date.as_deref().unwrap_or("-"),
            records = doc.len(),
            "rate table decoded"
        );
        Ok(self.publish(&doc))
    }

    /// Write every valid record of `doc` into the `exchange_rate` gauge.
    pub fn publish(&self, doc: &RateDocument) -> CycleReport {
        let mut report = CycleReport::default();

        for record in &doc.records {
            match record.per_unit_rate() {
                Ok(rate) => {
                    let code = record.code.as_str();
                    let name = self.mapping.name_for(code);
                    tracing::info!("setting exchange_rate{{code=\"{code}\", name=\"{name}\"}} = {rate}");
                    self.metrics
                        .exchange_rate
                        .set(&[("code", code), ("name", name)], rate);
                    report.published += 1;
                }
                Err(e) => {
                    tracing::warn!(code = %record.code, error = %e, "skipping rate record");
                    self.metrics
                        .records_skipped
                        .inc(&[("reason", skip_reason(&e))]);
                    report.skipped += 1;
                }
            }
        }

        report
    }
}

fn skip_reason(e: &FxError) -> &'static str {
    match e.kind() {
        ErrorKind::InvalidNumber => "invalid_number",
        ErrorKind::ZeroNominal => "zero_nominal",
        ErrorKind::MissingCode => "missing_code",
        ErrorKind::NonFiniteRate => "non_finite_rate",
        _ => "other",
    }
}
