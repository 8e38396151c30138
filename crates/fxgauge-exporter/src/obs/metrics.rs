//! Metrics registry for the exporter.
//!
//! `exchange_rate` is the published data; the `fxgauge_*` families describe
//! the refresh loop itself. Writers (the refresh cycle) and readers (scrapes)
//! never coordinate: each series is an atomic inside a `DashMap` shard, so a
//! scrape sees every series either before or after a given `set`.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

type LabelKey = Vec<(String, String)>;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn label_str(key: &LabelKey) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

fn render_header(name: &str, help: &str, kind: &str, out: &mut String) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
}

/// Sorted `(labels, value)` lines so scrapes are stable across calls.
fn render_series(name: &str, mut series: Vec<(String, String)>, out: &mut String) {
    series.sort();
    for (labels, val) in series {
        if labels.is_empty() {
            let _ = writeln!(out, "{} {}", name, val);
        } else {
            let _ = writeln!(out, "{}{{{}}} {}", name, labels, val);
        }
    }
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        render_header(name, help, "counter", out);
        let series = self
            .map
            .iter()
            .map(|r| (label_str(r.key()), r.value().load(Ordering::Relaxed).to_string()))
            .collect();
        render_series(name, series, out);
    }
}

/// Float gauge family. Values are stored as `f64` bits in an `AtomicU64`.
#[derive(Default)]
pub struct GaugeVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl GaugeVec {
    /// Set or overwrite the series for `labels`.
    pub fn set(&self, labels: &[(&str, &str)], v: f64) {
        self.map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0))
            .store(v.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self, labels: &[(&str, &str)]) -> Option<f64> {
        self.map
            .get(&label_key(labels))
            .map(|g| f64::from_bits(g.load(Ordering::Relaxed)))
    }

    /// Number of series ever set. Series are never removed.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        render_header(name, help, "gauge", out);
        let series = self
            .map
            .iter()
            .map(|r| {
                let v = f64::from_bits(r.value().load(Ordering::Relaxed));
                (label_str(r.key()), v.to_string())
            })
            .collect();
        render_series(name, series, out);
    }
}

#[derive(Default)]
pub struct ExporterMetrics {
    /// `exchange_rate{code,name}`: price of one unit of `code`.
    pub exchange_rate: GaugeVec,
    /// Refresh cycles by outcome.
    pub refresh_cycles: CounterVec,
    /// Records dropped during publish, by reason.
    pub records_skipped: CounterVec,
    draining: AtomicBool,
}

impl ExporterMetrics {
    /// Mark draining state.
    pub fn set_draining(&self) {
        self.draining.store(true, Ordering::Relaxed);
    }
    /// Return whether draining is active.
    pub fn is_draining(&self) -> bool {
        self.draining.load(Ordering::Relaxed)
    }

    /// Render all families in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.exchange_rate.render("exchange_rate", "Exchange rate", &mut out);
        self.refresh_cycles.render(
            "fxgauge_refresh_cycles_total",
            "Refresh cycles by outcome",
            &mut out,
        );
        self.records_skipped.render(
            "fxgauge_records_skipped_total",
            "Rate records skipped during publish",
            &mut out,
        );

        render_header("fxgauge_draining", "1 while shutting down", "gauge", &mut out);
        let _ = writeln!(out, "fxgauge_draining {}", if self.is_draining() { 1 } else { 0 });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_overwrites_instead_of_accumulating() {
        let g = GaugeVec::default();
        g.set(&[("code", "USD"), ("name", "")], 90.0);
        g.set(&[("name", ""), ("code", "USD")], 91.5);

        assert_eq!(g.len(), 1);
        assert_eq!(g.get(&[("code", "USD"), ("name", "")]), Some(91.5));
        assert_eq!(g.get(&[("code", "EUR"), ("name", "")]), None);
    }

    #[test]
    fn render_is_sorted_and_escaped() {
        let m = ExporterMetrics::default();
        m.exchange_rate.set(&[("code", "USD"), ("name", "US \"Dollar\"")], 90.0);
        m.exchange_rate.set(&[("code", "EUR"), ("name", "")], 100.25);
        m.refresh_cycles.inc(&[("outcome", "success")]);

        let out = m.render();
        let eur = out.find("exchange_rate{code=\"EUR\",name=\"\"} 100.25").unwrap();
        let usd = out
            .find("exchange_rate{code=\"USD\",name=\"US \\\"Dollar\\\"\"} 90")
            .unwrap();
        assert!(eur < usd);
        assert!(out.contains("# TYPE exchange_rate gauge"));
        assert!(out.contains("fxgauge_refresh_cycles_total{outcome=\"success\"} 1"));
        assert!(out.contains("fxgauge_draining 0"));
    }

    #[test]
    fn escape_label_handles_specials() {
        assert_eq!(escape_label("a\\b\"c\nd"), "a\\\\b\\\"c\\nd");
    }
}
