//! Refresh loop lifecycle.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use fxgauge_core::error::FxError;
use fxgauge_exporter::config::CodeNameMapping;
use fxgauge_exporter::obs::metrics::ExporterMetrics;
use fxgauge_exporter::refresh::{scheduler, Pipeline};

use fixtures::{daily_doc, HangingSource, ScriptedSource};

#[tokio::test]
async fn runs_repeatedly_and_survives_failures() {
    let source = Arc::new(ScriptedSource::new(vec![
        Err(FxError::Transport("down".into())),
        Ok(daily_doc(&[("USD", "1", "90,00")])),
    ]));
    let metrics = Arc::new(ExporterMetrics::default());
    let pipeline = Arc::new(Pipeline::new(
        source.clone(),
        Arc::new(CodeNameMapping::default()),
        Arc::clone(&metrics),
    ));

    let cancel = CancellationToken::new();
    let handle = scheduler::spawn(pipeline, Duration::from_millis(10), cancel.clone());

    tokio::time::timeout(Duration::from_secs(5), async {
        while source.calls() < 4 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("loop must keep ticking");

    cancel.cancel();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("loop must stop on cancel")
        .unwrap();

    assert_eq!(metrics.refresh_cycles.get(&[("outcome", "transport_error")]), 1);
    assert!(metrics.refresh_cycles.get(&[("outcome", "success")]) >= 3);
    assert_eq!(
        metrics.exchange_rate.get(&[("code", "USD"), ("name", "")]),
        Some(90.0)
    );
}

#[tokio::test]
async fn cancel_interrupts_inflight_fetch() {
    let pipeline = Arc::new(Pipeline::new(
        Arc::new(HangingSource),
        Arc::new(CodeNameMapping::default()),
        Arc::new(ExporterMetrics::default()),
    ));

    let cancel = CancellationToken::new();
    let handle = scheduler::spawn(pipeline, Duration::from_secs(600), cancel.clone());

    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("hanging fetch must not block shutdown")
        .unwrap();
}

#[tokio::test]
async fn cancel_interrupts_sleep() {
    let source = Arc::new(ScriptedSource::always(daily_doc(&[("EUR", "1", "100,00")])));
    let pipeline = Arc::new(Pipeline::new(
        source.clone(),
        Arc::new(CodeNameMapping::default()),
        Arc::new(ExporterMetrics::default()),
    ));

    let cancel = CancellationToken::new();
    let handle = scheduler::spawn(pipeline, Duration::from_secs(600), cancel.clone());

    tokio::time::timeout(Duration::from_secs(5), async {
        while source.calls() < 1 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .unwrap();

    cancel.cancel();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("sleep must be cancellable")
        .unwrap();
    assert_eq!(source.calls(), 1);
}
