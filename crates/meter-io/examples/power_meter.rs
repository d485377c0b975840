//! End-to-end pipeline over a power-meter export.
//!
//! Mirrors the original workflow: load the CSV, fit the SSA model, save and
//! reload it, run both detectors, print both tables, and write them to TSV.
//!
//! Usage: `cargo run --example power_meter -- power-export_min.csv`

use anyhow::{Context, Result};
use meter_core::DetectorProperties;
use meter_io::{read_meter_csv, render_report, save_report_tsv};
use meter_report::DetectionReport;
use meter_saliency::SaliencyDetector;
use meter_ssa::{SsaModel, SsaParameters, SsaSpikeDetector};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "power-export_min.csv".to_string());
    let series = read_meter_csv(&path).with_context(|| format!("loading {path}"))?;

    let params = SsaParameters::default();
    let fitted = SsaSpikeDetector::fit(&series, params.clone())?;

    // Persist the model and reload it, as the batch pipeline would.
    let model_path = "powermeterspikemodel.json";
    std::fs::write(model_path, fitted.model().to_bytes()?)?;
    println!("Saved model to {model_path}");
    let model = SsaModel::from_bytes(&std::fs::read(model_path)?)?;
    let spike_detector = SsaSpikeDetector::from_model(model, params)?;

    let saliency_detector = SaliencyDetector::default();

    let (spike_results, saliency_results) =
        meter_report::detect_both(&series, &spike_detector, &saliency_detector);

    let spike_report =
        DetectionReport::new(&series, spike_detector.algorithm_name(), spike_results?)?;
    let saliency_report = DetectionReport::new(
        &series,
        saliency_detector.algorithm_name(),
        saliency_results?,
    )?;

    let stdout = std::io::stdout();
    render_report(&spike_report, stdout.lock())?;
    render_report(&saliency_report, stdout.lock())?;

    save_report_tsv(&spike_report, "SpikePredictions.tsv")?;
    save_report_tsv(&saliency_report, "SaliencyPredictions.tsv")?;
    Ok(())
}
