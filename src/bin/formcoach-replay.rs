// ABOUTME: Replay CLI that runs a recorded landmark file through one workout session
// ABOUTME: Prints a report per frame and the final stats, as text or JSON lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # FormCoach Replay
//!
//! Offline counterpart of the HTTP API: reads a JSON-lines landmark file
//! and classifies it frame by frame. Logs go to stderr so stdout carries
//! only the reports.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use formcoach::{
    config::ServerConfig,
    constants::service_names,
    logging::{LogOutput, LoggingConfig},
    models::{ExerciseType, WorkoutStats},
    sources::{frame_stream, JsonLinesSource, LandmarkSource},
};
use formcoach_intelligence::{ClassifierRegistry, FrameReport, WorkoutSession};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_stream::StreamExt;
use tracing::info;

#[derive(Parser)]
#[command(name = "formcoach-replay")]
#[command(about = "Replay recorded pose landmarks through the rep counter")]
pub struct Args {
    /// Exercise to count (display name or alias, e.g. "Push Ups" or `push_ups`)
    #[arg(short, long)]
    exercise: Option<String>,

    /// JSON-lines file with one pose frame per line
    #[arg(short, long)]
    input: PathBuf,

    /// Emit JSON lines instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env()
        .with_service_name(service_names::FORMCOACH_REPLAY)
        .with_output(LogOutput::Stderr)
        .init()?;

    let config = ServerConfig::from_env()?;
    let exercise = match args.exercise.as_deref() {
        Some(name) => name
            .parse::<ExerciseType>()
            .with_context(|| format!("Invalid --exercise value '{name}'"))?,
        None => config.workout.default_exercise,
    };

    let mut source = JsonLinesSource::open(&args.input).await?;
    info!(input = %args.input.display(), exercise = %exercise, "replay started");

    // Recorded frames carry their own clock; start the session at the first one
    let first = source.next_frame().await?;
    let start = first
        .as_ref()
        .and_then(|frame| frame.timestamp)
        .unwrap_or_else(Utc::now);

    let registry = Arc::new(ClassifierRegistry::with_thresholds(&config.classifier));
    let session = Arc::new(Mutex::new(WorkoutSession::new(
        exercise,
        registry,
        config.workout.settings(),
        start,
    )));

    let mut frame_index: u64 = 0;
    let mut last_stats = session.lock().await.stats(start);
    if let Some(frame) = first {
        let report = session
            .lock()
            .await
            .process_frame(&frame, frame.timestamp.unwrap_or(start));
        frame_index += 1;
        print_report(frame_index, &report, args.json)?;
        last_stats = report.stats;
    }

    let mut reports = frame_stream(Arc::clone(&session), source);
    while let Some(report) = reports.next().await {
        let report = report?;
        frame_index += 1;
        print_report(frame_index, &report, args.json)?;
        last_stats = report.stats;
    }

    print_summary(&last_stats, args.json)?;
    info!(frames = frame_index, reps = last_stats.reps, "replay finished");
    Ok(())
}

fn print_report(index: u64, report: &FrameReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!(
            "frame {index:>5}  stage {:<12} reps {:>3}  {}",
            report.stage, report.stats.reps, report.stats.feedback
        );
    }
    Ok(())
}

fn print_summary(stats: &WorkoutStats, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(stats)?);
    } else {
        println!("=== {} ===", stats.exercise);
        println!("Reps:     {}", stats.reps);
        println!("Sets:     {}", stats.sets);
        println!("Duration: {} s", stats.duration);
        println!("Calories: {} kcal", stats.calories);
    }
    Ok(())
}
