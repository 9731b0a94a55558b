// ABOUTME: Landmark source abstraction and the async frame-report stream
// ABOUTME: JSON-lines and in-memory sources feed frames into a shared workout session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # Landmark Sources
//!
//! The pose oracle is an external collaborator: anything that can hand out
//! [`PoseFrame`]s one at a time implements [`LandmarkSource`].
//! [`frame_stream`] pulls from a source and classifies each frame against a
//! shared session, yielding one [`FrameReport`] per frame. Dropping the
//! stream stops consumption; the session keeps whatever it has counted.
//!
//! ## JSON-lines format
//!
//! One frame per line, either a frame object
//! (`{"landmarks": {"LEFT_HIP": {"x": 0.4, "y": 0.6, "visibility": 0.9}}, "timestamp": "..."}`)
//! or a 33-element array of landmarks in BlazePose index order. Blank lines
//! are skipped.

use crate::errors::{AppError, AppResult};
use crate::models::{Landmark, PoseFrame};
use crate::sessions::SharedSession;
use async_stream::try_stream;
use async_trait::async_trait;
use chrono::Utc;
use formcoach_intelligence::FrameReport;
use futures_util::Stream;
use serde::Deserialize;
use std::collections::VecDeque;
use std::path::Path;
use std::pin::Pin;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};
use tracing::{debug, warn};

/// Producer of pose frames
#[async_trait]
pub trait LandmarkSource: Send {
    /// Next frame, or `None` when the source is exhausted
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read or decoded
    async fn next_frame(&mut self) -> AppResult<Option<PoseFrame>>;

    /// Human-readable source name for logs
    fn name(&self) -> &str;
}

/// Stream of per-frame reports produced by [`frame_stream`]
pub type FrameReportStream<'a> = Pin<Box<dyn Stream<Item = AppResult<FrameReport>> + Send + 'a>>;

/// Classify every frame from `source` against `session`, in order
///
/// The session lock is held for one classification at a time, so stats
/// stay readable while the stream runs. Frames without a timestamp are
/// evaluated at the wall clock.
#[must_use]
pub fn frame_stream<'a, S>(session: SharedSession, mut source: S) -> FrameReportStream<'a>
where
    S: LandmarkSource + 'a,
{
    Box::pin(try_stream! {
        let mut frames: u64 = 0;
        while let Some(frame) = source.next_frame().await? {
            let now = frame.timestamp.unwrap_or_else(Utc::now);
            let report = session.lock().await.process_frame(&frame, now);
            frames += 1;
            yield report;
        }
        debug!(source = source.name(), frames, "landmark source exhausted");
    })
}

/// One line of a JSON-lines landmark file
#[derive(Deserialize)]
#[serde(untagged)]
enum FrameLine {
    Indexed(Vec<Landmark>),
    Frame(PoseFrame),
}

/// Reads frames from newline-delimited JSON
pub struct JsonLinesSource<R> {
    lines: Lines<BufReader<R>>,
    line_number: usize,
    name: String,
}

impl JsonLinesSource<File> {
    /// Open a JSON-lines file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be opened
    pub async fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).await.map_err(|e| {
            AppError::storage(format!("Failed to open {}: {e}", path.display())).with_source(e)
        })?;
        Ok(Self::new(file, path.display().to_string()))
    }
}

impl<R: AsyncRead + Unpin + Send> JsonLinesSource<R> {
    /// Wrap any async reader
    #[must_use]
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            line_number: 0,
            name: name.into(),
        }
    }

    fn decode(&self, line: &str) -> AppResult<PoseFrame> {
        let parsed: FrameLine = serde_json::from_str(line).map_err(|e| {
            AppError::invalid_format(format!(
                "{} line {}: not a pose frame: {e}",
                self.name, self.line_number
            ))
        })?;
        match parsed {
            FrameLine::Indexed(landmarks) => PoseFrame::from_indexed(&landmarks),
            FrameLine::Frame(frame) => Ok(frame),
        }
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> LandmarkSource for JsonLinesSource<R> {
    async fn next_frame(&mut self) -> AppResult<Option<PoseFrame>> {
        loop {
            let Some(line) = self.lines.next_line().await? else {
                return Ok(None);
            };
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return self.decode(trimmed).map(Some).inspect_err(|e| {
                warn!(source = %self.name, line = self.line_number, error = %e, "bad frame line");
            });
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// In-memory frame queue
#[derive(Debug, Default)]
pub struct VecSource {
    frames: VecDeque<PoseFrame>,
}

impl VecSource {
    /// Source yielding `frames` in order
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = PoseFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

#[async_trait]
impl LandmarkSource for VecSource {
    async fn next_frame(&mut self) -> AppResult<Option<PoseFrame>> {
        Ok(self.frames.pop_front())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
