// ABOUTME: Registry of live workout sessions keyed by session id
// ABOUTME: Sessions share one classifier registry, are capped at a maximum and evicted when idle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use crate::config::ServerConfig;
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::models::ExerciseType;
use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use formcoach_intelligence::{ClassifierRegistry, WorkoutSession, WorkoutSettings};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// A session that can be driven from several tasks
pub type SharedSession = Arc<Mutex<WorkoutSession>>;

/// Map entry: the session plus the time of its last request
#[derive(Debug)]
struct SessionSlot {
    session: SharedSession,
    last_active_ms: AtomicI64,
}

impl SessionSlot {
    fn new(session: SharedSession, now: DateTime<Utc>) -> Self {
        Self {
            session,
            last_active_ms: AtomicI64::new(now.timestamp_millis()),
        }
    }

    fn touch(&self, now: DateTime<Utc>) {
        self.last_active_ms
            .fetch_max(now.timestamp_millis(), Ordering::Relaxed);
    }

    fn idle_for(&self, now: DateTime<Utc>) -> TimeDelta {
        TimeDelta::milliseconds(now.timestamp_millis() - self.last_active_ms.load(Ordering::Relaxed))
    }
}

/// Live workout sessions
///
/// Uses `DashMap` so lookups for different sessions never contend; each
/// session carries its own lock for frame processing. The cap is enforced
/// by reserving a slot on an atomic counter before inserting, so concurrent
/// creates can never overshoot it.
#[derive(Debug)]
pub struct SessionManager {
    sessions: DashMap<Uuid, SessionSlot>,
    live: AtomicUsize,
    registry: Arc<ClassifierRegistry>,
    settings: WorkoutSettings,
    default_exercise: ExerciseType,
    max_sessions: usize,
    idle_timeout: TimeDelta,
}

impl SessionManager {
    /// Create a manager with explicit settings and the default idle timeout
    #[must_use]
    pub fn new(
        registry: Arc<ClassifierRegistry>,
        settings: WorkoutSettings,
        default_exercise: ExerciseType,
        max_sessions: usize,
    ) -> Self {
        Self {
            sessions: DashMap::new(),
            live: AtomicUsize::new(0),
            registry,
            settings,
            default_exercise,
            max_sessions,
            idle_timeout: secs_to_delta(limits::DEFAULT_SESSION_IDLE_TIMEOUT_SECS),
        }
    }

    /// Create a manager from server configuration
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            Arc::new(ClassifierRegistry::with_thresholds(&config.classifier)),
            config.workout.settings(),
            config.workout.default_exercise,
            config.max_sessions,
        )
        .with_idle_timeout(secs_to_delta(config.session_idle_timeout_secs))
    }

    /// Evict sessions after `timeout` without a request
    #[must_use]
    pub fn with_idle_timeout(mut self, timeout: TimeDelta) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Start a new session, on the default exercise unless one is given
    ///
    /// Idle sessions are evicted first when the cap is reached.
    ///
    /// # Errors
    ///
    /// Returns a resource-exhausted error when the session cap is reached
    /// and no session is idle
    pub fn create(
        &self,
        exercise: Option<ExerciseType>,
        now: DateTime<Utc>,
    ) -> AppResult<(Uuid, SharedSession)> {
        if !self.try_reserve() && (self.evict_idle(now) == 0 || !self.try_reserve()) {
            warn!(max_sessions = self.max_sessions, "session limit reached");
            return Err(AppError::exhausted(format!(
                "Session limit of {} reached",
                self.max_sessions
            )));
        }

        let exercise = exercise.unwrap_or(self.default_exercise);
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(WorkoutSession::new(
            exercise,
            Arc::clone(&self.registry),
            self.settings,
            now,
        )));
        self.sessions
            .insert(id, SessionSlot::new(Arc::clone(&session), now));

        info!(session_id = %id, exercise = %exercise, "workout session created");
        Ok((id, session))
    }

    /// Look up a session, recording activity at `now`
    ///
    /// # Errors
    ///
    /// Returns a not-found error for unknown ids
    pub fn get(&self, id: Uuid, now: DateTime<Utc>) -> AppResult<SharedSession> {
        self.sessions
            .get(&id)
            .map(|entry| {
                entry.touch(now);
                Arc::clone(&entry.session)
            })
            .ok_or_else(|| AppError::not_found(format!("Workout session {id}")))
    }

    /// End a session
    ///
    /// # Errors
    ///
    /// Returns a not-found error for unknown ids
    pub fn remove(&self, id: Uuid) -> AppResult<()> {
        if self.sessions.remove(&id).is_none() {
            return Err(AppError::not_found(format!("Workout session {id}")));
        }
        self.live.fetch_sub(1, Ordering::AcqRel);
        info!(session_id = %id, "workout session ended");
        Ok(())
    }

    /// Drop every session idle for at least the idle timeout, returning how
    /// many were evicted
    pub fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let mut evicted = 0;
        self.sessions.retain(|id, slot| {
            let idle = slot.idle_for(now) >= self.idle_timeout;
            if idle {
                info!(session_id = %id, "idle workout session evicted");
                evicted += 1;
            }
            !idle
        });
        if evicted > 0 {
            self.live.fetch_sub(evicted, Ordering::AcqRel);
        }
        evicted
    }

    /// Run [`Self::evict_idle`] every `period` on the tokio runtime
    #[must_use]
    pub fn spawn_idle_sweeper(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let manager = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = time::interval(period);
            loop {
                interval.tick().await;
                let evicted = manager.evict_idle(Utc::now());
                if evicted > 0 {
                    debug!(evicted, live = manager.len(), "idle session sweep");
                }
            }
        })
    }

    /// Number of live sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are live
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Session cap
    #[must_use]
    pub const fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    /// Idle time after which a session is evicted
    #[must_use]
    pub const fn idle_timeout(&self) -> TimeDelta {
        self.idle_timeout
    }

    /// Shared classifier registry
    #[must_use]
    pub const fn registry(&self) -> &Arc<ClassifierRegistry> {
        &self.registry
    }

    fn try_reserve(&self) -> bool {
        self.live
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |live| {
                (live < self.max_sessions).then_some(live + 1)
            })
            .is_ok()
    }
}

fn secs_to_delta(secs: u64) -> TimeDelta {
    i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX)
}
