//! Shared history of simulated song recognitions.
//!
//! A recognizer appends entries on its own schedule while a refresher
//! periodically reads the latest ones, so the history is the one piece of
//! mutable state that crosses task boundaries. Appends and reads go
//! through a [`parking_lot::RwLock`]; readers always receive owned
//! snapshots.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::dataset::Dataset;
use crate::model::Artist;
use crate::tally::Tally;

/// One recognised song, attributed to an artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recognition {
    pub id: Uuid,
    pub artist: Artist,
    pub recognized_at: DateTime<Utc>,
}

/// Append-only, ordered recognition history.
#[derive(Debug, Default)]
pub struct RecognitionHistory {
    entries: RwLock<Vec<Recognition>>,
}

impl RecognitionHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a recognition of `artist` now.
    pub fn record(&self, artist: Artist) -> Recognition {
        self.record_at(artist, Utc::now())
    }

    /// Record a recognition with an explicit timestamp.
    pub fn record_at(&self, artist: Artist, recognized_at: DateTime<Utc>) -> Recognition {
        let recognition = Recognition {
            id: Uuid::new_v4(),
            artist,
            recognized_at,
        };
        self.entries.write().push(recognition.clone());
        recognition
    }

    /// Copy of every entry, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Recognition> {
        self.entries.read().clone()
    }

    /// The `n` most recent entries, newest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<Recognition> {
        self.entries.read().iter().rev().take(n).cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// How often each artist was recognised, in first-recognised order.
    #[must_use]
    pub fn artist_counts(&self) -> Tally {
        self.entries
            .read()
            .iter()
            .map(|entry| entry.artist.name.as_str())
            .collect()
    }
}

/// Picks an artist at random and records it as recognised.
#[derive(Debug, Clone, Default)]
pub struct Recognizer {
    history: Arc<RecognitionHistory>,
}

impl Recognizer {
    #[must_use]
    pub fn new(history: Arc<RecognitionHistory>) -> Self {
        Self { history }
    }

    #[must_use]
    pub fn history(&self) -> &Arc<RecognitionHistory> {
        &self.history
    }

    /// Recognise a song from `dataset`. `None` when there are no artists.
    pub fn recognize(&self, dataset: &Dataset) -> Option<Recognition> {
        self.recognize_with(dataset, &mut rand::thread_rng())
    }

    /// Like [`Recognizer::recognize`] with a caller-supplied generator.
    pub fn recognize_with<R: Rng + ?Sized>(
        &self,
        dataset: &Dataset,
        rng: &mut R,
    ) -> Option<Recognition> {
        let artists = dataset.artists();
        if artists.is_empty() {
            log::debug!("Nothing to recognise: dataset has no artists");
            return None;
        }
        let artist = artists[rng.gen_range(0..artists.len())].clone();
        log::debug!("Recognised a song by {}", artist.name);
        Some(self.history.record(artist))
    }
}

/// Human-readable age of `then` relative to `now`.
#[must_use]
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    }
    let (n, unit) = if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
