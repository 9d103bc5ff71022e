use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::time;

use tourbook_core::history::{format_time_ago, Recognition, RecognitionHistory, Recognizer};
use tourbook_core::Dataset;
use tourbook_search::top_entities;

const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// One display line per recognition, in the order given.
fn render_recent(recent: &[Recognition], now: DateTime<Utc>) -> Vec<String> {
    recent
        .iter()
        .map(|r| {
            format!(
                "  🎵 {} - {}",
                r.artist.name,
                format_time_ago(r.recognized_at, now)
            )
        })
        .collect()
}

fn print_recent(history: &RecognitionHistory, history_size: usize) {
    let recent = history.recent(history_size);
    if recent.is_empty() {
        return;
    }
    println!("\nRecently recognised:");
    for line in render_recent(&recent, Utc::now()) {
        println!("{line}");
    }
}

/// Run `count` recognitions, one every `interval_ms`, while a refresher
/// prints the latest `history_size` entries every second.
pub async fn run(
    dataset: Dataset,
    count: usize,
    interval_ms: u64,
    history_size: usize,
) -> Result<()> {
    if dataset.artists().is_empty() {
        println!("The catalogue has no artists to recognise");
        return Ok(());
    }

    let dataset = Arc::new(dataset);
    let history = Arc::new(RecognitionHistory::new());
    let recognizer = Recognizer::new(Arc::clone(&history));

    log::info!("Simulating {count} recognition(s) every {interval_ms} ms");

    let producer = tokio::spawn({
        let dataset = Arc::clone(&dataset);
        async move {
            let mut ticker = time::interval(Duration::from_millis(interval_ms.max(1)));
            for _ in 0..count {
                ticker.tick().await;
                if let Some(recognition) = recognizer.recognize(&dataset) {
                    println!("🔍 Recognised a song by {}", recognition.artist.name);
                }
            }
        }
    });

    let refresher = tokio::spawn({
        let history = Arc::clone(&history);
        async move {
            let mut ticker = time::interval(REFRESH_INTERVAL);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                print_recent(&history, history_size);
            }
        }
    });

    let produced = producer.await;
    refresher.abort();
    produced.context("Recognition task failed")?;

    print_recent(&history, history_size);

    let counts = top_entities(history.artist_counts().iter(), history_size);
    if !counts.is_empty() {
        println!("\nMost recognised:");
        for (name, count) in counts {
            println!("  {name}: {count}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;
    use tourbook_core::model::Artist;

    #[test]
    fn test_render_recent() {
        let history = RecognitionHistory::new();
        let now = Utc::now();
        history.record_at(Artist::new(1, "Queen"), now - ChronoDuration::minutes(3));
        history.record_at(Artist::new(2, "SOJA"), now);

        let lines = render_recent(&history.recent(5), now);
        assert_eq!(
            lines,
            vec!["  🎵 SOJA - just now", "  🎵 Queen - 3 minutes ago"]
        );
    }

    #[test]
    fn test_render_recent_respects_size() {
        let history = RecognitionHistory::new();
        let now = Utc::now();
        for id in 1..=7 {
            history.record_at(Artist::new(id, format!("Artist {id}")), now);
        }
        assert_eq!(render_recent(&history.recent(5), now).len(), 5);
    }

    #[tokio::test]
    async fn test_run_completes() {
        let dataset = Dataset::from_core(vec![Artist::new(1, "Queen")], Vec::new());
        assert!(run(dataset, 3, 1, 5).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_with_empty_catalogue() {
        assert!(run(Dataset::default(), 3, 1, 5).await.is_ok());
    }
}
