//! Content sync executor and the self-rescheduling nightly timer.

use crate::content::{self, CampaignContent};
use crate::db::ContentStore;
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Upper bound for one night's upsert batch. A hung database fails this
/// cycle; the next scheduled cycle is the retry.
const SYNC_BATCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub sparks: usize,
    pub reflections: usize,
}

/// Regenerate the campaign content and upsert all of it. Content is derived
/// fresh on every call, never cached from process start. Errors propagate to
/// the caller; the scheduler decides what a failed night means.
pub async fn run_content_sync(store: &dyn ContentStore) -> Result<SyncReport> {
    let CampaignContent {
        sparks,
        reflection_cards,
    } = content::generate_campaign();

    let report = tokio::time::timeout(SYNC_BATCH_TIMEOUT, async {
        let mut spark_count = 0usize;
        for spark in &sparks {
            store.upsert_spark(spark).await?;
            spark_count += 1;
        }
        let mut card_count = 0usize;
        for card in &reflection_cards {
            store.upsert_reflection_card(card).await?;
            card_count += 1;
        }
        Ok::<_, anyhow::Error>(SyncReport {
            sparks: spark_count,
            reflections: card_count,
        })
    })
    .await
    .map_err(|_| anyhow!("content sync timed out after {:?}", SYNC_BATCH_TIMEOUT))?
    .context("content sync upsert batch failed")?;

    info!(
        sparks = report.sparks,
        reflections = report.reflections,
        "content sync complete"
    );
    Ok(report)
}

/// Next occurrence of `hour:minute` wall-clock time in `tz`, as seen from
/// `now`. If the target time today has already been reached, the fire point
/// rolls to tomorrow. Recomputed every cycle so the fire point stays pinned
/// to local time across DST transitions.
pub fn next_sync_delay(now: DateTime<Utc>, tz: Tz, hour: u32, minute: u32) -> (Duration, DateTime<Tz>) {
    let local_now = now.with_timezone(&tz);
    let target_time = NaiveTime::from_hms_opt(hour, minute, 0).expect("valid target time");
    let mut target_date = local_now.date_naive();
    if local_now.time() >= target_time {
        target_date = target_date + Duration::days(1);
    }
    let target = resolve_local(tz, target_date, target_time);
    let delay = target.with_timezone(&Utc) - now;
    (delay, target)
}

/// Map a local date+time to an instant. Ambiguous times (clocks falling
/// back) take the earlier instant; times inside a spring-forward gap slide
/// one hour later.
fn resolve_local(tz: Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Tz> {
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .expect("time one hour past a DST gap exists"),
    }
}

/// Owned handle for the nightly sync task. One single-shot sleep is armed at
/// a time; after each fire the next target is recomputed from the current
/// wall clock rather than a fixed interval.
pub struct NightlySync {
    handle: JoinHandle<()>,
}

impl NightlySync {
    pub fn start(store: Arc<dyn ContentStore>, tz: Tz, hour: u32, minute: u32) -> Self {
        let handle = tokio::spawn(async move {
            loop {
                let (delay, target) = next_sync_delay(Utc::now(), tz, hour, minute);
                let total_minutes = delay.num_minutes().max(0);
                info!(
                    fire_at = %target,
                    hours = total_minutes / 60,
                    minutes = total_minutes % 60,
                    "next content sync scheduled"
                );
                tokio::time::sleep(delay.to_std().unwrap_or_default()).await;

                // A failed night must not unschedule the next one.
                match run_content_sync(store.as_ref()).await {
                    Ok(report) => info!(
                        sparks = report.sparks,
                        reflections = report.reflections,
                        "nightly content sync finished"
                    ),
                    Err(err) => {
                        error!(?err, "nightly content sync failed; next cycle will retry")
                    }
                }
            }
        });
        Self { handle }
    }

    /// Clear the pending timer and end the task. Used at process teardown.
    pub fn stop(self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::London;

    fn london_now(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        London
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn one_hour_before_target() {
        let now = london_now(2026, 1, 8, 22, 0);
        let (delay, target) = next_sync_delay(now, London, 23, 0);
        assert_eq!(delay, Duration::hours(1));
        assert_eq!(target, London.with_ymd_and_hms(2026, 1, 8, 23, 0, 0).unwrap());
    }

    #[test]
    fn past_target_rolls_to_next_day() {
        let now = london_now(2026, 1, 8, 23, 30);
        let (delay, target) = next_sync_delay(now, London, 23, 0);
        assert_eq!(target, London.with_ymd_and_hms(2026, 1, 9, 23, 0, 0).unwrap());
        assert_eq!(delay, Duration::hours(23) + Duration::minutes(30));
    }

    #[test]
    fn exactly_at_target_rolls_a_full_day() {
        let now = london_now(2026, 1, 8, 23, 0);
        let (delay, target) = next_sync_delay(now, London, 23, 0);
        assert_eq!(target, London.with_ymd_and_hms(2026, 1, 9, 23, 0, 0).unwrap());
        assert_eq!(delay, Duration::hours(24));
    }

    #[test]
    fn fire_point_stays_pinned_across_dst() {
        // London springs forward 2026-03-29 at 01:00. The 23:00 local target
        // the next evening is one absolute hour closer than wall-clock math
        // suggests.
        let now = london_now(2026, 3, 28, 23, 30);
        let (delay, target) = next_sync_delay(now, London, 23, 0);
        assert_eq!(target, London.with_ymd_and_hms(2026, 3, 29, 23, 0, 0).unwrap());
        assert_eq!(delay, Duration::hours(22) + Duration::minutes(30));
    }

    #[test]
    fn respects_custom_minute() {
        let now = london_now(2026, 1, 8, 22, 0);
        let (delay, _) = next_sync_delay(now, London, 22, 30);
        assert_eq!(delay, Duration::minutes(30));
    }
}
