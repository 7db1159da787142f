use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use dominion_sync::content;
use dominion_sync::db::{ContentStore, SqliteStore};
use dominion_sync::model::{BlogPost, Event, ReflectionCard, Spark, SparkStatus};
use dominion_sync::seed;
use dominion_sync::sync;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

async fn setup_store() -> SqliteStore {
    let pool = sqlx::SqlitePool::connect("sqlite::memory:").await.unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    SqliteStore::new(pool)
}

#[tokio::test]
async fn auto_seed_populates_everything_once() {
    let store = setup_store().await;

    let summary = seed::auto_seed_dominion_content(&store).await;
    assert!(summary.completed);
    assert_eq!(summary.sparks, 180);
    assert_eq!(summary.reflections, 180);
    assert_eq!(summary.blog_posts, 4);
    assert_eq!(summary.events, 5);

    let sparks = store.get_sparks().await.unwrap();
    assert_eq!(sparks.len(), 180);

    // No duplicate (title, daily_date, segment) triples.
    let mut keys = HashSet::new();
    for s in &sparks {
        assert!(keys.insert((s.title.clone(), s.daily_date, s.audience_segment)));
    }

    let card_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reflection_cards")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(card_count, 180);
    let post_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(post_count, 4);
    let event_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(event_count, 5);
}

#[tokio::test]
async fn repeated_sync_does_not_duplicate() {
    let store = setup_store().await;

    let first = sync::run_content_sync(&store).await.unwrap();
    assert_eq!(first.sparks, 180);
    assert_eq!(first.reflections, 180);
    let after_first = store.get_sparks().await.unwrap().len();

    let second = sync::run_content_sync(&store).await.unwrap();
    assert_eq!(second.sparks, 180);
    let after_second = store.get_sparks().await.unwrap().len();

    assert_eq!(after_first, after_second);
    assert_eq!(after_second, 180);
}

#[tokio::test]
async fn seed_and_sync_converge_without_duplicates() {
    // Startup seed and the first nightly sync may overlap on the same boot;
    // both must converge to the same rows.
    let store = setup_store().await;

    seed::auto_seed_dominion_content(&store).await;
    sync::run_content_sync(&store).await.unwrap();
    seed::auto_seed_dominion_content(&store).await;

    assert_eq!(store.get_sparks().await.unwrap().len(), 180);
    let card_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reflection_cards")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(card_count, 180);
    let post_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(post_count, 4);
}

#[tokio::test]
async fn sync_restores_tampered_rows() {
    let store = setup_store().await;
    sync::run_content_sync(&store).await.unwrap();

    sqlx::query("UPDATE sparks SET description = 'edited by hand' WHERE daily_date = '2026-01-03'")
        .execute(store.pool())
        .await
        .unwrap();

    sync::run_content_sync(&store).await.unwrap();

    let edited: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sparks WHERE description = 'edited by hand'")
            .fetch_one(store.pool())
            .await
            .unwrap();
    assert_eq!(edited, 0);
}

#[tokio::test]
async fn persisted_status_split_matches_campaign_day_zero() {
    let store = setup_store().await;
    sync::run_content_sync(&store).await.unwrap();

    let sparks = store.get_sparks().await.unwrap();
    let published: Vec<_> = sparks
        .iter()
        .filter(|s| s.status == SparkStatus::Published)
        .collect();
    assert_eq!(published.len(), 6);
    for s in &published {
        assert_eq!(s.daily_date, content::campaign_start());
    }
    assert_eq!(
        sparks
            .iter()
            .filter(|s| s.status == SparkStatus::Scheduled)
            .count(),
        174
    );
}

#[tokio::test]
async fn campaign_window_count_matches_expected() {
    let store = setup_store().await;
    sync::run_content_sync(&store).await.unwrap();
    let count = store
        .count_sparks_between(content::campaign_start(), content::campaign_end())
        .await
        .unwrap();
    assert_eq!(count as usize, content::EXPECTED_CAMPAIGN_SPARKS);
}

/// Store that fails every spark upsert after the first few, for exercising
/// the two error policies.
#[derive(Default)]
struct FlakyStore {
    fail_after: usize,
    spark_calls: AtomicUsize,
}

#[async_trait]
impl ContentStore for FlakyStore {
    async fn upsert_spark(&self, _spark: &Spark) -> Result<()> {
        let n = self.spark_calls.fetch_add(1, Ordering::SeqCst);
        if n >= self.fail_after {
            return Err(anyhow!("storage unavailable"));
        }
        Ok(())
    }

    async fn upsert_reflection_card(&self, _card: &ReflectionCard) -> Result<()> {
        Ok(())
    }

    async fn upsert_blog_post(&self, _post: &BlogPost) -> Result<()> {
        Ok(())
    }

    async fn upsert_event(&self, _event: &Event) -> Result<()> {
        Ok(())
    }

    async fn get_sparks(&self) -> Result<Vec<Spark>> {
        Ok(Vec::new())
    }

    async fn count_sparks_between(&self, _from: NaiveDate, _to: NaiveDate) -> Result<i64> {
        Ok(0)
    }
}

#[tokio::test]
async fn auto_seed_swallows_storage_errors() {
    let store = FlakyStore {
        fail_after: 10,
        ..Default::default()
    };
    // Must not panic or propagate; partial counters survive.
    let summary = seed::auto_seed_dominion_content(&store).await;
    assert!(!summary.completed);
    assert_eq!(summary.sparks, 10);
    assert_eq!(summary.blog_posts, 0);
}

#[tokio::test]
async fn run_content_sync_propagates_storage_errors() {
    let store = FlakyStore {
        fail_after: 0,
        ..Default::default()
    };
    let err = sync::run_content_sync(&store).await.unwrap_err();
    assert!(err.to_string().contains("upsert batch failed"));
}
