use crate::model::{
    AudienceSegment, BlogPost, Event, ReflectionCard, Spark, SparkCategory, SparkStatus,
};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::instrument;

pub type Pool = SqlitePool;

pub async fn init_pool(database_url: &str) -> Result<Pool> {
    let normalized = prepare_sqlite_url(database_url);
    let pool = SqlitePool::connect(&normalized).await?;
    // WAL plus stricter durability for the content store.
    sqlx::query("PRAGMA journal_mode=WAL;")
        .execute(&pool)
        .await?;
    sqlx::query("PRAGMA synchronous=FULL;")
        .execute(&pool)
        .await?;
    Ok(pool)
}

/// For file-backed SQLite URLs, expand a leading `~/` and create the parent
/// directory. In-memory URLs and non-sqlite schemes pass through untouched.
fn prepare_sqlite_url(url: &str) -> String {
    if !url.starts_with("sqlite:") || url.starts_with("sqlite::memory") {
        return url.to_string();
    }

    let rest = url["sqlite:".len()..].trim_start_matches("//");
    let (path_part, query_part) = match rest.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (rest, None),
    };
    if path_part.is_empty() {
        return url.to_string();
    }

    let expanded = match path_part.strip_prefix("~/") {
        Some(tail) => match std::env::var("HOME") {
            Ok(home) => format!("{}/{}", home.trim_end_matches('/'), tail),
            Err(_) => path_part.to_string(),
        },
        None => path_part.to_string(),
    };

    if let Some(parent) = std::path::Path::new(&expanded).parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    match query_part {
        Some(q) => format!("sqlite://{}?{}", expanded, q),
        None => format!("sqlite://{}", expanded),
    }
}

pub async fn run_migrations(pool: &Pool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Capability the sync pipeline persists through. Every upsert must be
/// create-or-replace on the record's natural key and safe to repeat with
/// identical input.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn upsert_spark(&self, spark: &Spark) -> Result<()>;
    async fn upsert_reflection_card(&self, card: &ReflectionCard) -> Result<()>;
    async fn upsert_blog_post(&self, post: &BlogPost) -> Result<()>;
    async fn upsert_event(&self, event: &Event) -> Result<()>;
    async fn get_sparks(&self) -> Result<Vec<Spark>>;
    async fn count_sparks_between(&self, from: NaiveDate, to: NaiveDate) -> Result<i64>;
}

#[derive(Clone)]
pub struct SqliteStore {
    pool: Pool,
}

impl SqliteStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }
}

fn spark_from_row(row: &SqliteRow) -> Result<Spark> {
    let status: String = row.get("status");
    let category: String = row.get("category");
    let segment: String = row.get("audience_segment");
    let points: String = row.get("application_points");
    Ok(Spark {
        title: row.get("title"),
        description: row.get("description"),
        category: SparkCategory::parse(&category)
            .ok_or_else(|| anyhow!("unknown spark category '{category}'"))?,
        media_type: row.get("media_type"),
        duration_seconds: row.get("duration_seconds"),
        scripture_ref: row.get("scripture_ref"),
        scripture_text: row.get("scripture_text"),
        status: SparkStatus::parse(&status)
            .ok_or_else(|| anyhow!("unknown spark status '{status}'"))?,
        publish_at: row.get::<DateTime<Utc>, _>("publish_at"),
        daily_date: row.get::<NaiveDate, _>("daily_date"),
        featured: row.get::<i64, _>("featured") != 0,
        prayer: row.get("prayer"),
        cta_label: row.get("cta_label"),
        thumbnail_text: row.get("thumbnail_text"),
        week_theme: row.get("week_theme"),
        audience_segment: AudienceSegment::parse(&segment)
            .ok_or_else(|| anyhow!("unknown audience segment '{segment}'"))?,
        full_teaching: row.get("full_teaching"),
        context_background: row.get("context_background"),
        application_points: serde_json::from_str(&points)
            .context("invalid application_points JSON")?,
        todays_action: row.get("todays_action"),
        reflection_question: row.get("reflection_question"),
    })
}

#[async_trait]
impl ContentStore for SqliteStore {
    #[instrument(skip_all)]
    async fn upsert_spark(&self, spark: &Spark) -> Result<()> {
        let points = serde_json::to_string(&spark.application_points)?;
        sqlx::query(
            "INSERT INTO sparks (
                title, description, category, media_type, duration_seconds,
                scripture_ref, scripture_text, status, publish_at, daily_date,
                featured, prayer, cta_label, thumbnail_text, week_theme,
                audience_segment, full_teaching, context_background,
                application_points, todays_action, reflection_question
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (title, daily_date, audience_segment) DO UPDATE SET
                description = excluded.description,
                category = excluded.category,
                media_type = excluded.media_type,
                duration_seconds = excluded.duration_seconds,
                scripture_ref = excluded.scripture_ref,
                scripture_text = excluded.scripture_text,
                status = excluded.status,
                publish_at = excluded.publish_at,
                featured = excluded.featured,
                prayer = excluded.prayer,
                cta_label = excluded.cta_label,
                thumbnail_text = excluded.thumbnail_text,
                week_theme = excluded.week_theme,
                full_teaching = excluded.full_teaching,
                context_background = excluded.context_background,
                application_points = excluded.application_points,
                todays_action = excluded.todays_action,
                reflection_question = excluded.reflection_question,
                updated_at = CURRENT_TIMESTAMP",
        )
        .bind(&spark.title)
        .bind(&spark.description)
        .bind(spark.category.as_str())
        .bind(&spark.media_type)
        .bind(spark.duration_seconds)
        .bind(&spark.scripture_ref)
        .bind(&spark.scripture_text)
        .bind(spark.status.as_str())
        .bind(spark.publish_at)
        .bind(spark.daily_date)
        .bind(spark.featured as i64)
        .bind(&spark.prayer)
        .bind(&spark.cta_label)
        .bind(&spark.thumbnail_text)
        .bind(&spark.week_theme)
        .bind(spark.audience_segment.as_str())
        .bind(&spark.full_teaching)
        .bind(&spark.context_background)
        .bind(points)
        .bind(&spark.todays_action)
        .bind(&spark.reflection_question)
        .execute(&self.pool)
        .await
        .with_context(|| format!("upsert spark '{}'", spark.title))?;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn upsert_reflection_card(&self, card: &ReflectionCard) -> Result<()> {
        sqlx::query(
            "INSERT INTO reflection_cards (
                quote, reflection_question, suggested_action, overlay_ref,
                publish_at, daily_date, status, week_theme, audience_segment
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (daily_date, audience_segment) DO UPDATE SET
                quote = excluded.quote,
                reflection_question = excluded.reflection_question,
                suggested_action = excluded.suggested_action,
                overlay_ref = excluded.overlay_ref,
                publish_at = excluded.publish_at,
                status = excluded.status,
                week_theme = excluded.week_theme,
                updated_at = CURRENT_TIMESTAMP",
        )
        .bind(&card.quote)
        .bind(&card.reflection_question)
        .bind(&card.suggested_action)
        .bind(&card.overlay_ref)
        .bind(card.publish_at)
        .bind(card.daily_date)
        .bind(card.status.as_str())
        .bind(&card.week_theme)
        .bind(card.audience_segment.as_str())
        .execute(&self.pool)
        .await
        .with_context(|| format!("upsert reflection card for {}", card.daily_date))?;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn upsert_blog_post(&self, post: &BlogPost) -> Result<()> {
        sqlx::query(
            "INSERT INTO blog_posts (
                slug, title, excerpt, body, author, category, published_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (slug) DO UPDATE SET
                title = excluded.title,
                excerpt = excluded.excerpt,
                body = excluded.body,
                author = excluded.author,
                category = excluded.category,
                published_at = excluded.published_at,
                updated_at = CURRENT_TIMESTAMP",
        )
        .bind(&post.slug)
        .bind(&post.title)
        .bind(&post.excerpt)
        .bind(&post.body)
        .bind(&post.author)
        .bind(&post.category)
        .bind(post.published_at)
        .execute(&self.pool)
        .await
        .with_context(|| format!("upsert blog post '{}'", post.slug))?;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn upsert_event(&self, event: &Event) -> Result<()> {
        sqlx::query(
            "INSERT INTO events (
                title, description, event_type, location, starts_at, ends_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (title) DO UPDATE SET
                description = excluded.description,
                event_type = excluded.event_type,
                location = excluded.location,
                starts_at = excluded.starts_at,
                ends_at = excluded.ends_at,
                updated_at = CURRENT_TIMESTAMP",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.event_type)
        .bind(&event.location)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .execute(&self.pool)
        .await
        .with_context(|| format!("upsert event '{}'", event.title))?;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn get_sparks(&self) -> Result<Vec<Spark>> {
        let rows = sqlx::query("SELECT * FROM sparks ORDER BY daily_date, audience_segment")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(spark_from_row).collect()
    }

    #[instrument(skip_all)]
    async fn count_sparks_between(&self, from: NaiveDate, to: NaiveDate) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sparks WHERE daily_date >= ? AND daily_date <= ?",
        )
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_urls_pass_through() {
        assert_eq!(prepare_sqlite_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(
            prepare_sqlite_url("postgres://localhost/db"),
            "postgres://localhost/db"
        );
    }

    #[test]
    fn file_urls_are_normalized() {
        let td = tempfile::tempdir().unwrap();
        let nested = td.path().join("a/b/content.db");
        let url = format!("sqlite:{}", nested.display());
        let normalized = prepare_sqlite_url(&url);
        assert_eq!(normalized, format!("sqlite://{}", nested.display()));
        assert!(nested.parent().unwrap().exists());
    }

    #[test]
    fn query_strings_survive_normalization() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("content.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());
        assert_eq!(
            prepare_sqlite_url(&url),
            format!("sqlite://{}?mode=rwc", path.display())
        );
    }
}
