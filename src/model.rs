use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SparkStatus {
    Published,
    Scheduled,
}

impl SparkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SparkStatus::Published => "published",
            SparkStatus::Scheduled => "scheduled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "published" => Some(SparkStatus::Published),
            "scheduled" => Some(SparkStatus::Scheduled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SparkCategory {
    DailyDevotional,
    Testimony,
}

impl SparkCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SparkCategory::DailyDevotional => "daily-devotional",
            SparkCategory::Testimony => "testimony",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily-devotional" => Some(SparkCategory::DailyDevotional),
            "testimony" => Some(SparkCategory::Testimony),
            _ => None,
        }
    }
}

/// Audience slice a piece of content is addressed to. `Global` is the
/// unsegmented feed every user sees; it is stored as the literal string
/// `global` rather than SQL NULL so it can participate in unique keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AudienceSegment {
    Global,
    Youth,
    YoungAdults,
    Families,
    Professionals,
    Seniors,
}

impl AudienceSegment {
    pub const ALL: [AudienceSegment; 6] = [
        AudienceSegment::Global,
        AudienceSegment::Youth,
        AudienceSegment::YoungAdults,
        AudienceSegment::Families,
        AudienceSegment::Professionals,
        AudienceSegment::Seniors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceSegment::Global => "global",
            AudienceSegment::Youth => "youth",
            AudienceSegment::YoungAdults => "young-adults",
            AudienceSegment::Families => "families",
            AudienceSegment::Professionals => "professionals",
            AudienceSegment::Seniors => "seniors",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|seg| seg.as_str() == s)
    }
}

/// One devotional media item for one campaign day and one audience segment.
/// Natural key: (title, daily_date, audience_segment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spark {
    pub title: String,
    pub description: String,
    pub category: SparkCategory,
    pub media_type: String,
    pub duration_seconds: i64,
    pub scripture_ref: String,
    pub scripture_text: String,
    pub status: SparkStatus,
    pub publish_at: DateTime<Utc>,
    pub daily_date: NaiveDate,
    pub featured: bool,
    pub prayer: String,
    pub cta_label: String,
    pub thumbnail_text: String,
    pub week_theme: String,
    pub audience_segment: AudienceSegment,
    pub full_teaching: String,
    pub context_background: String,
    pub application_points: Vec<String>,
    pub todays_action: String,
    pub reflection_question: String,
}

/// Short companion card for a day/segment pairing.
/// Natural key: (daily_date, audience_segment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionCard {
    pub quote: String,
    pub reflection_question: String,
    pub suggested_action: String,
    pub overlay_ref: String,
    pub publish_at: DateTime<Utc>,
    pub daily_date: NaiveDate,
    pub status: SparkStatus,
    pub week_theme: String,
    pub audience_segment: AudienceSegment,
}

/// Long-form devotional article; slug is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub author: String,
    pub category: String,
    pub published_at: DateTime<Utc>,
}

/// Calendar gathering; title is the practical natural key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub location: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips() {
        for s in [SparkStatus::Published, SparkStatus::Scheduled] {
            assert_eq!(SparkStatus::parse(s.as_str()), Some(s));
        }
        assert_eq!(SparkStatus::parse("draft"), None);
    }

    #[test]
    fn segment_strings_are_distinct() {
        let mut seen: Vec<&str> = AudienceSegment::ALL.iter().map(|s| s.as_str()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6);
        assert_eq!(
            AudienceSegment::parse("global"),
            Some(AudienceSegment::Global)
        );
    }
}
