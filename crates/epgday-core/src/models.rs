//! Core data types for epgday.
//!
//! This module defines the primary types used throughout the library:
//! - [`Scheduled`] - Anything that may carry a broadcast time
//! - [`MovieRecord`] - A movie as served by the catalog backend
//! - [`MoviesResponse`] - A paginated page of movies
//! - [`DayBucket`] - Records grouped under one broadcast day

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Key of the single bucket holding records without a usable broadcast time.
pub const NO_DATE_KEY: &str = "no-date";

/// A record that may be scheduled for broadcast.
///
/// The grouping code only ever reads the raw broadcast timestamp; every other
/// field of the record is opaque payload.
pub trait Scheduled {
    fn broadcast_time(&self) -> Option<&str>;
}

impl<T: Scheduled + ?Sized> Scheduled for &T {
    fn broadcast_time(&self) -> Option<&str> {
        (**self).broadcast_time()
    }
}

/// Broadcast schedule metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpgData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub broadcast_time: Option<String>,
    #[serde(default)]
    pub preview_image: Option<String>,
}

/// Third-party catalog metadata (rating, poster, genres).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    /// Runtime in minutes.
    #[serde(default)]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// A movie as served by the catalog backend.
///
/// Accepts both the nested backend shape (`epg_data.broadcast_time`) and the
/// flattened shape used by web clients (`broadcast_time` at top level).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_data: Option<EpgData>,
    #[serde(
        default,
        alias = "tmdb_data",
        skip_serializing_if = "Option::is_none"
    )]
    pub kinopoisk_data: Option<CatalogData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcast_time: Option<String>,
}

impl MovieRecord {
    /// A bare record with only an id and an optional broadcast time.
    pub fn new(id: impl Into<String>, broadcast_time: Option<&str>) -> Self {
        Self {
            id: id.into(),
            epg_data: Some(EpgData {
                broadcast_time: broadcast_time.map(str::to_string),
                ..EpgData::default()
            }),
            ..Self::default()
        }
    }

    /// Best display title: catalog, then EPG, then the flat field.
    pub fn display_title(&self) -> Option<&str> {
        self.kinopoisk_data
            .as_ref()
            .and_then(|k| k.title.as_deref())
            .or_else(|| self.epg_data.as_ref().and_then(|e| e.title.as_deref()))
            .or(self.title.as_deref())
    }
}

impl Scheduled for MovieRecord {
    fn broadcast_time(&self) -> Option<&str> {
        self.epg_data
            .as_ref()
            .and_then(|epg| epg.broadcast_time.as_deref())
            .or(self.broadcast_time.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub pages: u32,
}

/// One page of movies from the catalog backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviesResponse {
    pub movies: Vec<MovieRecord>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Records sharing one broadcast day in the display timezone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket<R> {
    /// `YYYY-MM-DD`, or [`NO_DATE_KEY`] for the undated bucket.
    pub key: String,
    /// Human label relative to today ("Сегодня", "15 марта", ...).
    pub label: String,
    /// Calendar day in the display timezone; `None` when undated.
    pub date: Option<NaiveDate>,
    /// `date - today` in whole days; `None` when undated.
    pub day_offset: Option<i64>,
    /// Records in input order.
    pub items: Vec<R>,
}

impl<R> DayBucket<R> {
    pub fn is_undated(&self) -> bool {
        self.date.is_none()
    }

    pub fn is_today(&self) -> bool {
        self.day_offset == Some(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
