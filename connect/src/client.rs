use async_trait::async_trait;
use chrono::NaiveDate;
use fit_core::{Activity, ActivityId, ExerciseSet};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::auth::Session;
use crate::error::{ConnectError, ConnectResult};

const SEARCH_PATH: &str = "/activitylist-service/activities/search/activities";

/// Paged read access to the remote activity feed.
///
/// The feed is date-granular: `since` is a calendar date, so the first page
/// of a run usually overlaps activities already captured. The engine's
/// watermark check absorbs that; the feed just reports what the service
/// returns, in service order.
#[async_trait]
pub trait ActivityFeed: Send + Sync {
    /// One page of activities starting on or after `since`.
    async fn search(
        &self,
        since: NaiveDate,
        start: usize,
        limit: usize,
    ) -> ConnectResult<Vec<Activity>>;

    /// Page size `activities_since` requests with.
    fn page_size(&self) -> usize {
        100
    }

    /// Every activity since `since`, paging until an empty or short page.
    async fn activities_since(&self, since: NaiveDate) -> ConnectResult<Vec<Activity>> {
        let limit = self.page_size();
        let mut all = Vec::new();
        let mut start = 0;

        loop {
            let batch = self.search(since, start, limit).await?;
            let fetched = batch.len();
            all.extend(batch);
            if fetched < limit {
                break;
            }
            start += limit;
        }

        Ok(all)
    }
}

/// `ActivityFeed` over the real Connect API, authenticated with a saved
/// session's bearer token.
pub struct ConnectClient {
    client: Client,
    base_url: String,
    session: Session,
    page_size: usize,
}

impl ConnectClient {
    pub fn new(
        base_url: impl Into<String>,
        session: Session,
        page_size: usize,
        timeout_seconds: u64,
    ) -> ConnectResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .map_err(ConnectError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            session,
            page_size,
        })
    }
}

#[async_trait]
impl ActivityFeed for ConnectClient {
    fn page_size(&self) -> usize {
        self.page_size
    }

    async fn search(
        &self,
        since: NaiveDate,
        start: usize,
        limit: usize,
    ) -> ConnectResult<Vec<Activity>> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        debug!(url = %url, start, limit, since = %since, "Requesting activity page");

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.session.authorization_header())
            .header("Accept", "application/json")
            .query(&[
                ("limit", limit.to_string()),
                ("start", start.to_string()),
                ("startDate", since.to_string()),
            ])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let batch = response.json::<Vec<ActivityRecord>>().await?;
                Ok(batch
                    .into_iter()
                    .map(ActivityRecord::into_activity)
                    .collect())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ConnectError::RateLimited {
                    retry_after_seconds: retry_after,
                })
            }
            StatusCode::UNAUTHORIZED => Err(ConnectError::AuthenticationError(
                "Connect rejected the session token".to_string(),
            )),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ConnectError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }
}

/// Raw activity row as the search endpoint returns it. Garmin omits or nulls
/// most numeric fields depending on the sport, so everything beyond the id
/// is optional here and normalized in [`ActivityRecord::into_activity`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityRecord {
    activity_id: u64,
    #[serde(default)]
    start_time_local: Option<String>,
    #[serde(default)]
    start_time_gmt: Option<String>,
    #[serde(default)]
    activity_type: Option<ActivityTypeRecord>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    calories: Option<f64>,
    #[serde(default)]
    distance: Option<f64>,
    #[serde(default)]
    average_speed: Option<f64>,
    #[serde(default)]
    max_speed: Option<f64>,
    #[serde(default, rename = "averageHR")]
    average_hr: Option<f64>,
    #[serde(default, rename = "maxHR")]
    max_hr: Option<f64>,
    #[serde(default)]
    elevation_gain: Option<f64>,
    #[serde(default)]
    active_sets: Option<f64>,
    #[serde(default)]
    total_reps: Option<f64>,
    #[serde(default)]
    summarized_exercise_sets: Option<Vec<ExerciseSetRecord>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityTypeRecord {
    #[serde(default)]
    type_key: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseSetRecord {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    sub_category: Option<String>,
    #[serde(default)]
    volume: Option<f64>,
}

impl ActivityRecord {
    fn into_activity(self) -> Activity {
        let type_key = self
            .activity_type
            .and_then(|t| t.type_key)
            .unwrap_or_default()
            .to_lowercase();

        Activity {
            id: ActivityId::new(self.activity_id),
            start_time_local: self.start_time_local.unwrap_or_default(),
            start_time_gmt: self.start_time_gmt,
            type_key,
            duration_secs: self.duration.unwrap_or(0.0),
            calories: self.calories.unwrap_or(0.0),
            distance_m: self.distance.unwrap_or(0.0),
            average_speed_mps: self.average_speed.unwrap_or(0.0),
            max_speed_mps: self.max_speed.unwrap_or(0.0),
            average_hr: self.average_hr,
            max_hr: self.max_hr,
            elevation_gain_m: self.elevation_gain,
            active_sets: self.active_sets,
            total_reps: self.total_reps,
            exercise_sets: self
                .summarized_exercise_sets
                .unwrap_or_default()
                .into_iter()
                .map(|s| ExerciseSet {
                    category: s.category.unwrap_or_default(),
                    sub_category: s.sub_category,
                    volume_g: s.volume.unwrap_or(0.0),
                })
                .collect(),
        }
    }
}
