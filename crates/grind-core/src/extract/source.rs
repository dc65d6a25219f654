//! Where raw study plan documents come from.

use std::{path::PathBuf, time::Duration};

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;
use tokio::task;

use crate::{
    error::{FsResultExt, ParseResultExt, Result, TrackerError},
    models::PlanKind,
};

/// LeetCode GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://leetcode.com/graphql/";

/// Timeout for the single GraphQL request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const STUDY_PLAN_QUERY: &str = r#"query studyPlanDetail($slug: String!) {
  studyPlanV2Detail(planSlug: $slug) {
    slug
    name
    planSubGroups {
      slug
      name
      questionNum
      questions {
        id
        title
        titleSlug
        questionFrontendId
        difficulty
        paidOnly
      }
    }
  }
}"#;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a> {
    operation_name: &'static str,
    query: &'static str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
struct Variables<'a> {
    slug: &'a str,
}

/// A place a raw study plan document can be read from.
#[derive(Debug, Clone)]
pub enum RawSource {
    /// A JSON file saved from LeetCode's `studyPlanV2Detail` response
    File { kind: PlanKind, path: PathBuf },
    /// A single POST to a GraphQL endpoint
    Remote {
        kind: PlanKind,
        endpoint: String,
        timeout: Duration,
    },
}

impl RawSource {
    /// Reads the raw document.
    ///
    /// # Errors
    ///
    /// * `TrackerError::RawSourceNotFound` - the raw file does not exist
    /// * `TrackerError::Parse` - the raw file is not valid JSON
    /// * `TrackerError::SourceUnavailable` - the request failed, timed out,
    ///   returned a non-success status or an undecodable body
    pub async fn fetch(&self) -> Result<Value> {
        match self {
            RawSource::File { kind, path } => read_raw_file(*kind, path.clone()).await,
            RawSource::Remote {
                kind,
                endpoint,
                timeout,
            } => fetch_remote(*kind, endpoint, *timeout).await,
        }
    }
}

async fn read_raw_file(kind: PlanKind, path: PathBuf) -> Result<Value> {
    task::spawn_blocking(move || {
        if !path.is_file() {
            return Err(TrackerError::RawSourceNotFound { kind, path });
        }
        debug!("Reading raw plan from {}", path.display());
        let content = std::fs::read_to_string(&path).fs_context(&path)?;
        serde_json::from_str(&content).parse_context(format!("raw plan file {}", path.display()))
    })
    .await
    .map_err(|e| TrackerError::Configuration {
        message: format!("Task join error: {e}"),
    })?
}

async fn fetch_remote(kind: PlanKind, endpoint: &str, timeout: Duration) -> Result<Value> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("grind/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| TrackerError::Configuration {
            message: format!("Failed to build HTTP client: {e}"),
        })?;

    let request = GraphQlRequest {
        operation_name: "studyPlanDetail",
        query: STUDY_PLAN_QUERY,
        variables: Variables { slug: kind.slug() },
    };

    info!("Fetching study plan '{kind}' from {endpoint}");
    let response = client
        .post(endpoint)
        .json(&request)
        .send()
        .await
        .map_err(|e| TrackerError::source_unavailable(endpoint, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(TrackerError::source_unavailable(
            endpoint,
            format!("request failed with status {status}"),
        ));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| TrackerError::source_unavailable(endpoint, e))?;

    let has_data = body.get("data").is_some_and(|data| !data.is_null());
    if !has_data {
        let reason = body
            .get("errors")
            .and_then(|errors| errors.get(0))
            .and_then(|error| error.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("response carried no data");
        return Err(TrackerError::source_unavailable(endpoint, reason));
    }

    Ok(body)
}
