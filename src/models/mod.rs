use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Resource kind tag marking an actual video (as opposed to a channel or
/// playlist result)
pub const VIDEO_KIND: &str = "youtube#video";

/// A caller's structured search intent
///
/// All fields are optional in the inbound document; a missing `band` decodes
/// to an empty string rather than an error. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Query {
    pub band: String,
    pub genres: Option<Vec<String>>,
    /// Region code, copied verbatim into the outbound request. Not validated.
    pub location: String,
    pub channel_id: Option<String>,
}

impl Query {
    /// Decode a raw JSON query document.
    ///
    /// Fails fast: malformed JSON, a non-object top level, or a wrong-typed
    /// field (e.g. `genres` not an array of strings) is a `MalformedQuery`
    /// error surfaced to the caller instead of a degraded empty query.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::MalformedQuery(e.to_string()))
    }
}

/// Parameters for one outbound search call, derived from a [`Query`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub q: String,
    pub region_code: String,
    /// Present iff the query carried a non-empty channel id
    pub channel_id: Option<String>,
    pub max_results: u32,
}

impl SearchRequest {
    /// Resource-type filter, identical on every call
    pub const RESOURCE_TYPE: &'static str = "video";

    /// Field projection, identical on every call. Restricts the response to
    /// the fields the projector actually reads.
    pub const FIELDS: &'static str =
        "items(id/kind,id/videoId,snippet/title,snippet/thumbnails/default/url)";

    /// Build the outbound request from a query. Pure: the same query and
    /// limit always produce an equal request.
    pub fn from_query(query: &Query, max_results: u32) -> Self {
        let mut q = query.band.clone();
        if let Some(genres) = &query.genres {
            for genre in genres {
                q.push(' ');
                q.push_str(genre);
            }
        }

        let channel_id = query
            .channel_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(str::to_owned);

        SearchRequest {
            q,
            region_code: query.location.clone(),
            channel_id,
            max_results,
        }
    }
}

// ============================================================================
// YouTube Data API wire types
// ============================================================================

/// Raw search.list response body
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResultItem>,
}

/// One entry of the service's result list
///
/// Fields beyond the kind tag are optional on the wire: non-video kinds carry
/// no `videoId`, and the field projection may omit whole subtrees.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResultItem {
    pub id: ResourceId,
    #[serde(default)]
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub kind: String,
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    pub title: String,
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

// ============================================================================
// Output contract
// ============================================================================

/// One projected video record
///
/// The mixed key capitalization (`videoId` lower-camel, `Title`/`Thumbnail`
/// capitalized) is part of the published contract and must stay as is.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VideoRecord {
    #[serde(rename = "videoId")]
    pub video_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Thumbnail")]
    pub thumbnail: String,
}

/// The response document: `{"result": [...]}` when videos matched, `{}`
/// otherwise
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct SearchOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<VideoRecord>>,
}
