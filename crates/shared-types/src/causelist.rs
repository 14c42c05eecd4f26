use serde::{Deserialize, Serialize};

/// Filename used when the server does not name the generated document.
pub const DEFAULT_DOCUMENT_NAME: &str = "cause_list.pdf";

// ── Case type ───────────────────────────────────────────────────────

/// Which cause lists to include: civil, criminal, or both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    Civil,
    Criminal,
    #[default]
    Both,
}

/// All case types in the order the form offers them.
pub const ALL_CASE_TYPES: &[CaseType] = &[CaseType::Both, CaseType::Civil, CaseType::Criminal];

impl CaseType {
    /// Parse a case type string, defaulting to `Both` for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "civil" => CaseType::Civil,
            "criminal" => CaseType::Criminal,
            _ => CaseType::Both,
        }
    }

    /// Lowercase wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseType::Civil => "civil",
            CaseType::Criminal => "criminal",
            CaseType::Both => "both",
        }
    }

    /// Human-readable option label.
    pub fn display_name(&self) -> &'static str {
        match self {
            CaseType::Civil => "Civil Only",
            CaseType::Criminal => "Criminal Only",
            CaseType::Both => "Both Civil & Criminal",
        }
    }
}

// ── Lookup responses ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateResponse {
    pub states: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictResponse {
    pub districts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtResponse {
    pub courts: Vec<String>,
}

/// A judge sitting in a court complex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeInfo {
    pub name: String,
    pub designation: String,
    pub court_number: String,
}

impl JudgeInfo {
    /// Option label shown in the judge select, e.g. "Sh. A. Kumar - Civil Judge".
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.designation)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeResponse {
    pub judges: Vec<JudgeInfo>,
}

/// Backend liveness probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

// ── Cause list request / response ───────────────────────────────────

/// Body of `POST /fetch-causelist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CauseListRequest {
    pub state: String,
    pub district: String,
    pub court_complex: String,
    /// Judge name; `None` fetches every judge in the complex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_name: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_type: Option<CaseType>,
}

/// Outcome reported by the backend for a cause list request.
///
/// `success == false` is a structured application failure, not a
/// transport error: the request went through and `message` explains why
/// no document was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CauseListResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// A single document to fetch from `/download/{remote_name}` and save
/// locally as `save_as`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub remote_name: String,
    pub save_as: String,
}

impl CauseListResponse {
    /// The document to download immediately, if the response names one.
    pub fn download_target(&self) -> Option<DownloadTarget> {
        if !self.success {
            return None;
        }
        let url = self.pdf_url.as_deref()?;
        let remote_name = last_path_segment(url)?;
        let save_as = self
            .filename
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_DOCUMENT_NAME)
            .to_string();
        Some(DownloadTarget {
            remote_name,
            save_as,
        })
    }

    /// Document URLs offered for individual retrieval when the server
    /// returned several documents without a single bundle.
    pub fn bundle_urls(&self) -> Option<&[String]> {
        if !self.success || self.pdf_url.is_some() {
            return None;
        }
        self.pdf_urls.as_deref().filter(|urls| !urls.is_empty())
    }
}

/// Final `/`-separated segment of a URL or path, ignoring any query
/// string or fragment. `None` when that segment is empty, as for a path
/// ending in `/`.
pub fn last_path_segment(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
