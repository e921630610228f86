//! Domain types for the Nova clip studio
//!
//! These types are used by:
//! - the session layer (signed-in identity)
//! - Dioxus screens (projects and their suggested clips)
//!
//! Serializable with serde so identities can be persisted in browser storage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Identity
// ============================================================================

/// Signed-in account as reported by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Identity {
    /// Provider-assigned account id
    pub uid: String,

    /// Email the account signed in with
    pub email: String,
}

impl Identity {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
        }
    }
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub u32);

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a project sits in the repurposing pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    /// Clips were suggested and wait for review in the editor
    #[serde(rename = "Ready to Review")]
    ReadyToReview,
    /// Source video is still being analyzed
    Processing,
    /// Clips were rendered and can be downloaded
    Exported,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::ReadyToReview => "Ready to Review",
            ProjectStatus::Processing => "Processing",
            ProjectStatus::Exported => "Exported",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A long-form source video and the clips suggested from it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub status: ProjectStatus,
    pub created: NaiveDate,
    /// Suggested clips in playback order
    pub clips: Vec<Clip>,
}

impl Project {
    /// Date label shown in project lists, e.g. "Oct 15, 2025".
    pub fn created_label(&self) -> String {
        self.created.format("%b %-d, %Y").to_string()
    }

    pub fn has_clips(&self) -> bool {
        !self.clips.is_empty()
    }

    pub fn clip(&self, clip_id: &str) -> Option<&Clip> {
        self.clips.iter().find(|clip| clip.id == clip_id)
    }
}

// ============================================================================
// Clips
// ============================================================================

/// A suggested highlight inside a project's source video
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Clip {
    pub id: String,

    /// Offset into the source video, in seconds
    pub timestamp: u32,

    /// Caption text spoken in the clip
    pub text: String,
}

impl Clip {
    pub fn new(id: impl Into<String>, timestamp: u32, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timestamp,
            text: text.into(),
        }
    }

    /// `MM:SS` label for the clip offset. Minutes wrap at the hour.
    pub fn timestamp_label(&self) -> String {
        let minutes = (self.timestamp / 60) % 60;
        let seconds = self.timestamp % 60;
        format!("{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(status: ProjectStatus, clips: Vec<Clip>) -> Project {
        Project {
            id: ProjectId(7),
            name: "Sample".to_string(),
            status,
            created: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
            clips,
        }
    }

    #[test]
    fn test_timestamp_label() {
        assert_eq!(Clip::new("c1", 45, "a").timestamp_label(), "00:45");
        assert_eq!(Clip::new("c2", 312, "b").timestamp_label(), "05:12");
        assert_eq!(Clip::new("c3", 750, "c").timestamp_label(), "12:30");
    }

    #[test]
    fn test_timestamp_label_wraps_at_hour() {
        assert_eq!(Clip::new("c4", 3_700, "d").timestamp_label(), "01:40");
    }

    #[test]
    fn test_created_label() {
        let p = project(ProjectStatus::Processing, Vec::new());
        assert_eq!(p.created_label(), "Oct 5, 2025");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ProjectStatus::ReadyToReview).unwrap();
        assert_eq!(json, "\"Ready to Review\"");

        let status: ProjectStatus = serde_json::from_str("\"Exported\"").unwrap();
        assert_eq!(status, ProjectStatus::Exported);
        assert_eq!(status.to_string(), "Exported");
    }

    #[test]
    fn test_clip_lookup() {
        let p = project(
            ProjectStatus::ReadyToReview,
            vec![Clip::new("c1", 1, "one"), Clip::new("c2", 2, "two")],
        );
        assert!(p.has_clips());
        assert_eq!(p.clip("c2").map(|c| c.text.as_str()), Some("two"));
        assert!(p.clip("missing").is_none());
    }

    #[test]
    fn test_identity_round_trip() {
        let identity = Identity::new("uid-1", "a@x.com");
        let json = serde_json::to_string(&identity).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(identity, back);
    }
}
