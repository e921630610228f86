use chrono::NaiveDate;
use nova_types::{Clip, Project, ProjectId, ProjectStatus};

/// Projects shown on the dashboard until a project store exists.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId(1),
            name: "My Latest Podcast".to_string(),
            status: ProjectStatus::ReadyToReview,
            created: date(2025, 10, 15),
            clips: vec![
                Clip::new(
                    "c1",
                    45,
                    "The first step is always the hardest, but putting in the work is what matters.",
                ),
                Clip::new(
                    "c2",
                    312,
                    "But what if I told you there's a better way to approach this problem?",
                ),
                Clip::new(
                    "c3",
                    750,
                    "Finally, we can reveal the secret sauce behind our success.",
                ),
            ],
        },
        Project {
            id: ProjectId(2),
            name: "Webinar Recording".to_string(),
            status: ProjectStatus::Processing,
            created: date(2025, 10, 15),
            clips: Vec::new(),
        },
        Project {
            id: ProjectId(3),
            name: "Marketing Q&A".to_string(),
            status: ProjectStatus::Exported,
            created: date(2025, 10, 14),
            clips: Vec::new(),
        },
    ]
}

/// Rendered files listed on the download screen.
pub const EXPORTED_FILES: &[&str] = &["Clip 1 - The first step.mp4", "Clip 2 - A better way.mp4"];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let projects = seed_projects();
        let ids: HashSet<_> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn only_reviewable_projects_have_clips() {
        for project in seed_projects() {
            match project.status {
                ProjectStatus::ReadyToReview => assert!(project.has_clips()),
                ProjectStatus::Processing | ProjectStatus::Exported => {
                    assert!(!project.has_clips())
                }
            }
        }
    }

    #[test]
    fn seed_dates_render() {
        let projects = seed_projects();
        assert_eq!(projects[0].created_label(), "Oct 15, 2025");
        assert_eq!(projects[2].created_label(), "Oct 14, 2025");
    }
}
