// src/filter.rs
use crate::model::JobPosting;
use crate::sources::SourceCatalog;
use serde::{Deserialize, Serialize};

/// How the place filter interprets its selection. Chosen once per
/// deployment in config; the two modes are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Selection is a substring of the posting's location text.
    #[default]
    Location,
    /// Selection equals the posting's resolved source display name.
    Source,
}

/// One filter dimension: either the "all" sentinel or a concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    pub fn from_opt(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Choice::Only(v),
            _ => Choice::All,
        }
    }
}

/// The user's current filter selections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub search: String,
    pub category: Choice,
    pub place: Choice,
}

/// Apply all active predicates (logical AND) and order by recency.
///
/// Pure function of its inputs: same arguments, same output. The sort is
/// stable, so postings with equal recency keep their relative order from
/// the working set. The full filtered set is returned, no cap.
pub fn filter_jobs(
    jobs: &[JobPosting],
    selection: &Selection,
    mode: FilterMode,
    sources: &SourceCatalog,
) -> Vec<JobPosting> {
    let needle = selection.search.to_lowercase();

    let mut picked: Vec<JobPosting> = jobs
        .iter()
        .filter(|job| {
            matches_search(job, &needle)
                && matches_category(job, &selection.category)
                && matches_place(job, &selection.place, mode, sources)
        })
        .cloned()
        .collect();

    picked.sort_by_key(|job| job.effective_days_ago());
    picked
}

fn matches_search(job: &JobPosting, needle: &str) -> bool {
    needle.is_empty()
        || job.title().to_lowercase().contains(needle)
        || job.company().to_lowercase().contains(needle)
}

fn matches_category(job: &JobPosting, category: &Choice) -> bool {
    match category {
        Choice::All => true,
        // A posting without a category never matches a concrete selection.
        Choice::Only(wanted) => job.category.as_deref() == Some(wanted.as_str()),
    }
}

fn matches_place(
    job: &JobPosting,
    place: &Choice,
    mode: FilterMode,
    sources: &SourceCatalog,
) -> bool {
    match place {
        Choice::All => true,
        Choice::Only(wanted) => match mode {
            FilterMode::Location => job.location().contains(wanted.as_str()),
            FilterMode::Source => sources.badge(job.source.as_deref()).name == *wanted,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobId;

    fn sample() -> Vec<JobPosting> {
        vec![
            JobPosting::new(JobId::Number(1), "Demand Planner", "Nestlé Chile")
                .with_location("Santiago")
                .with_category("Planner")
                .with_source("LINKEDIN")
                .with_days_ago(2),
            JobPosting::new(JobId::Number(2), "Product Manager Bebidas", "CCU")
                .with_location("Santiago Centro")
                .with_category("Product Manager")
                .with_source("GETONBRD")
                .with_days_ago(0),
            JobPosting::new(JobId::Number(3), "Analista CPFR", "Walmart Chile")
                .with_location("Quilicura")
                .with_category("CPFR")
                .with_days_ago(2),
        ]
    }

    fn search(term: &str) -> Selection {
        Selection {
            search: term.to_string(),
            ..Selection::default()
        }
    }

    #[test]
    fn empty_selection_returns_everything() {
        let jobs = sample();
        let out = filter_jobs(
            &jobs,
            &Selection::default(),
            FilterMode::Location,
            &SourceCatalog::default(),
        );
        assert_eq!(out.len(), jobs.len());
    }

    #[test]
    fn search_is_case_insensitive_on_title_and_company() {
        let jobs = sample();
        let catalog = SourceCatalog::default();

        let by_title = filter_jobs(&jobs, &search("DEMAND"), FilterMode::Location, &catalog);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, JobId::Number(1));

        // Accent-carrying needle against an accented company name.
        let by_company = filter_jobs(&jobs, &search("nestlé"), FilterMode::Location, &catalog);
        assert_eq!(by_company.len(), 1);
        assert_eq!(by_company[0].company(), "Nestlé Chile");
    }

    #[test]
    fn category_filter_is_exact_equality() {
        let jobs = sample();
        let catalog = SourceCatalog::default();
        let selection = Selection {
            category: Choice::Only("Planner".to_string()),
            ..Selection::default()
        };

        let out = filter_jobs(&jobs, &selection, FilterMode::Location, &catalog);
        assert!(out.iter().all(|j| j.category.as_deref() == Some("Planner")));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn missing_category_never_matches_concrete_selection() {
        let jobs = vec![JobPosting::new(JobId::Number(9), "Sin categoría", "Acme")];
        let selection = Selection {
            category: Choice::Only("Planner".to_string()),
            ..Selection::default()
        };
        let out = filter_jobs(&jobs, &selection, FilterMode::Location, &SourceCatalog::default());
        assert!(out.is_empty());
    }

    #[test]
    fn location_mode_matches_substring() {
        let jobs = sample();
        let selection = Selection {
            place: Choice::Only("Santiago".to_string()),
            ..Selection::default()
        };
        let out = filter_jobs(&jobs, &selection, FilterMode::Location, &SourceCatalog::default());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn source_mode_matches_resolved_display_name() {
        let jobs = sample();
        let selection = Selection {
            place: Choice::Only("LinkedIn".to_string()),
            ..Selection::default()
        };
        let out = filter_jobs(&jobs, &selection, FilterMode::Source, &SourceCatalog::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, JobId::Number(1));
    }

    #[test]
    fn predicates_combine_with_logical_and() {
        let jobs = sample();
        let selection = Selection {
            search: "chile".to_string(),
            category: Choice::Only("CPFR".to_string()),
            place: Choice::Only("Quilicura".to_string()),
        };
        let out = filter_jobs(&jobs, &selection, FilterMode::Location, &SourceCatalog::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, JobId::Number(3));
    }

    #[test]
    fn sorts_most_recent_first_and_missing_recency_as_today() {
        let jobs = vec![
            JobPosting::new(JobId::Number(1), "A", "X").with_days_ago(2),
            JobPosting::new(JobId::Number(2), "B", "Y").with_days_ago(0),
            JobPosting::new(JobId::Number(3), "C", "Z"),
        ];
        let out = filter_jobs(
            &jobs,
            &Selection::default(),
            FilterMode::Location,
            &SourceCatalog::default(),
        );
        assert_eq!(out[0].id, JobId::Number(2));
        assert_eq!(out[1].id, JobId::Number(3));
        assert_eq!(out[2].id, JobId::Number(1));
    }

    #[test]
    fn sort_is_stable_on_equal_recency() {
        let jobs = vec![
            JobPosting::new(JobId::Number(1), "First", "X").with_days_ago(1),
            JobPosting::new(JobId::Number(2), "Second", "Y").with_days_ago(1),
            JobPosting::new(JobId::Number(3), "Third", "Z").with_days_ago(1),
        ];
        let out = filter_jobs(
            &jobs,
            &Selection::default(),
            FilterMode::Location,
            &SourceCatalog::default(),
        );
        let ids: Vec<_> = out.iter().map(|j| j.id.clone()).collect();
        assert_eq!(ids, vec![JobId::Number(1), JobId::Number(2), JobId::Number(3)]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let jobs = sample();
        let catalog = SourceCatalog::default();
        let selection = search("planner");
        let first = filter_jobs(&jobs, &selection, FilterMode::Location, &catalog);
        let second = filter_jobs(&jobs, &selection, FilterMode::Location, &catalog);
        let first_ids: Vec<_> = first.iter().map(|j| j.id.clone()).collect();
        let second_ids: Vec<_> = second.iter().map(|j| j.id.clone()).collect();
        assert_eq!(first_ids, second_ids);
    }
}
