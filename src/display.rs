// src/display.rs
use crate::board::LoadStatus;
use crate::model::JobPosting;
use crate::sources::SourceCatalog;
use chrono::{Duration, Local, NaiveDate};

/// Human recency label for a day offset.
pub fn recency_label(days_ago: i64) -> String {
    match days_ago {
        0 => "Published today".to_string(),
        1 => "1 day ago".to_string(),
        n => format!("{} days ago", n),
    }
}

/// Calendar date `day month year` obtained by walking the offset back from
/// today's local date.
pub fn posted_on(days_ago: i64) -> String {
    format_date(Local::now().date_naive() - Duration::days(days_ago))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// One line describing when a posting went up. Feeds that send a
/// preformatted string instead of a day offset get that string verbatim.
pub fn recency_line(job: &JobPosting) -> String {
    match job.days_ago {
        Some(days) => format!("{} · {}", recency_label(days), posted_on(days)),
        None => match &job.posted {
            Some(label) => label.clone(),
            None => recency_label(0),
        },
    }
}

/// Render one posting as a plain-text card.
pub fn render_card(job: &JobPosting, sources: &SourceCatalog) -> String {
    let badge = sources.badge(job.source.as_deref());
    let mut lines = Vec::new();

    let hot = if job.is_hot() { "  🔥 HOT" } else { "" };
    lines.push(format!("{}{}", job.title(), hot));
    lines.push(format!(
        "  {} — {}  [{}]",
        job.company(),
        job.location(),
        badge.name
    ));
    lines.push(format!(
        "  Salary: {}",
        job.salary.as_deref().unwrap_or("Not specified")
    ));
    lines.push(format!("  {}", recency_line(job)));
    for requirement in job.requirements() {
        lines.push(format!("  • {}", requirement));
    }
    lines.push(format!("  Apply: {}", job.link.as_deref().unwrap_or("#")));

    lines.join("\n")
}

/// Degraded-mode banner. `None` while healthy; a failed load must always
/// produce a visible indicator rather than being swallowed.
pub fn status_banner(status: &LoadStatus) -> Option<String> {
    match status {
        LoadStatus::Loading | LoadStatus::Connected => None,
        LoadStatus::Demo => Some(
            "⚠ Could not reach the job server; showing demo fallback data.".to_string(),
        ),
        LoadStatus::Disconnected => {
            Some("⚠ Could not reach the job server; no listings available.".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobId;

    #[test]
    fn labels_today_and_day_counts() {
        assert_eq!(recency_label(0), "Published today");
        assert_eq!(recency_label(1), "1 day ago");
        assert_eq!(recency_label(5), "5 days ago");
    }

    #[test]
    fn posted_on_today_matches_local_date() {
        let today = Local::now().date_naive();
        assert_eq!(posted_on(0), today.format("%-d %B %Y").to_string());
    }

    #[test]
    fn recency_line_prefers_numeric_offset() {
        let job = JobPosting::new(JobId::Number(1), "A", "B").with_days_ago(0);
        assert!(recency_line(&job).starts_with("Published today"));

        let labeled = JobPosting {
            posted: Some("Hace poco".to_string()),
            ..JobPosting::new(JobId::Number(2), "A", "B")
        };
        assert_eq!(recency_line(&labeled), "Hace poco");
    }

    #[test]
    fn card_substitutes_defaults_for_missing_fields() {
        let job = JobPosting::new(JobId::Number(1), "Demand Planner", "Nestlé Chile");
        let card = render_card(&job, &SourceCatalog::default());
        assert!(card.contains("Demand Planner"));
        assert!(card.contains("Salary: Not specified"));
        assert!(card.contains("Apply: #"));
        assert!(card.contains("[Other]"));
    }

    #[test]
    fn card_shows_requirements_and_hot_marker() {
        let job = JobPosting::new(JobId::Number(1), "Planner", "CCU")
            .with_requirements(&["Excel avanzado"])
            .with_hot(true);
        let card = render_card(&job, &SourceCatalog::default());
        assert!(card.contains("• Excel avanzado"));
        assert!(card.contains("HOT"));
    }

    #[test]
    fn degraded_statuses_produce_a_banner() {
        assert!(status_banner(&LoadStatus::Connected).is_none());
        assert!(status_banner(&LoadStatus::Demo).is_some());
        assert!(status_banner(&LoadStatus::Disconnected).is_some());
    }
}
