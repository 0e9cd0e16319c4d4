// src/model.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Posting identifier as delivered by the API: some portals use numeric
/// ids, others opaque strings. Stable within one load cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    Number(i64),
    Text(String),
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobId::Number(n) => write!(f, "{}", n),
            JobId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A single job posting from the aggregator API.
///
/// Only `id` is guaranteed present. Everything else may be missing or null
/// depending on which portal the posting was scraped from; accessors
/// substitute neutral defaults so display code never has to branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    /// Job title. Some feeds call this `role`, others `title`.
    #[serde(default, alias = "role")]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// One of the known category labels ("Planner", "Product Manager", ...).
    #[serde(default)]
    pub category: Option<String>,
    /// Origin-portal key, resolved against the source catalog for display.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub requirements: Option<Vec<String>>,
    #[serde(default)]
    pub link: Option<String>,
    /// Numeric recency in days; drives sorting and the "today" highlight.
    #[serde(default, alias = "daysAgo")]
    pub days_ago: Option<i64>,
    /// Preformatted recency string used by feeds that do not send a
    /// day offset ("Hace poco", "2024-11-03", ...).
    #[serde(default, alias = "posted_at", alias = "date")]
    pub posted: Option<String>,
    #[serde(default)]
    pub hot: Option<bool>,
}

impl JobPosting {
    pub fn new(id: JobId, title: &str, company: &str) -> Self {
        Self {
            id,
            title: Some(title.to_string()),
            company: Some(company.to_string()),
            location: None,
            category: None,
            source: None,
            salary: None,
            requirements: None,
            link: None,
            days_ago: None,
            posted: None,
            hot: None,
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn with_salary(mut self, salary: &str) -> Self {
        self.salary = Some(salary.to_string());
        self
    }

    pub fn with_requirements(mut self, requirements: &[&str]) -> Self {
        self.requirements = Some(requirements.iter().map(|r| r.to_string()).collect());
        self
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    pub fn with_days_ago(mut self, days: i64) -> Self {
        self.days_ago = Some(days);
        self
    }

    pub fn with_hot(mut self, hot: bool) -> Self {
        self.hot = Some(hot);
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or("")
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    pub fn requirements(&self) -> &[String] {
        self.requirements.as_deref().unwrap_or(&[])
    }

    pub fn is_hot(&self) -> bool {
        self.hot.unwrap_or(false)
    }

    /// Recency used for ordering. Postings without a day offset are treated
    /// as published today so fresh feeds without the field float to the top.
    pub fn effective_days_ago(&self) -> i64 {
        self.days_ago.unwrap_or(0)
    }
}
