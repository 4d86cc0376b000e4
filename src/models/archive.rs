use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::config::MagazineConfig;
use crate::models::category::CategoryTable;
use crate::models::magazine::{LatestMagazine, MagazineSummary};

/// A `pdfs/{year}/{month}` directory that holds the magazine PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLocation {
    pub year: i32,
    pub month: String,
}

impl IssueLocation {
    pub fn new(year: i32, month: impl Into<String>) -> Self {
        Self {
            year,
            month: month.into(),
        }
    }

    /// Calendar position of the month token, `None` when the token is not a
    /// month name chrono recognizes ("July", "jul", "AUGUST" ...).
    pub fn calendar_month(&self) -> Option<u32> {
        self.month
            .parse::<Month>()
            .ok()
            .map(|m| m.number_from_month())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveEntry {
    pub id: i32,
    pub title: String,
    pub issue_date: String,
    pub description: String,
    pub cover_image_url: String,
    pub pdf_url: String,
    pub view_url: String,
    pub year: i32,
    pub month: String,
    pub category: String,
}

impl ArchiveEntry {
    pub fn from_location(
        id: i32,
        location: &IssueLocation,
        magazine: &MagazineConfig,
        categories: &CategoryTable,
        route_prefix: &str,
    ) -> Self {
        let IssueLocation { year, month } = location;
        let pdf_url = format!("{}/magazines/{}/{}/pdf", route_prefix, year, month);

        Self {
            id,
            title: format!("{} - {} {}", magazine.name, month, year),
            issue_date: format!("{} {}", month, year),
            description: categories.description_for(month, *year),
            cover_image_url: format!(
                "/images/{}-{}-{}.jpg",
                magazine.cover_slug,
                month.to_lowercase(),
                year
            ),
            view_url: format!("{}/view", pdf_url),
            pdf_url,
            year: *year,
            month: month.clone(),
            category: categories.category_for(month).to_string(),
        }
    }
}

impl From<ArchiveEntry> for LatestMagazine {
    fn from(entry: ArchiveEntry) -> Self {
        Self {
            summary: MagazineSummary {
                id: entry.id,
                title: entry.title,
                issue_date: entry.issue_date,
                description: entry.description,
                cover_image_url: entry.cover_image_url,
                pdf_url: entry.pdf_url,
            },
            year: Some(entry.year),
            month: Some(entry.month),
            category: Some(entry.category),
        }
    }
}

/// Builds the archive listing from scan results, numbering entries in the
/// order the scan produced them.
pub fn build_archive(
    locations: &[IssueLocation],
    magazine: &MagazineConfig,
    categories: &CategoryTable,
    route_prefix: &str,
) -> Vec<ArchiveEntry> {
    locations
        .iter()
        .enumerate()
        .map(|(index, location)| {
            ArchiveEntry::from_location(
                archive_id(index),
                location,
                magazine,
                categories,
                route_prefix,
            )
        })
        .collect()
}

/// 1-based position, saturating at `i32::MAX`.
fn archive_id(index: usize) -> i32 {
    i32::try_from(index.saturating_add(1)).unwrap_or(i32::MAX)
}

/// Most recent issue by `(year, calendar month)`. Tokens that are not month
/// names rank below January of the same year.
pub fn most_recent(entries: Vec<ArchiveEntry>) -> Option<ArchiveEntry> {
    entries.into_iter().max_by_key(|entry| {
        let location = IssueLocation::new(entry.year, entry.month.clone());
        (entry.year, location.calendar_month())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations() -> Vec<IssueLocation> {
        vec![
            IssueLocation::new(2025, "July"),
            IssueLocation::new(2025, "Aug"),
            IssueLocation::new(2024, "Dec"),
        ]
    }

    #[test]
    fn entries_derive_metadata_from_month_token() {
        let archive = build_archive(
            &locations(),
            &MagazineConfig::default(),
            &CategoryTable::default(),
            "/api",
        );

        assert_eq!(archive.len(), 3);
        let july = &archive[0];
        assert_eq!(july.id, 1);
        assert_eq!(july.title, "ShyvnTech Magazine - July 2025");
        assert_eq!(july.issue_date, "July 2025");
        assert_eq!(july.category, "Cloud");
        assert_eq!(july.cover_image_url, "/images/shyvntech-july-2025.jpg");
        assert_eq!(july.pdf_url, "/api/magazines/2025/July/pdf");
        assert_eq!(july.view_url, "/api/magazines/2025/July/pdf/view");

        let aug = &archive[1];
        assert_eq!(aug.id, 2);
        assert_eq!(aug.category, "Startup");
        assert!(aug.description.contains("Aug 2025"));
    }

    #[test]
    fn ids_are_one_based_and_never_wrap() {
        assert_eq!(archive_id(0), 1);
        assert_eq!(archive_id(41), 42);
        assert_eq!(archive_id(i32::MAX as usize), i32::MAX);
        assert_eq!(archive_id(usize::MAX), i32::MAX);
    }

    #[test]
    fn empty_prefix_yields_root_relative_urls() {
        let archive = build_archive(
            &locations()[..1],
            &MagazineConfig::default(),
            &CategoryTable::default(),
            "",
        );
        assert_eq!(archive[0].pdf_url, "/magazines/2025/July/pdf");
    }

    #[test]
    fn calendar_month_understands_short_and_long_names() {
        assert_eq!(IssueLocation::new(2025, "Aug").calendar_month(), Some(8));
        assert_eq!(IssueLocation::new(2025, "july").calendar_month(), Some(7));
        assert_eq!(IssueLocation::new(2025, "Special").calendar_month(), None);
    }

    #[test]
    fn most_recent_uses_calendar_order_not_lexical_order() {
        let archive = build_archive(
            &locations(),
            &MagazineConfig::default(),
            &CategoryTable::default(),
            "/api",
        );
        let latest = most_recent(archive).unwrap();
        assert_eq!((latest.year, latest.month.as_str()), (2025, "Aug"));
    }

    #[test]
    fn unknown_month_tokens_rank_lowest_within_a_year() {
        let archive = build_archive(
            &[
                IssueLocation::new(2025, "Special"),
                IssueLocation::new(2025, "Jan"),
            ],
            &MagazineConfig::default(),
            &CategoryTable::default(),
            "/api",
        );
        assert_eq!(most_recent(archive).unwrap().month, "Jan");
        assert!(most_recent(Vec::new()).is_none());
    }
}
