use crate::errors::MagazineError;
use crate::models::magazine::{Article, LatestMagazine, MagazineDetail, MagazineSummary};

/// Curated catalog entries that are not derived from the PDF tree.
pub struct CatalogRepository {
    summaries: Vec<MagazineSummary>,
    details: Vec<MagazineDetail>,
    latest: LatestMagazine,
}

impl CatalogRepository {
    pub fn new(
        summaries: Vec<MagazineSummary>,
        details: Vec<MagazineDetail>,
        latest: LatestMagazine,
    ) -> Self {
        Self {
            summaries,
            details,
            latest,
        }
    }

    pub fn list(&self) -> Vec<MagazineSummary> {
        self.summaries.clone()
    }

    pub fn find(&self, id: i32) -> Result<MagazineDetail, MagazineError> {
        self.details
            .iter()
            .find(|detail| detail.summary.id == id)
            .cloned()
            .ok_or_else(|| MagazineError::NotFound(format!("Magazine with ID {} not found", id)))
    }

    pub fn latest(&self) -> LatestMagazine {
        self.latest.clone()
    }

    /// The published catalog, with PDF links under `route_prefix`.
    pub fn published(route_prefix: &str) -> Self {
        let pdf = |month: &str| format!("{}/magazines/2025/{}/pdf", route_prefix, month);

        let tech = MagazineSummary::new(
            1,
            "Tech Innovations 2025",
            "July 2025",
            "Latest technology trends and innovations for college students",
            "/images/tech-2025-jul.jpg",
            &pdf("July"),
        );
        let career = MagazineSummary::new(
            2,
            "Career Guidance Special",
            "August 2025",
            "Complete guide for career planning and job preparation",
            "/images/career-guide-aug.jpg",
            &pdf("Aug"),
        );

        let tech_detail = MagazineDetail {
            summary: tech.clone(),
            articles: vec![
                Article::new("AI in Education", "Dr. Sarah Johnson", "4-12"),
                Article::new("Future of Web Development", "Mike Chen", "13-20"),
                Article::new("Cybersecurity Essentials", "Emily Rodriguez", "21-28"),
            ],
        };

        let latest = LatestMagazine {
            summary: MagazineSummary::new(
                999,
                "ShyvnTech Magazine - August 2025",
                "August 2025",
                "Discover the future of entrepreneurship! This special startup edition features breakthrough innovations, successful founder stories, and essential business strategies for the next generation of tech entrepreneurs.",
                "/images/shyvntech-aug-2025.jpg",
                &pdf("Aug"),
            ),
            year: Some(2025),
            month: Some("Aug".to_string()),
            category: Some("Startup".to_string()),
        };

        Self::new(vec![tech, career], vec![tech_detail], latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_detail_matches_its_listed_summary() {
        let catalog = CatalogRepository::published("/api");
        let listed = catalog.list();

        for summary in &listed {
            match catalog.find(summary.id) {
                Ok(detail) => assert_eq!(&detail.summary, summary),
                Err(MagazineError::NotFound(_)) => {}
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
        assert_eq!(catalog.find(1).unwrap().articles.len(), 3);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let catalog = CatalogRepository::published("/api");
        for id in [0, 2, 999, -1] {
            assert!(matches!(catalog.find(id), Err(MagazineError::NotFound(_))));
        }
    }

    #[test]
    fn links_follow_the_route_prefix() {
        let catalog = CatalogRepository::published("/v2");
        assert_eq!(catalog.list()[0].pdf_url, "/v2/magazines/2025/July/pdf");
        assert_eq!(catalog.latest().summary.pdf_url, "/v2/magazines/2025/Aug/pdf");
        assert_eq!(catalog.latest().month.as_deref(), Some("Aug"));
    }
}
