use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MagazineSummary {
    pub id: i32,
    pub title: String,
    pub issue_date: String,
    pub description: String,
    pub cover_image_url: String,
    pub pdf_url: String,
}

impl MagazineSummary {
    pub fn new(
        id: i32,
        title: &str,
        issue_date: &str,
        description: &str,
        cover_image_url: &str,
        pdf_url: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            issue_date: issue_date.to_string(),
            description: description.to_string(),
            cover_image_url: cover_image_url.to_string(),
            pdf_url: pdf_url.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub author: String,
    pub pages: String,
}

impl Article {
    pub fn new(title: &str, author: &str, pages: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            pages: pages.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MagazineDetail {
    #[serde(flatten)]
    pub summary: MagazineSummary,
    pub articles: Vec<Article>,
}

/// The issue promoted as "latest". Issues that come from the archive also
/// carry their year/month coordinate and category.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LatestMagazine {
    #[serde(flatten)]
    pub summary: MagazineSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_serializes_flat_with_camel_case_fields() {
        let detail = MagazineDetail {
            summary: MagazineSummary::new(
                1,
                "Tech Innovations 2025",
                "July 2025",
                "Latest technology trends",
                "/images/tech-2025-jul.jpg",
                "/api/magazines/2025/July/pdf",
            ),
            articles: vec![Article::new("AI in Education", "Dr. Sarah Johnson", "4-12")],
        };

        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            json!({
                "id": 1,
                "title": "Tech Innovations 2025",
                "issueDate": "July 2025",
                "description": "Latest technology trends",
                "coverImageUrl": "/images/tech-2025-jul.jpg",
                "pdfUrl": "/api/magazines/2025/July/pdf",
                "articles": [
                    { "title": "AI in Education", "author": "Dr. Sarah Johnson", "pages": "4-12" }
                ]
            })
        );
    }

    #[test]
    fn latest_omits_missing_coordinates() {
        let latest = LatestMagazine {
            summary: MagazineSummary::new(7, "t", "d", "x", "/c.jpg", "/p"),
            year: None,
            month: None,
            category: None,
        };
        let value = serde_json::to_value(&latest).unwrap();
        assert!(value.get("year").is_none());
        assert!(value.get("category").is_none());
        assert_eq!(value["id"], 7);
    }
}
