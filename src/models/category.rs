use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Month tokens that share a category, e.g. `["july", "jul"] -> "Cloud"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCategory {
    pub tokens: Vec<String>,
    pub category: String,
}

/// Lookup table from a month directory name to a category and a
/// description template. Templates may use `{month}` and `{year}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTable {
    pub months: Vec<MonthCategory>,
    #[serde(default)]
    pub descriptions: HashMap<String, String>,
    pub fallback_category: String,
    pub fallback_description: String,
}

impl CategoryTable {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn category_for(&self, month: &str) -> &str {
        let token = month.to_lowercase();
        self.months
            .iter()
            .find(|entry| entry.tokens.iter().any(|t| t.to_lowercase() == token))
            .map(|entry| entry.category.as_str())
            .unwrap_or(&self.fallback_category)
    }

    pub fn description_for(&self, month: &str, year: i32) -> String {
        let template = self
            .descriptions
            .get(self.category_for(month))
            .unwrap_or(&self.fallback_description);

        template
            .replace("{month}", month)
            .replace("{year}", &year.to_string())
    }
}

fn month(tokens: &[&str], category: &str) -> MonthCategory {
    MonthCategory {
        tokens: tokens.iter().map(|t| t.to_string()).collect(),
        category: category.to_string(),
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let months = vec![
            month(&["january", "jan"], "AI"),
            month(&["february", "feb"], "Blockchain"),
            month(&["march", "mar"], "Cloud"),
            month(&["april", "apr"], "Cybersecurity"),
            month(&["may"], "Startup"),
            month(&["june", "jun"], "AI"),
            month(&["july", "jul"], "Cloud"),
            month(&["august", "aug"], "Startup"),
            month(&["september", "sep"], "Blockchain"),
            month(&["october", "oct"], "Cybersecurity"),
            month(&["november", "nov"], "AI"),
            month(&["december", "dec"], "Cloud"),
        ];

        let descriptions = [
            (
                "AI",
                "Explore the latest in Artificial Intelligence, machine learning trends, and AI applications in {month} {year}. Perfect for students and professionals looking to stay ahead in the AI revolution.",
            ),
            (
                "Blockchain",
                "Discover blockchain technology, cryptocurrency insights, and decentralized solutions in this comprehensive {month} {year} issue. Learn how blockchain is transforming industries.",
            ),
            (
                "Cloud",
                "Master cloud computing essentials, AWS, Azure, and modern DevOps practices in our {month} {year} edition. Essential reading for cloud enthusiasts and IT professionals.",
            ),
            (
                "Cybersecurity",
                "Stay protected with the latest cybersecurity trends, threat analysis, and security best practices in {month} {year}. Your guide to digital safety and security.",
            ),
            (
                "Startup",
                "Entrepreneurship insights, startup stories, and business innovation strategies in our {month} {year} startup special. From idea to IPO - your startup journey guide.",
            ),
        ]
        .into_iter()
        .map(|(category, template)| (category.to_string(), template.to_string()))
        .collect();

        Self {
            months,
            descriptions,
            fallback_category: String::from("Technology"),
            fallback_description: String::from(
                "Comprehensive technology insights and innovations covering multiple domains in {month} {year}. Stay updated with the latest tech trends and industry developments.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lookup_ignores_case_and_accepts_short_tokens() {
        let table = CategoryTable::default();
        assert_eq!(table.category_for("July"), "Cloud");
        assert_eq!(table.category_for("JUL"), "Cloud");
        assert_eq!(table.category_for("Aug"), "Startup");
        assert_eq!(table.category_for("may"), "Startup");
        assert_eq!(table.category_for("Dec"), "Cloud");
    }

    #[test]
    fn unknown_tokens_fall_back_to_technology() {
        let table = CategoryTable::default();
        assert_eq!(table.category_for("Special-Edition"), "Technology");
        assert_eq!(table.category_for(""), "Technology");
        assert!(table
            .description_for("Special-Edition", 2025)
            .contains("multiple domains in Special-Edition 2025"));
    }

    #[test]
    fn description_fills_month_and_year() {
        let table = CategoryTable::default();
        let description = table.description_for("Aug", 2025);
        assert!(description.starts_with("Entrepreneurship insights"));
        assert!(description.contains("our Aug 2025 startup special"));
    }

    #[test]
    fn table_can_be_replaced_from_json() {
        let raw = r#"{
            "months": [{ "tokens": ["Spring"], "category": "Robotics" }],
            "descriptions": { "Robotics": "Robots of {month} {year}" },
            "fallback_category": "General",
            "fallback_description": "Issue {month}/{year}"
        }"#;
        let table = CategoryTable::from_json(raw).unwrap();

        assert_eq!(table.category_for("spring"), "Robotics");
        assert_eq!(table.description_for("spring", 2026), "Robots of spring 2026");
        assert_eq!(table.category_for("July"), "General");
        assert_eq!(table.description_for("July", 2026), "Issue July/2026");
    }

    #[test]
    fn category_without_template_uses_fallback_description() {
        let mut table = CategoryTable::default();
        table.descriptions.remove("Cloud");
        assert_eq!(
            table.description_for("July", 2025),
            "Comprehensive technology insights and innovations covering multiple domains in July 2025. Stay updated with the latest tech trends and industry developments."
        );
    }
}
