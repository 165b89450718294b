//! Site Models
//!
//! Static content records rendered by the landing sections and the portfolio page.

use crate::state::filter::Categorized;

/// Navbar entry: either a section on the home page or a separate page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub id: &'static str,
    pub is_page: bool,
    pub path: Option<&'static str>,
}

impl NavItem {
    pub const fn section(label: &'static str, id: &'static str) -> Self {
        Self { label, id, is_page: false, path: None }
    }

    pub const fn page(label: &'static str, id: &'static str, path: &'static str) -> Self {
        Self { label, id, is_page: true, path: Some(path) }
    }
}

/// Project category used by the gallery filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Web,
    Mobile,
    Cloud,
    Ai,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Web, Category::Mobile, Category::Cloud, Category::Ai];

    pub fn label(self) -> &'static str {
        match self {
            Category::Web => "Web",
            Category::Mobile => "Mobile",
            Category::Cloud => "Cloud",
            Category::Ai => "AI",
        }
    }
}

/// Featured product shown in the home page gallery
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub brief_description: &'static str,
    pub image: &'static str,
    pub images: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub categories: &'static [Category],
    pub video_url: Option<&'static str>,
    pub features: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

impl Categorized<Category> for Project {
    fn in_category(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }
}

/// Service offering card
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Tailwind gradient classes for the card accent
    pub gradient: &'static str,
    pub features: &'static [&'static str],
}

/// Service line that portfolio case studies are grouped under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioService {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub icon: &'static str,
    pub slug: &'static str,
}

/// Delivered client engagement listed on the portfolio page
#[derive(Debug, Clone, PartialEq)]
pub struct CaseStudy {
    pub id: &'static str,
    pub service_id: &'static str,
    pub name: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static str,
    pub image_url: &'static str,
    pub gallery_images: &'static [&'static str],
    pub client_name: &'static str,
    pub client_industry: &'static str,
    pub client_location: &'static str,
    pub website_url: &'static str,
    pub duration: &'static str,
    pub completed_date: &'static str,
    pub technologies: &'static [&'static str],
    pub database: Option<&'static str>,
    pub is_mobile_first: bool,
    pub features: &'static [&'static str],
    pub outcomes: &'static [&'static str],
}

impl Categorized<&'static str> for CaseStudy {
    fn in_category(&self, service_id: &&'static str) -> bool {
        self.service_id == *service_id
    }
}

/// Animated headline figure in the about section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreValue {
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_distinct() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label));
        }
    }

    #[test]
    fn test_nav_item_constructors() {
        let page = NavItem::page("Portfolio", "portfolio", "/portfolio");
        assert!(page.is_page);
        assert_eq!(page.path, Some("/portfolio"));

        let section = NavItem::section("Contact", "contact");
        assert!(!section.is_page);
        assert_eq!(section.path, None);
    }
}
