//! Site Content
//!
//! Static copy and sample records. Immutable at runtime.

use crate::models::{Category, CaseStudy, CoreValue, NavItem, PortfolioService, Project, Service, Stat};
use crate::state::navigation::PORTFOLIO_PATH;

pub const COMPANY_NAME: &str = "AIRAVATA TECHNOLOGIES";
pub const SITE_URL: &str = "https://airavatatechnologies.com";
pub const SITE_DESCRIPTION: &str =
    "Airavata Technologies builds websites, mobile apps, custom software and AI automation for growing businesses.";

/// Brand logo target; behaves like a section link to the hero
pub const HOME_ITEM: NavItem = NavItem::section("Home", "home");

pub const CONTACT_ITEM: NavItem = NavItem::section("Contact", "contact");
pub const SERVICES_ITEM: NavItem = NavItem::section("Services", "services");
pub const PORTFOLIO_ITEM: NavItem = NavItem::page("Portfolio", "portfolio", PORTFOLIO_PATH);

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::section("About", "about"),
    SERVICES_ITEM,
    NavItem::section("Products", "projects"),
    PORTFOLIO_ITEM,
    CONTACT_ITEM,
];

/// Label shown for the "all" filter sentinel in the products gallery
pub const ALL_PRODUCTS_LABEL: &str = "All Products";

const CARD_GRADIENT: &str = "from-[#3480cb] to-[#52b9fd]";

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🌐",
        title: "Website Development",
        description: "Fast, responsive websites and web applications built to convert visitors into customers.",
        gradient: CARD_GRADIENT,
        features: &[
            "Responsive, mobile-first layouts",
            "Search engine optimised markup",
            "Content management integration",
            "Performance and accessibility audits",
        ],
    },
    Service {
        icon: "📱",
        title: "Mobile Application",
        description: "Native-feeling iOS and Android apps from a single, maintainable codebase.",
        gradient: CARD_GRADIENT,
        features: &[
            "Cross-platform iOS and Android delivery",
            "Offline-first data sync",
            "Push notifications and deep links",
            "App store release management",
        ],
    },
    Service {
        icon: "💻",
        title: "Software Development",
        description: "Custom business software shaped around how your teams actually work.",
        gradient: CARD_GRADIENT,
        features: &[
            "CRM and ERP systems",
            "Role-based dashboards",
            "Third-party API integration",
            "Cloud deployment and maintenance",
        ],
    },
    Service {
        icon: "🤖",
        title: "AI & Automation",
        description: "Practical machine learning and workflow automation that removes repetitive work.",
        gradient: CARD_GRADIENT,
        features: &[
            "Document and data extraction",
            "Chatbots and virtual assistants",
            "Predictive analytics",
            "Process automation",
        ],
    },
    Service {
        icon: "📊",
        title: "Business Consulting",
        description: "Technology roadmaps and digital transformation plans grounded in business outcomes.",
        gradient: CARD_GRADIENT,
        features: &[
            "Digital transformation strategy",
            "Technology stack selection",
            "Process analysis",
            "Vendor evaluation",
        ],
    },
    Service {
        icon: "📈",
        title: "Digital Marketing",
        description: "Growth campaigns that bring the right audience to your product.",
        gradient: CARD_GRADIENT,
        features: &[
            "Search engine optimisation",
            "Social media campaigns",
            "Conversion rate optimisation",
            "Analytics and reporting",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Mauli Car World - Automobile CRM System",
        description: "Complete Automobile CRM for Customer, Inventory, and Staff Management",
        brief_description: "Mauli Car World is a comprehensive automobile dealership CRM system designed to streamline customer management, inventory tracking, and staff operations. The platform provides role-based access for different stakeholders including Admin, Manager, Inventory Manager, Sales Executive, HR Manager, and Service Staff. It features real-time analytics, customer relationship tracking, inventory management, and business insights through comprehensive dashboards.",
        image: "/images/mauli_thumbnail.jpg",
        images: &[
            "/images/gallery1.jpg",
            "/images/gallery2.jpg",
            "/images/gallery3.jpg",
            "/images/gallery4.jpg",
        ],
        tags: &["React", "Node.js", "MongoDB", "Tailwind CSS", "CRM"],
        categories: &[Category::Web],
        video_url: None,
        features: &[
            "Multi-Role Access Control - Admin, Manager, Inventory Manager, Sales Executive, HR Manager, Service Staff",
            "Secure Authentication - Email and OTP verification system for secure login",
            "Customer Management - Register, track, and manage customer information and purchase history",
            "Inventory Management - Real-time inventory tracking, stock levels, and product categories",
            "Staff Management - Employee profiles, attendance, tasks, leaves, and performance tracking",
            "Analytics & Reports - Comprehensive dashboards with sales trends, customer growth, service status, and revenue metrics",
            "Branch Management - Support for multiple dealership locations",
            "Multi-Department Coordination - Sales, Service, HR, and management workflows",
        ],
        live_url: Some("https://example.com"),
        github_url: None,
    },
    Project {
        id: 2,
        title: "Professional Restaurant Website Design Prototype",
        description: "Enhancing Online Presence and Customer Engagement for Restaurants",
        brief_description: "A modern, fully responsive restaurant website prototype developed using React.js, aimed at enhancing the online presence of restaurants, cafés, and food businesses. The design emphasizes clean aesthetics, intuitive navigation, and mobile-first responsiveness, combining engaging visuals with a modular, scalable code structure.",
        image: "/images/2.1.png",
        images: &["/images/2.1.png", "/images/2.2.png", "/images/2.3.png", "/images/2.4.png"],
        tags: &["React", "Node.js", "MongoDB", "Tailwind CSS"],
        categories: &[Category::Web],
        video_url: Some("https://www.youtube.com/embed/9hA-mSbXZh4"),
        features: &[
            "Home Page with full-screen banner and sticky navigation with smooth scrolling",
            "Menu Section with categorized items and reusable components for dynamic rendering",
            "About Us Section with story-driven content and chef profiles with photos",
            "Contact & Reservation Section with responsive forms and embedded Google Map",
            "Mobile-first responsive design optimized for all devices",
            "Future-ready architecture for eCommerce integration and CMS",
        ],
        live_url: Some("https://example.com"),
        github_url: None,
    },
    Project {
        id: 3,
        title: "Digital QR Menu",
        description: "A QR-based digital menu system where users can scan a QR code to instantly view the restaurant's menu on their devices",
        brief_description: "Digital QR Menu is a QR-code-based restaurant menu system that eliminates the need for physical menus. Customers scan a QR code at their table to open the menu on their smartphone. The system streamlines the dining experience, reduces contact surfaces, and gives restaurants real-time menu management and customer analytics.",
        image: "/images/qr_menu_thumbnail.jpg",
        images: &[
            "/images/qr_menu_thumbnail.jpg",
            "/images/qr_menu_thumbnail.jpg",
            "/images/qr_menu_thumbnail.jpg",
            "/images/qr_menu_thumbnail.jpg",
        ],
        tags: &["React", "Node.js", "MongoDB", "Tailwind CSS"],
        categories: &[Category::Web],
        video_url: None,
        features: &[
            "QR Code Scanning - Customers scan table QR codes to access digital menu instantly",
            "Digital Menu Display - Interactive menu with food images, descriptions, and pricing",
            "Real-time Menu Updates - Staff can update menu items, prices, and availability instantly",
            "Order Management - Customers place orders directly from the menu",
            "Restaurant Analytics - Track popular dishes, customer preferences, and sales data",
            "Multi-Language Support - Serve a diverse customer base",
            "Mobile-Responsive Design - Optimized for all devices and screen sizes",
            "Restaurant Dashboard - Management interface for menu, orders, and analytics",
        ],
        live_url: Some("https://example.com"),
        github_url: None,
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: 50, label: "Projects Delivered", prefix: "", suffix: "+", delay_ms: 0 },
    Stat { value: 98, label: "Client Satisfaction", prefix: "", suffix: "%", delay_ms: 200 },
    Stat { value: 2000, label: "End Users Reached", prefix: "", suffix: "+", delay_ms: 400 },
    Stat { value: 6, label: "Service Lines", prefix: "", suffix: "", delay_ms: 600 },
];

pub const CORE_VALUES: &[CoreValue] = &[
    CoreValue {
        title: "Innovation",
        description: "Driving forward-thinking solutions that create measurable impact and lasting business advantage.",
        color: "from-blue-500 to-blue-600",
    },
    CoreValue {
        title: "Quality",
        description: "Delivering reliable, high-performance solutions through rigorous standards and attention to detail.",
        color: "from-blue-600 to-cyan-500",
    },
    CoreValue {
        title: "Partnership",
        description: "Building trusted, long-term collaborations focused on shared growth and mutual success.",
        color: "from-cyan-500 to-cyan-600",
    },
    CoreValue {
        title: "Agility",
        description: "Executing efficiently with adaptability, speed, and modern development practices.",
        color: "from-cyan-600 to-blue-500",
    },
];

pub const PORTFOLIO_SERVICES: &[PortfolioService] = &[
    PortfolioService {
        id: "3",
        title: "Software Development",
        tagline: "Custom Software",
        icon: "💻",
        slug: "software-development",
    },
    PortfolioService {
        id: "1",
        title: "Website Development",
        tagline: "Modern Web Solutions",
        icon: "🌐",
        slug: "website-development",
    },
    PortfolioService {
        id: "2",
        title: "Mobile Application Development",
        tagline: "iOS & Android Apps",
        icon: "📱",
        slug: "mobile-application-development",
    },
    PortfolioService {
        id: "4",
        title: "Digital Marketing",
        tagline: "Growth Strategies",
        icon: "📈",
        slug: "digital-marketing",
    },
];

pub const CASE_STUDIES: &[CaseStudy] = &[CaseStudy {
    id: "w-trainwithwinston",
    service_id: "1",
    name: "Train With Winston",
    short_description: "High-performance digital ecosystem for 'Train with Winston'.",
    full_description: "A performance-driven coaching platform designed to convert visitors into trainees.",
    image_url: "/attached_assets/Screenshot_2026-01-05_at_12.54.18_AM_1767554664658.png",
    gallery_images: &["/attached_assets/Screenshot_2026-01-05_at_12.54.18_AM_1767554664658.png"],
    client_name: "Train with Winston",
    client_industry: "Fitness & Wellness",
    client_location: "Mumbai, India",
    website_url: "https://trainwithwinston.com/",
    duration: "2 weeks",
    completed_date: "December 2025",
    technologies: &["React", "TypeScript", "Tailwind CSS"],
    database: None,
    is_mobile_first: true,
    features: &["Custom Training Programs"],
    outcomes: &["2,000+ Clients Transformed"],
}];

/// Look up a portfolio service by id
pub fn portfolio_service(id: &str) -> Option<&'static PortfolioService> {
    PORTFOLIO_SERVICES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::navigation::Route;
    use std::collections::HashSet;

    #[test]
    fn test_nav_ids_unique() {
        let ids: HashSet<_> = NAV_ITEMS.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), NAV_ITEMS.len());
        assert!(!ids.contains(HOME_ITEM.id));
    }

    #[test]
    fn test_page_items_point_at_known_routes() {
        for item in NAV_ITEMS.iter().filter(|i| i.is_page) {
            let path = item.path.expect("page items carry a path");
            assert!(Route::from_path(path).is_ok(), "unknown route {}", path);
        }
    }

    #[test]
    fn test_project_ids_unique_and_categorised() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
        assert!(PROJECTS.iter().all(|p| !p.categories.is_empty()));
        assert!(PROJECTS.iter().all(|p| !p.images.is_empty()));
    }

    #[test]
    fn test_case_studies_reference_services() {
        for study in CASE_STUDIES {
            assert!(
                portfolio_service(study.service_id).is_some(),
                "{} references unknown service {}",
                study.id,
                study.service_id
            );
        }
    }

    #[test]
    fn test_stats_delays_ascend() {
        assert!(STATS.windows(2).all(|w| w[0].delay_ms <= w[1].delay_ms));
    }
}
