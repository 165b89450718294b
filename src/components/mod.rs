//! UI Components
//!
//! Page sections and reusable Leptos components.

mod about;
mod case_study_details;
mod footer;
mod hero;
mod image_zoom;
mod modal_frame;
mod navbar;
mod project_details;
mod projects;
mod scroll_to_top;
mod seo_meta;
mod services;
mod stat_counter;

pub use about::About;
pub use case_study_details::CaseStudyModal;
pub use footer::Footer;
pub use hero::Hero;
pub use image_zoom::ImageZoom;
pub use modal_frame::{CloseButton, ModalFrame};
pub use navbar::Navbar;
pub use project_details::ProjectDetailsModal;
pub use projects::Projects;
pub use scroll_to_top::ScrollToTop;
pub use seo_meta::SeoMeta;
pub use services::Services;
pub use stat_counter::StatCounter;
