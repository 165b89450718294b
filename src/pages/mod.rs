//! Routed Pages

mod home;
mod not_found;
mod portfolio;

pub use home::HomePage;
pub use not_found::NotFound;
pub use portfolio::PortfolioPage;
