mod backdrop;
mod card;
mod demand_chart;
mod error_banner;
mod stat_card;

pub use backdrop::Backdrop;
pub use card::Card;
pub use demand_chart::DemandChart;
pub use error_banner::ErrorBanner;
pub use stat_card::StatCard;
