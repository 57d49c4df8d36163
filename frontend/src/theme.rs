//! App theme: slate dark palette and spacing.

/// Colors used across screens.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    pub const BACKGROUND: &'static str = "#0f172a";
    pub const SURFACE: &'static str = "#1e293b";
    pub const SURFACE_RAISED: &'static str = "#334155";
    pub const BORDER: &'static str = "#475569";
    pub const ON_SURFACE: &'static str = "#ffffff";
    pub const MUTED: &'static str = "#94a3b8";
    pub const PRIMARY: &'static str = "#38bdf8";
    pub const ON_PRIMARY: &'static str = "#0f172a";
    pub const ACTIVE: &'static str = "#0ea5e9";
    pub const SUCCESS: &'static str = "#34d399";
    pub const SUCCESS_SURFACE: &'static str = "#064e3b";
    pub const ERROR: &'static str = "#ef4444";

    // Stat card icons
    pub const TEMPERATURE: &'static str = "#f87171";
    pub const WIND: &'static str = "#a3e635";
    pub const CONDITION: &'static str = "#fbbf24";
    pub const LOCATION: &'static str = "#60a5fa";
}

pub mod spacing {
    pub const XS: &'static str = "5px";
    pub const SM: &'static str = "10px";
    pub const MD: &'static str = "20px";
    pub const LG: &'static str = "25px";
    pub const CARD_PADDING: &'static str = "25px";
    pub const SCREEN_PADDING: &'static str = "30px";
}

/// Shared inline style for text/number/date inputs and selects.
pub fn input_style() -> String {
    format!(
        "width: 100%; padding: 12px; background-color: {}; border: 1px solid {}; border-radius: 8px; color: {}; margin-top: {}; box-sizing: border-box;",
        AppColors::SURFACE_RAISED,
        AppColors::BORDER,
        AppColors::ON_SURFACE,
        spacing::XS,
    )
}

/// Full-width primary button.
pub fn button_style() -> String {
    format!(
        "width: 100%; padding: 12px; background-color: {}; color: {}; border: none; border-radius: 8px; font-weight: bold; cursor: pointer; margin-top: {};",
        AppColors::PRIMARY,
        AppColors::ON_PRIMARY,
        spacing::MD,
    )
}

pub fn title_style() -> String {
    format!(
        "font-size: 24px; margin-bottom: {}; border-bottom: 1px solid {}; padding-bottom: {};",
        spacing::MD,
        AppColors::SURFACE_RAISED,
        spacing::SM,
    )
}
