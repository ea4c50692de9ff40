//! Page title, layout and theme.
//!
//! Presentation data only; the page applies it as-is.

use serde::Serialize;

use crate::config::DisplaySettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageConfig {
    pub title: String,
    pub layout: &'static str,
    pub sidebar: &'static str,
    pub currency_symbol: String,
    pub theme: Theme,
}

/// Static colors for the page chrome and KPI cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: &'static str,
    pub sidebar_background: &'static str,
    pub sidebar_text: &'static str,
    pub kpi_background: &'static str,
    pub kpi_border: &'static str,
    pub kpi_label: &'static str,
    pub kpi_value: &'static str,
}

pub const DEFAULT_THEME: Theme = Theme {
    background: "#ffffff",
    sidebar_background: "#121113",
    sidebar_text: "#ffffff",
    kpi_background: "#f0f2f6",
    kpi_border: "#dddddd",
    kpi_label: "#333333",
    kpi_value: "#000000",
};

pub fn page_config(display: &DisplaySettings) -> PageConfig {
    PageConfig {
        title: display.page_title.clone(),
        layout: "wide",
        sidebar: "expanded",
        currency_symbol: display.currency_symbol.clone(),
        theme: DEFAULT_THEME,
    }
}
