//! Declarative chart specifications and their plotly figures.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{json, Value};

use crate::models::{AggregateResult, MonthTotal, NamedTotal, StateTotal};

pub const TEMPLATE: &str = "plotly_dark";
pub const TITLE_FONT_SIZE: u32 = 16;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub height: u32,
    pub template: &'static str,
    #[serde(flatten)]
    pub series: ChartSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSeries {
    HorizontalBar {
        categories: Vec<String>,
        values: Vec<f64>,
    },
    Choropleth {
        locations: Vec<String>,
        names: Vec<String>,
        values: Vec<f64>,
        location_mode: &'static str,
        scope: &'static str,
        color_scale: &'static str,
        /// Legend title for the color bar.
        value_label: String,
        /// Hover label for `names`.
        name_label: String,
    },
    Line {
        x: Vec<String>,
        y: Vec<f64>,
        markers: bool,
    },
}

fn value_of(total: Decimal) -> f64 {
    total.to_f64().unwrap_or_default()
}

fn sales_label(currency_symbol: &str) -> String {
    format!("Total Sales Value ({})", currency_symbol)
}

/// Horizontal bar of sales per product, smallest first.
pub fn product_bar(totals: &[NamedTotal], currency_symbol: &str) -> ChartSpec {
    ChartSpec {
        id: "sales_by_product",
        title: "Sales by Product".to_string(),
        x_label: sales_label(currency_symbol),
        y_label: "Product".to_string(),
        height: 500,
        template: TEMPLATE,
        series: ChartSeries::HorizontalBar {
            categories: totals.iter().map(|t| t.name.clone()).collect(),
            values: totals.iter().map(|t| value_of(t.total)).collect(),
        },
    }
}

/// US map colored by sales per state.
pub fn state_choropleth(totals: &[StateTotal], currency_symbol: &str) -> ChartSpec {
    ChartSpec {
        id: "sales_by_state",
        title: "Sales Distribution by State (USA)".to_string(),
        x_label: String::new(),
        y_label: String::new(),
        height: 500,
        template: TEMPLATE,
        series: ChartSeries::Choropleth {
            locations: totals.iter().map(|t| t.state_code.to_string()).collect(),
            names: totals.iter().map(|t| t.region_name.clone()).collect(),
            values: totals.iter().map(|t| value_of(t.total)).collect(),
            location_mode: "USA-states",
            scope: "usa",
            color_scale: "blues",
            value_label: sales_label(currency_symbol),
            name_label: "State".to_string(),
        },
    }
}

/// Monthly revenue line, chronological.
pub fn revenue_line(totals: &[MonthTotal], currency_symbol: &str) -> ChartSpec {
    ChartSpec {
        id: "revenue_over_time",
        title: "Revenue Over Time".to_string(),
        x_label: "Month/Year".to_string(),
        y_label: format!("Total Revenue ({})", currency_symbol),
        height: 350,
        template: TEMPLATE,
        series: ChartSeries::Line {
            x: totals.iter().map(|t| t.month.to_string()).collect(),
            y: totals.iter().map(|t| value_of(t.total)).collect(),
            markers: true,
        },
    }
}

/// The three dashboard charts, in display order.
pub fn dashboard_charts(report: &AggregateResult, currency_symbol: &str) -> Vec<ChartSpec> {
    vec![
        product_bar(&report.sales_by_product, currency_symbol),
        state_choropleth(&report.sales_by_state, currency_symbol),
        revenue_line(&report.sales_by_month, currency_symbol),
    ]
}

impl ChartSpec {
    /// Plotly figure (`{"data": [...], "layout": {...}}`) for this spec.
    pub fn to_plotly(&self) -> Value {
        let mut layout = json!({
            "title": {
                "text": self.title,
                "x": 0.5,
                "font": { "size": TITLE_FONT_SIZE },
                "pad": { "t": 4, "b": 0 },
            },
            "height": self.height,
            "xaxis": { "title": { "text": self.x_label } },
            "yaxis": { "title": { "text": self.y_label } },
        });
        apply_template(&mut layout, self.template);

        let data = match &self.series {
            ChartSeries::HorizontalBar { categories, values } => json!([{
                "type": "bar",
                "orientation": "h",
                "x": values,
                "y": categories,
                "hovertemplate": format!("{}=%{{y}}<br>{}=%{{x}}<extra></extra>", self.y_label, self.x_label),
            }]),
            ChartSeries::Choropleth {
                locations,
                names,
                values,
                location_mode,
                scope,
                color_scale,
                value_label,
                name_label,
            } => {
                layout["geo"] = json!({ "scope": scope, "bgcolor": "white" });
                json!([{
                    "type": "choropleth",
                    "locationmode": location_mode,
                    "locations": locations,
                    "z": values,
                    "text": names,
                    "colorscale": plotly_color_scale(color_scale),
                    "colorbar": { "title": { "text": value_label } },
                    "hovertemplate": format!("{}=%{{text}}<br>{}=%{{z}}<extra></extra>", name_label, value_label),
                }])
            }
            ChartSeries::Line { x, y, markers } => {
                let mode = if *markers { "lines+markers" } else { "lines" };
                json!([{
                    "type": "scatter",
                    "mode": mode,
                    "x": x,
                    "y": y,
                    "hovertemplate": format!("{}=%{{x}}<br>{}=%{{y}}<extra></extra>", self.x_label, self.y_label),
                }])
            }
        };

        json!({ "data": data, "layout": layout })
    }
}

/// plotly.js has no named templates; spell out the dark one's colors.
fn apply_template(layout: &mut Value, template: &str) {
    if template == TEMPLATE {
        layout["paper_bgcolor"] = json!("rgb(17,17,17)");
        layout["plot_bgcolor"] = json!("rgb(17,17,17)");
        layout["font"] = json!({ "color": "#f2f5fa" });
        layout["xaxis"]["gridcolor"] = json!("#283442");
        layout["yaxis"]["gridcolor"] = json!("#283442");
    }
}

fn plotly_color_scale(name: &str) -> &'static str {
    match name {
        "blues" => "Blues",
        "greens" => "Greens",
        "reds" => "Reds",
        _ => "Viridis",
    }
}
