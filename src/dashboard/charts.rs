//! Chart generation and rendering for the dashboard.
//!
//! Two ECharts visualizations are built from the aggregated expenses:
//! - **Expenses by Category**: a pie chart of the category totals
//! - **Monthly Expenses**: a bar chart of the monthly totals in calendar order
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle, JsFunction, Tooltip,
        Trigger,
    },
    series::{Pie, bar},
};
use maud::{Markup, PreEscaped, html};
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{
    dashboard::aggregation::{CategoryTotal, MonthlyTotal},
    html::HeadElement,
};

/// The colours given to the categories in the order they first appear.
pub(super) const CATEGORY_PALETTE: [&str; 8] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8", "#82ca9d", "#ffc658", "#ff7300",
];

/// The colour of the bars in the monthly expenses chart.
pub(super) const MONTHLY_BAR_COLOR: &str = "#8884d8";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

pub(super) fn category_chart(category_totals: &[CategoryTotal]) -> Chart {
    let data: Vec<(f64, &str)> = category_totals
        .iter()
        .map(|total| (chart_value(total.total), total.category.label()))
        .collect();

    Chart::new()
        .title(Title::new().text("Expenses by Category").left(20).top("1%"))
        .color(
            CATEGORY_PALETTE
                .iter()
                .map(|&color| Color::from(color))
                .collect(),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().top("bottom"))
        .series(Pie::new().name("Expenses").radius("60%").data(data))
}

pub(super) fn monthly_chart(monthly_totals: &[MonthlyTotal]) -> Chart {
    let labels: Vec<String> = monthly_totals
        .iter()
        .map(|total| total.month.label())
        .collect();
    let values: Vec<f64> = monthly_totals
        .iter()
        .map(|total| chart_value(total.total))
        .collect();

    Chart::new()
        .title(Title::new().text("Monthly Expenses").left(20).top("1%"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(60)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            bar::Bar::new()
                .name("Expenses")
                .item_style(ItemStyle::new().color(MONTHLY_BAR_COLOR))
                .data(values),
        )
}

/// Charts are drawn with floating point numbers, totals are only converted for display.
fn chart_value(total: Decimal) -> f64 {
    total.to_f64().unwrap_or_default()
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use time::macros::date;

    use crate::{
        dashboard::aggregation::{CalendarMonth, CategoryTotal, MonthlyTotal},
        expense::Category,
    };

    use super::{CATEGORY_PALETTE, MONTHLY_BAR_COLOR, category_chart, monthly_chart};

    #[test]
    fn category_chart_uses_palette_and_labels() {
        let totals = vec![
            CategoryTotal {
                category: Category::Travel,
                total: dec!(99.99),
            },
            CategoryTotal {
                category: Category::BillsAndUtilities,
                total: dec!(120),
            },
        ];

        let options = category_chart(&totals).to_string();

        assert!(options.contains("Expenses by Category"));
        assert!(options.contains("Travel"));
        assert!(options.contains("Bills & Utilities"));
        for color in CATEGORY_PALETTE {
            assert!(options.contains(color), "missing colour {color}");
        }
    }

    #[test]
    fn monthly_chart_labels_follow_month_order() {
        let totals = vec![
            MonthlyTotal {
                month: CalendarMonth::containing(date!(2024 - 02 - 01)),
                total: dec!(10),
            },
            MonthlyTotal {
                month: CalendarMonth::containing(date!(2024 - 03 - 01)),
                total: dec!(20),
            },
        ];

        let options = monthly_chart(&totals).to_string();

        assert!(options.contains("Monthly Expenses"));
        assert!(options.contains(MONTHLY_BAR_COLOR));
        let february = options.find("Feb 2024").expect("missing Feb 2024 label");
        let march = options.find("Mar 2024").expect("missing Mar 2024 label");
        assert!(february < march);
    }
}
