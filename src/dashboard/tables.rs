//! Table views for the dashboard summaries.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::{CategoryTotal, MonthlyTotal},
    html::{
        CATEGORY_BADGE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency,
    },
};

const TABLE_AMOUNT_CELL_STYLE: &str = "px-6 py-4 text-right whitespace-nowrap";

/// Renders a table of the amount spent in each category.
pub(super) fn category_totals_table(category_totals: &[CategoryTotal]) -> Markup {
    html! {
        div id="category-totals" {
            h3 class="text-xl font-semibold mb-4" { "Category Breakdown" }

            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Total" }
                        }
                    }
                    tbody {
                        @for total in category_totals {
                            tr class=(TABLE_ROW_STYLE) {
                                td class=(TABLE_CELL_STYLE) {
                                    span class=(CATEGORY_BADGE_STYLE) { (total.category.label()) }
                                }
                                td class=(TABLE_AMOUNT_CELL_STYLE) {
                                    (format_currency(total.total))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders a table of the amount spent in each month, oldest month first.
pub(super) fn monthly_totals_table(monthly_totals: &[MonthlyTotal]) -> Markup {
    html! {
        div id="monthly-totals" {
            h3 class="text-xl font-semibold mb-4" { "Monthly Totals" }

            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Month" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Total" }
                        }
                    }
                    tbody {
                        @for total in monthly_totals {
                            tr class=(TABLE_ROW_STYLE) {
                                th
                                    scope="row"
                                    class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"}
                                {
                                    (total.month.label())
                                }
                                td class=(TABLE_AMOUNT_CELL_STYLE) {
                                    (format_currency(total.total))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        dashboard::aggregation::{CalendarMonth, CategoryTotal, MonthlyTotal},
        expense::Category,
    };

    use super::{category_totals_table, monthly_totals_table};

    fn row_texts(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("tbody tr").unwrap())
            .map(|row| {
                row.text()
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    #[test]
    fn category_table_lists_each_total() {
        let table = category_totals_table(&[
            CategoryTotal {
                category: Category::Health,
                total: dec!(30.5),
            },
            CategoryTotal {
                category: Category::Shopping,
                total: dec!(1200),
            },
        ]);

        let html = Html::parse_fragment(&table.into_string());

        assert_eq!(
            row_texts(&html),
            vec!["Health $30.50", "Shopping $1,200.00"]
        );
    }

    #[test]
    fn monthly_table_lists_months_in_given_order() {
        let table = monthly_totals_table(&[
            MonthlyTotal {
                month: CalendarMonth::containing(date!(2023 - 12 - 31)),
                total: dec!(0.30),
            },
            MonthlyTotal {
                month: CalendarMonth::containing(date!(2024 - 01 - 01)),
                total: dec!(5),
            },
        ]);

        let html = Html::parse_fragment(&table.into_string());

        assert_eq!(row_texts(&html), vec!["Dec 2023 $0.30", "Jan 2024 $5.00"]);
    }
}
