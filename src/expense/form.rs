use maud::{Markup, html};
use time::Date;

use crate::{
    expense::{Amount, Category},
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The initial values of the expense form fields.
pub struct ExpenseFormDefaults<'a> {
    pub amount: Option<Amount>,
    pub category: Category,
    pub description: Option<&'a str>,
    pub date: Date,
    pub autofocus_amount: bool,
}

pub fn expense_form_fields(defaults: &ExpenseFormDefaults<'_>) -> Markup {
    let amount_str = defaults
        .amount
        .map(|amount| format!("{:.2}", amount.value()));

    html! {
        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            // w-full needed to ensure input takes the full width when prefilled with a value
            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    required
                    value=[amount_str.as_deref()]
                    autofocus[defaults.autofocus_amount]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label
                for="category"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            select
                name="category"
                id="category"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for category in Category::ALL {
                    option
                        value=(category.label())
                        selected[category == defaults.category]
                    {
                        (category.label())
                    }
                }
            }
        }

        div
        {
            label
                for="description"
                class=(FORM_LABEL_STYLE)
            {
                "Description"
            }

            input
                name="description"
                id="description"
                type="text"
                placeholder="Description"
                value=[defaults.description]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::expense::{Amount, Category};

    use super::{ExpenseFormDefaults, expense_form_fields};

    fn render(defaults: &ExpenseFormDefaults<'_>) -> Html {
        let markup = html_form(expense_form_fields(defaults));
        Html::parse_fragment(&markup)
    }

    fn html_form(fields: maud::Markup) -> String {
        maud::html!(form { (fields) }).into_string()
    }

    #[test]
    fn lists_every_category_with_default_selected() {
        let html = render(&ExpenseFormDefaults {
            amount: None,
            category: Category::Travel,
            description: None,
            date: date!(2025 - 01 - 15),
            autofocus_amount: true,
        });

        let options: Vec<_> = html
            .select(&Selector::parse("select[name=category] option").unwrap())
            .collect();
        assert_eq!(options.len(), Category::ALL.len());

        let selected: Vec<_> = options
            .iter()
            .filter(|option| option.value().attr("selected").is_some())
            .map(|option| option.value().attr("value").unwrap_or_default())
            .collect();
        assert_eq!(selected, vec!["Travel"]);
    }

    #[test]
    fn prefills_amount_with_two_decimals() {
        let html = render(&ExpenseFormDefaults {
            amount: Some(Amount::new(dec!(12.5)).unwrap()),
            category: Category::Other,
            description: Some("Parking"),
            date: date!(2025 - 01 - 15),
            autofocus_amount: false,
        });

        let amount = html
            .select(&Selector::parse("input[name=amount]").unwrap())
            .next()
            .unwrap();
        assert_eq!(amount.value().attr("value"), Some("12.50"));
        assert_eq!(amount.value().attr("min"), Some("0"));
        assert_eq!(amount.value().attr("step"), Some("0.01"));

        let description = html
            .select(&Selector::parse("input[name=description]").unwrap())
            .next()
            .unwrap();
        assert_eq!(description.value().attr("value"), Some("Parking"));

        let date = html
            .select(&Selector::parse("input[name=date]").unwrap())
            .next()
            .unwrap();
        assert_eq!(date.value().attr("value"), Some("2025-01-15"));
    }
}
