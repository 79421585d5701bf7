//! Alert messages that are swapped into the page by HTMX when a request fails.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// An error message with optional details, rendered as an HTML fragment.
pub struct Alert<'a> {
    message: &'a str,
    details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    pub fn into_html(self) -> Markup {
        html!(
            div
                role="alert"
                class="flex items-start gap-3 p-4 mb-4 text-sm text-red-800 rounded-lg
                    bg-red-50 border border-red-300 dark:bg-gray-800 dark:text-red-400
                    dark:border-red-800 shadow"
            {
                div class="flex-1"
                {
                    p class="font-semibold" { (self.message) }

                    @if !self.details.is_empty() {
                        p class="mt-1" { (self.details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    onclick="this.closest('#alert-container').classList.add('hidden')"
                    class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex h-8 w-8
                        items-center justify-center hover:bg-red-200 dark:hover:bg-gray-700"
                {
                    "×"
                }
            }
        )
    }

    /// Render the alert with `status_code`.
    ///
    /// HTMX only swaps error responses into the alert container when the
    /// response-targets extension is active, which the base template enables.
    pub fn into_response_with_status(self, status_code: StatusCode) -> Response {
        (status_code, self.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn renders_message_and_details() {
        let markup = Alert::error("Could not delete expense", "Try again.").into_html();
        let html = Html::parse_fragment(&markup.into_string());

        let paragraphs = html
            .select(&Selector::parse("p").unwrap())
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>();

        assert_eq!(paragraphs, vec!["Could not delete expense", "Try again."]);
    }

    #[test]
    fn omits_empty_details() {
        let markup = Alert::error("Oops", "").into_html();
        let html = Html::parse_fragment(&markup.into_string());

        let count = html.select(&Selector::parse("p").unwrap()).count();

        assert_eq!(count, 1);
    }

    #[test]
    fn response_uses_given_status() {
        let response = Alert::error("Oops", "").into_response_with_status(StatusCode::NOT_FOUND);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
