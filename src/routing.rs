//! Application router configuration.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{get, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::{get_dashboard_page, get_summary_json},
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        get_create_expense_page, get_edit_expense_page, get_expenses_json, get_expenses_page,
    },
    internal_server_error::get_internal_server_error_page,
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let pages = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::NEW_EXPENSE_VIEW, get(get_create_expense_page))
        .route(endpoints::EDIT_EXPENSE_VIEW, get(get_edit_expense_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api = Router::new()
        .route(
            endpoints::EXPENSES_API,
            get(get_expenses_json).post(create_expense_endpoint),
        )
        .route(
            endpoints::EXPENSE,
            put(edit_expense_endpoint).delete(delete_expense_endpoint),
        )
        .route(endpoints::SUMMARY_API, get(get_summary_json))
        .layer(middleware::from_fn(logging_middleware));

    pages
        .merge(api)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{AppState, build_router, endpoints, endpoints::format_endpoint};

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database.");
        let state = AppState::new(connection, "Etc/UTC").expect("Could not create app state.");

        TestServer::new(build_router(state))
    }

    async fn create_expense(server: &TestServer, amount: &str, category: &str, date: &str) {
        server
            .post(endpoints::EXPENSES_API)
            .form(&[
                ("amount", amount),
                ("category", category),
                ("description", "test"),
                ("date", date),
            ])
            .await
            .assert_status(StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn created_expense_is_listed_by_json_api() {
        let server = get_test_server();

        create_expense(&server, "12.34", "Health", "2024-05-06").await;

        let response = server.get(endpoints::EXPENSES_API).await;

        response.assert_status_ok();
        response.assert_json(&json!([{
            "id": 1,
            "amount": "12.34",
            "category": "Health",
            "description": "test",
            "date": "2024-05-06",
        }]));
    }

    #[tokio::test]
    async fn invalid_expense_is_rejected_and_not_stored() {
        let server = get_test_server();

        server
            .post(endpoints::EXPENSES_API)
            .form(&[
                ("amount", "-1"),
                ("category", "Health"),
                ("date", "2024-05-06"),
            ])
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server.get(endpoints::EXPENSES_API).await.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn summary_reflects_updates_and_deletes() {
        let server = get_test_server();
        create_expense(&server, "10", "Travel", "2024-01-10").await;
        create_expense(&server, "5", "Travel", "2024-02-10").await;

        server
            .put(&format_endpoint(endpoints::EXPENSE, 1))
            .form(&[
                ("amount", "20"),
                ("category", "Shopping"),
                ("date", "2024-01-10"),
            ])
            .await
            .assert_status(StatusCode::SEE_OTHER);
        server
            .delete(&format_endpoint(endpoints::EXPENSE, 2))
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let summary: Value = server.get(endpoints::SUMMARY_API).await.json();

        assert_eq!(summary["total"], "20");
        assert_eq!(summary["categories"][0]["category"], "Shopping");
        assert_eq!(summary["months"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn pages_render() {
        let server = get_test_server();

        for page in [
            endpoints::DASHBOARD_VIEW,
            endpoints::EXPENSES_VIEW,
            endpoints::NEW_EXPENSE_VIEW,
        ] {
            server.get(page).await.assert_status_ok();
        }
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found() {
        let server = get_test_server();

        server
            .get("/does/not/exist")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
