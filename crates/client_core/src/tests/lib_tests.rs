use super::*;
use crate::roster::over_age_threshold;
use axum::{http::StatusCode, routing::get, Json, Router};
use tokio::net::TcpListener;

async fn spawn_employees_server(app: Router) -> Url {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/api/GetEmployees")
        .parse()
        .expect("test endpoint url")
}

fn employee_json(id: i64, name: &str, age: u32, salary: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "employee_name": name,
        "age": age,
        "salary": salary,
        "job_title": "Engineer",
    })
}

#[test]
fn default_endpoint_parses_as_url() {
    let url: Url = DEFAULT_API_URL.parse().expect("default endpoint");
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.path(), "/api/GetEmployees");

    let client = RosterClient::new(url.clone());
    assert_eq!(client.api_url(), &url);
}

#[tokio::test]
async fn fetch_returns_employees_from_wire_body() {
    let app = Router::new().route(
        "/api/GetEmployees",
        get(|| async {
            Json(serde_json::json!({
                "employees": [
                    employee_json(1, "Airi Satou", 33, 162700.0),
                    employee_json(2, "Garrett Winters", 63, 170750.0),
                ]
            }))
        }),
    );
    let url = spawn_employees_server(app).await;

    let employees = RosterClient::new(url)
        .fetch_employees()
        .await
        .expect("fetch employees");

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].employee_name, "Airi Satou");
    assert_eq!(employees[0].age, 33);
    assert_eq!(employees[1].id, shared::domain::EmployeeId(2));
}

#[tokio::test]
async fn fetch_then_filter_matches_worked_example() {
    let ages = [25, 35, 45, 31, 50, 60];
    let roster: Vec<serde_json::Value> = ages
        .iter()
        .enumerate()
        .map(|(index, &age)| employee_json(index as i64 + 1, "employee", age, 90000.0))
        .collect();
    let app = Router::new().route(
        "/api/GetEmployees",
        get(move || async move { Json(serde_json::json!({ "employees": roster })) }),
    );
    let url = spawn_employees_server(app).await;

    let fetched = RosterClient::new(url)
        .fetch_employees()
        .await
        .expect("fetch employees");
    let filtered = over_age_threshold(fetched);

    let ids: Vec<i64> = filtered.iter().map(|e| e.id.0).collect();
    assert_eq!(ids, vec![2, 3, 4, 5, 6]);

    let pager = Pager::new(filtered.len());
    assert_eq!(pager.total_pages(), 1);
    assert_eq!(pager.page_slice(&filtered).len(), 5);
    assert_eq!(pager.summary(), "Showing 1 to 5 of 5 employees");
}

#[tokio::test]
async fn http_error_status_surfaces_as_status_error() {
    let app = Router::new().route(
        "/api/GetEmployees",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let url = spawn_employees_server(app).await;

    let err = RosterClient::new(url)
        .fetch_employees()
        .await
        .expect_err("expected status failure");

    assert!(matches!(err, FetchError::Status { status } if status.as_u16() == 500));
}

#[tokio::test]
async fn non_json_body_surfaces_as_decode_error() {
    let app = Router::new().route("/api/GetEmployees", get(|| async { "employees offline" }));
    let url = spawn_employees_server(app).await;

    let err = RosterClient::new(url)
        .fetch_employees()
        .await
        .expect_err("expected decode failure");

    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn null_employees_field_surfaces_as_decode_error() {
    let app = Router::new().route(
        "/api/GetEmployees",
        get(|| async { Json(serde_json::json!({ "employees": null })) }),
    );
    let url = spawn_employees_server(app).await;

    let err = RosterClient::new(url)
        .fetch_employees()
        .await
        .expect_err("expected decode failure");

    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn missing_employees_field_surfaces_as_decode_error() {
    let app = Router::new().route(
        "/api/GetEmployees",
        get(|| async { Json(serde_json::json!({ "staff": [] })) }),
    );
    let url = spawn_employees_server(app).await;

    let err = RosterClient::new(url)
        .fetch_employees()
        .await
        .expect_err("expected decode failure");

    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_endpoint_surfaces_as_request_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let url: Url = "http://127.0.0.1:1/api/GetEmployees"
        .parse()
        .expect("unroutable url");

    let err = RosterClient::new(url)
        .fetch_employees()
        .await
        .expect_err("expected transport failure");

    assert!(matches!(err, FetchError::Request { .. }));
}
