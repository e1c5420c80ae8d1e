mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{assert_failure, empty_request, json_request, request_json, test_app};

#[tokio::test]
async fn create_customer_is_idempotent_by_name_ignoring_case() {
    let app = test_app();

    let (status, first) =
        request_json(app.clone(), empty_request("POST", "/customer?name=Vasily%20Demin")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first.get("id").and_then(Value::as_i64), Some(1));
    assert_eq!(
        first.get("name").and_then(Value::as_str),
        Some("Vasily Demin")
    );

    let (status, second) =
        request_json(app, empty_request("POST", "/customer?name=VASILY%20DEMIN")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second.get("id").and_then(Value::as_i64), Some(1));
    assert_eq!(
        second.get("name").and_then(Value::as_str),
        Some("Vasily Demin")
    );
}

#[tokio::test]
async fn read_customer_by_id_reports_missing_records() {
    let app = test_app();

    let (status, _) = request_json(app.clone(), empty_request("POST", "/customer?name=Alice")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, found) = request_json(app.clone(), empty_request("GET", "/customer/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.get("name").and_then(Value::as_str), Some("Alice"));

    let (status, problem) = request_json(app, empty_request("GET", "/customer/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_failure(&problem, "customer with id 42");
}

#[tokio::test]
async fn read_customers_by_name_or_page() {
    let app = test_app();

    for name in ["Alice", "Bob", "Carol"] {
        let (status, _) =
            request_json(app.clone(), empty_request("POST", &format!("/customer?name={name}"))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, by_name) = request_json(app.clone(), empty_request("GET", "/customer?name=bob")).await;
    assert_eq!(status, StatusCode::OK);
    let by_name = by_name.as_array().expect("name lookup returns a list");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].get("name").and_then(Value::as_str), Some("Bob"));

    let (status, problem) = request_json(app.clone(), empty_request("GET", "/customer?name=zzz")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_failure(&problem, "customer with name zzz");

    let (status, all) = request_json(app.clone(), empty_request("GET", "/customer")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(3));

    let (status, paged) =
        request_json(app.clone(), empty_request("GET", "/customer?page=1&items=2")).await;
    assert_eq!(status, StatusCode::OK);
    let paged = paged.as_array().expect("paged lookup returns a list");
    assert_eq!(paged.len(), 1);
    assert_eq!(paged[0].get("name").and_then(Value::as_str), Some("Carol"));

    // Out-of-range parameters fall back to the defaults.
    let (status, defaulted) =
        request_json(app, empty_request("GET", "/customer?page=-3&items=0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(defaulted.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn update_and_delete_customer() {
    let app = test_app();

    let (status, _) = request_json(app.clone(), empty_request("POST", "/customer?name=Alice")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, updated) = request_json(
        app.clone(),
        json_request("PUT", "/customer", json!({"id": 1, "name": "Alicia"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated.get("name").and_then(Value::as_str), Some("Alicia"));

    let (status, problem) = request_json(
        app.clone(),
        json_request("PUT", "/customer", json!({"id": 9, "name": "Nobody"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_failure(&problem, "customer with id 9");

    let (status, removed) = request_json(
        app.clone(),
        json_request("DELETE", "/customer", json!({"id": 1, "name": "Alicia"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed.get("name").and_then(Value::as_str), Some("Alicia"));

    let (status, problem) = request_json(
        app,
        json_request("DELETE", "/customer", json!({"id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_failure(&problem, "customer with id 1");
}

#[tokio::test]
async fn all_contacts_views_cover_both_kinds() {
    let app = test_app();

    let (status, _) = request_json(app.clone(), empty_request("POST", "/customer?name=Alice")).await;
    assert_eq!(status, StatusCode::OK);

    for email in ["a@x.com", "b@x.com"] {
        let (status, _) = request_json(
            app.clone(),
            json_request("POST", "/emails", json!({"customerId": 1, "email": email})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    for phone in ["+7-901-001", "+7-901-002"] {
        let (status, _) = request_json(
            app.clone(),
            json_request("POST", "/phones", json!({"customerId": 1, "phone": phone})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, contacts) =
        request_json(app.clone(), empty_request("GET", "/customer/1/allcontacts")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contacts.get("id").and_then(Value::as_i64), Some(1));
    assert_eq!(
        contacts.get("emails").and_then(Value::as_array).map(Vec::len),
        Some(2)
    );
    assert_eq!(
        contacts.get("phones").and_then(Value::as_array).map(Vec::len),
        Some(2)
    );

    // The type parameter is matched case-insensitively.
    let (status, emails) = request_json(
        app.clone(),
        empty_request("GET", "/customer/1/allcontactsbytype?type=EMAIL"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        emails,
        json!(["a@x.com", "b@x.com"]),
        "EMAIL type must return only emails"
    );

    let (status, problem) = request_json(
        app.clone(),
        empty_request("GET", "/customer/1/allcontactsbytype?type=fax"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure(&problem, "contact type fax is wrong");

    let (status, emails) =
        request_json(app.clone(), empty_request("GET", "/customer/1/allemails")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(emails.as_array().map(Vec::len), Some(2));

    let (status, problem) =
        request_json(app, empty_request("GET", "/customer/9/allcontacts")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_failure(&problem, "customer with id 9");
}

#[tokio::test]
async fn deleting_a_customer_leaves_its_contacts_in_place() {
    let app = test_app();

    let (status, customer) =
        request_json(app.clone(), empty_request("POST", "/customer?name=Vasily%20Demin")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(customer.get("id").and_then(Value::as_i64), Some(1));

    let (status, email) = request_json(
        app.clone(),
        json_request("POST", "/emails", json!({"customerId": 1, "email": "v@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(email.get("id").and_then(Value::as_i64), Some(1));
    assert_eq!(email.get("customerId").and_then(Value::as_i64), Some(1));

    let (status, _) = request_json(app.clone(), empty_request("POST", "/customer?name=Other")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, problem) = request_json(
        app.clone(),
        json_request("POST", "/emails", json!({"customerId": 2, "email": "v@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure(&problem, "email address v@x.com is in the database already");

    let (status, _) = request_json(
        app.clone(),
        json_request("DELETE", "/customer", json!({"id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // No cascade: the email row survives its owner.
    let (status, orphan) = request_json(app, empty_request("GET", "/emails/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orphan.get("email").and_then(Value::as_str), Some("v@x.com"));
}
