//! JSON endpoints against a running server.

use axum::http::StatusCode;
use demo_web::config::AppConfig;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_param_endpoints() {
    let (addr, shutdown) = common::start_server(AppConfig::default()).await;
    let client = common::client();
    let base = format!("http://{addr}/api/params");

    let res = client.get(format!("{base}/foo?message=Hi")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({ "message": "Hi" }));

    let res = client.get(format!("{base}/foo")).send().await.unwrap();
    assert_eq!(res.json::<Value>().await.unwrap(), json!({ "message": "Hola que tal" }));

    let res = client.get(format!("{base}/foo?message=")).send().await.unwrap();
    assert_eq!(res.json::<Value>().await.unwrap(), json!({ "message": "Hola que tal" }));

    let res = client.get(format!("{base}/bar?text=Hi&code=%201")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({ "message": "Hi", "code": 1 })
    );

    let res = client.get(format!("{base}/request?message=&code=")).send().await.unwrap();
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({ "code": 10, "message": "" })
    );

    let res = client.get(format!("{base}/bar?text=Hi&code=42")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({ "message": "Hi", "code": 42 })
    );

    let res = client.get(format!("{base}/request?code=xyz")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({ "code": 10, "message": null })
    );

    let res = client
        .get(format!("{base}/request?code=7&message=hey"))
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({ "code": 7, "message": "hey" })
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_required_parameters_reject_before_shaping() {
    let (addr, shutdown) = common::start_server(AppConfig::default()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/api/params/bar?text=Hi&code=abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST.as_u16());
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "TYPE_MISMATCH");

    let res = client
        .get(format!("http://{addr}/api/params/bar?code=1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST.as_u16());
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "MISSING_PARAMETER");
    assert!(body["message"].as_str().unwrap().contains("'text'"));

    let res = client
        .get(format!("http://{addr}/api/params/bar?text=Hi&code="))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST.as_u16());
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "MISSING_PARAMETER");
    assert!(body["message"].as_str().unwrap().contains("'code'"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_static_user_endpoints() {
    let (addr, shutdown) = common::start_server(AppConfig::default()).await;
    let client = common::client();

    let details: Value = client
        .get(format!("http://{addr}/api/details"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let map: Value = client
        .get(format!("http://{addr}/api/details-map"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(details, map);
    assert_eq!(details["title"], "Hola Mundo Spring Boot");
    assert_eq!(details["user"]["lastname"], "Guzman");

    let list: Value = client
        .get(format!("http://{addr}/api/list"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Andres", "Pepe", "Jhon"]);

    shutdown.trigger();
}

#[tokio::test]
async fn test_products() {
    let (addr, shutdown) = common::start_server(AppConfig::default()).await;
    let client = common::client();

    let all: Value = client
        .get(format!("http://{addr}/api/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 4);

    let res = client.get(format!("http://{addr}/api/products/3")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.json::<Value>().await.unwrap()["id"], 3);

    let res = client.get(format!("http://{addr}/api/products/99")).send().await.unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(res.json::<Value>().await.unwrap()["error"], "NOT_FOUND");

    let res = client.get(format!("http://{addr}/api/products/abc")).send().await.unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "TYPE_MISMATCH");
    assert!(body["message"].as_str().unwrap().contains("'abc'"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let (addr, shutdown) = common::start_server(AppConfig::default()).await;
    let client = common::client();

    let res = client.get(format!("http://{addr}/api/list")).send().await.unwrap();
    let generated = res.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());

    let res = client
        .get(format!("http://{addr}/api/list"))
        .header("x-request-id", "client-supplied")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "client-supplied");

    shutdown.trigger();
}
