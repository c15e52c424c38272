use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use minorpick::config::ScoringConfig;
use minorpick::server::configure;
use serde_json::Value;

const FORM: &str = "application/x-www-form-urlencoded";

fn app_with(config: ScoringConfig) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(config)).configure(configure)
}

#[actix_web::test]
async fn test_submit_urlencoded_returns_ranked_top_5() {
    let app = test::init_service(app_with(ScoringConfig::default())).await;
    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header((header::CONTENT_TYPE, FORM))
        .set_payload("branch=CSE&branchLike=yes&dualBranch=None&Entrepreneurship=5&selectedLanguages=Python")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    // las claves deben venir en orden de ranking
    let pos = |name: &str| text.find(name).unwrap();
    assert!(pos("Entrepreneurship") < pos("Data Science"));
    assert!(pos("Data Science") < pos("Computational Economics"));

    let json: Value = serde_json::from_str(text).unwrap();
    assert_eq!(json["success"], Value::Bool(true));
    let top = json["top_5_minors"].as_object().unwrap();
    assert_eq!(top.len(), 5);
    assert_eq!(top["Entrepreneurship"].as_f64(), Some(40.0));
    assert_eq!(top["Data Science"].as_f64(), Some(21.43));
}

#[actix_web::test]
async fn test_legacy_submit_route_and_repeated_languages() {
    let app = test::init_service(app_with(ScoringConfig::default())).await;
    let req = test::TestRequest::post()
        .uri("/submit")
        .insert_header((header::CONTENT_TYPE, FORM))
        .set_payload("branch=ECE&branchLike=no&CSE=5&programmingLanguages=C&programmingLanguages=Java")
        .to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(json["success"], Value::Bool(true));
    // (5 + 5 + 5) / 50
    assert_eq!(json["top_5_minors"]["Computing and Intelligence"].as_f64(), Some(30.0));
}

#[actix_web::test]
async fn test_submit_multipart() {
    let app = test::init_service(app_with(ScoringConfig::default())).await;
    let boundary = "XBOUNDARYX";
    let mut body = String::new();
    for (name, value) in [
        ("branch", "CSE"),
        ("branchLike", "yes"),
        ("dualBranch", "None"),
        ("Entrepreneurship", "5"),
        ("programmingLanguages", "Python"),
    ] {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header((header::CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}")))
        .set_payload(body)
        .to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(json["success"], Value::Bool(true));
    assert_eq!(json["top_5_minors"]["Entrepreneurship"].as_f64(), Some(40.0));
    assert_eq!(json["top_5_minors"]["Data Science"].as_f64(), Some(21.43));
}

#[actix_web::test]
async fn test_multipart_without_boundary_is_failure_response() {
    let app = test::init_service(app_with(ScoringConfig::default())).await;
    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header((header::CONTENT_TYPE, "multipart/form-data"))
        .set_payload("branch=CSE")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["success"], Value::Bool(false));
    assert!(json["error"].as_str().unwrap().contains("multipart"));
    assert!(json.get("top_5_minors").is_none());
}

#[actix_web::test]
async fn test_oversized_body_is_rejected() {
    let app = test::init_service(app_with(ScoringConfig::default())).await;
    let payload = format!("branch=CSE&filler={}", "a".repeat(70 * 1024));
    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header((header::CONTENT_TYPE, FORM))
        .set_payload(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["success"], Value::Bool(false));
    assert_eq!(json["error"].as_str(), Some("request body exceeds 65536 bytes"));
    assert!(json.get("top_5_minors").is_none());
}

#[actix_web::test]
async fn test_empty_body_still_scores() {
    let app = test::init_service(app_with(ScoringConfig::default())).await;
    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header((header::CONTENT_TYPE, FORM))
        .to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(json["success"], Value::Bool(true));
    let top = json["top_5_minors"].as_object().unwrap();
    assert_eq!(top.len(), 5);
    assert!(top.values().all(|v| v.as_f64() == Some(0.0)));
}

#[actix_web::test]
async fn test_index_and_help() {
    let app = test::init_service(app_with(ScoringConfig { include_management: true, ..Default::default() })).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(&body[..], b"Form server is running.");

    let req = test::TestRequest::get().uri("/help").to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;
    let minors = json["minors"].as_array().unwrap();
    assert_eq!(minors.len(), 12);
    assert_eq!(json["branches"].as_array().unwrap().len(), 12);
    assert!(json["fields"].get("branchLike").is_some());
}
