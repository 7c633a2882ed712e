use rocket::Build;
use rocket::Rocket;
#[allow(unused_imports)]
use rocket::http::{ContentType, Header, Status};
#[allow(unused_imports)]
use rocket::local::blocking::Client;

fn create_test_rocket() -> Rocket<Build> {
    crate::rocket()
}

#[test]
fn test_index_endpoint() {
    let client = Client::tracked(create_test_rocket()).expect("Failed to create client");
    let response = client.get("/api").dispatch();

    assert_eq!(response.status(), Status::Ok);

    let body = response
        .into_string()
        .expect("Response body should be readable");
    let json: serde_json::Value =
        serde_json::from_str(&body).expect("Response should be valid JSON");

    assert_eq!(json["status"], "Ok");
    assert_eq!(json["data"], serde_json::Value::Array(vec![]));
}

#[test]
fn test_unknown_trainer_is_a_not_found_result() {
    let client = Client::tracked(create_test_rocket()).expect("Failed to create client");
    let response = client.get("/api/trainer_pokemons/nobody").dispatch();

    // not-found is an explicit result in the envelope, not a server fault
    assert_eq!(response.status(), Status::Ok);

    let body = response
        .into_string()
        .expect("Response body should be readable");
    let json: serde_json::Value =
        serde_json::from_str(&body).expect("Response should be valid JSON");

    let not_found = json["status"]["NotFound"]
        .as_str()
        .expect("status should be NotFound");
    assert!(not_found.contains("nobody"));
}

#[test]
fn test_trainers_listing_starts_empty() {
    let client = Client::tracked(create_test_rocket()).expect("Failed to create client");
    let response = client.get("/api/trainers").dispatch();

    assert_eq!(response.status(), Status::Ok);

    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(json["status"], "Ok");
    assert!(
        json["data"]
            .as_object()
            .expect("roster should serialize as a map")
            .is_empty()
    );
}

#[test]
fn test_catch_rejects_bad_trainer_names() {
    let client = Client::tracked(create_test_rocket()).expect("Failed to create client");

    // validation fires before any species lookup happens
    let response = client
        .post("/api/trainer_pokemons/this-trainer-name-is-way-too-long-to-accept/pikachu")
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(json["status"]["Error"], "Name is too long");
}

#[test]
fn test_set_level_rejects_level_zero() {
    let client = Client::tracked(create_test_rocket()).expect("Failed to create client");
    let response = client.post("/api/trainer_pokemons/ash/level/0").dispatch();
    assert_eq!(response.status(), Status::Ok);

    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(json["status"]["Error"], "Level must be at least 1");
}

#[test]
fn test_use_move_requires_registered_pokemon() {
    let client = Client::tracked(create_test_rocket()).expect("Failed to create client");

    let response = client
        .post("/api/use_move/ash/gary")
        .header(ContentType::JSON)
        .body(r#"{"name":"tackle","power":40,"kind":"damage"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    let error = json["status"]["Error"]
        .as_str()
        .expect("status should be Error");
    assert!(error.contains("has no pokemon"));
}

#[test]
fn test_cors_headers() {
    let client = Client::tracked(create_test_rocket()).expect("Failed to create client");

    let response = client
        .get("/api")
        .header(Header::new("Origin", "http://localhost:3000"))
        .dispatch();

    assert_eq!(response.status(), Status::Ok);

    let headers = response.headers();
    assert!(
        headers.contains("Access-Control-Allow-Origin"),
        "Response should contain Access-Control-Allow-Origin header"
    );
    assert!(
        headers.contains("Access-Control-Allow-Credentials"),
        "Response should contain Access-Control-Allow-Credentials header"
    );
}

#[test]
fn test_preflight_request() {
    let client = Client::tracked(create_test_rocket()).expect("Failed to create client");
    let response = client
        .options("/api")
        .header(Header::new("Origin", "http://localhost:3000"))
        .header(Header::new("Access-Control-Request-Method", "GET"))
        .dispatch();

    // Both 200 OK and 204 No Content are valid for preflight responses
    let status = response.status();
    assert!(
        status == Status::Ok || status == Status::NoContent,
        "Expected status 200 OK or 204 No Content, got {}",
        status
    );

    let headers = response.headers();
    assert!(headers.contains("Access-Control-Allow-Origin"));
    assert!(headers.contains("Access-Control-Allow-Methods"));

    let allowed_methods = headers
        .get_one("Access-Control-Allow-Methods")
        .expect("Should have allowed methods header");
    assert!(allowed_methods.contains("GET"));
    assert!(allowed_methods.contains("POST"));
    assert!(allowed_methods.contains("DELETE"));
}

#[test]
fn test_invalid_method() {
    let client = Client::tracked(create_test_rocket()).expect("Failed to create client");
    let response = client.put("/api").dispatch();

    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn test_nonexistent_endpoint() {
    let client = Client::tracked(create_test_rocket()).expect("Failed to create client");
    let response = client.get("/api/nonexistent").dispatch();

    assert_eq!(response.status(), Status::NotFound);
}
