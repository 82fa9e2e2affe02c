// Mock-server tests for the plain (non-multipart) client endpoints.
//
// Each test pins the request shape the service expects: method, path, the
// email/password/auth_key headers, the filter query parameter and the
// urlencoded form fields.

use petfriends::api::PetFriends;
use petfriends::api::models::{AuthKey, PetFilter, PetList};
use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PetFriends {
    PetFriends::with_base_url(server.uri()).expect("build client")
}

#[tokio::test]
async fn test_get_api_key_sends_credential_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/key"))
        .and(header("email", "qa@example.com"))
        .and(header("password", "hunter2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "k-123"})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .get_api_key("qa@example.com", "hunter2")
        .await
        .expect("request");

    assert_eq!(resp.status.as_u16(), 200);
    assert!(resp.body.get("key").is_some());

    let auth: AuthKey = resp.json().expect("auth key body");
    assert_eq!(auth.key, "k-123");
}

#[tokio::test]
async fn test_get_api_key_surfaces_rejection_with_text_body() {
    let server = MockServer::start().await;

    // The live service answers bare text, not JSON, on bad credentials.
    Mock::given(method("GET"))
        .and(path("/api/key"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string("This user wasn't found in database"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .get_api_key("qa@example.com", "wrong")
        .await
        .expect("request");

    assert_eq!(resp.status.as_u16(), 403);
    assert_eq!(
        resp.body,
        Value::String("This user wasn't found in database".to_string())
    );
}

#[tokio::test]
async fn test_list_pets_passes_filter_and_auth_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .and(query_param("filter", "my_pets"))
        .and(header("auth_key", "k-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pets": [
                {"id": "p-1", "name": "Roger", "animal_type": "rabbit", "age": "3"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .get_list_of_pets("k-123", PetFilter::MyPets)
        .await
        .expect("request");

    assert_eq!(resp.status.as_u16(), 200);
    let pets: PetList = resp.json().expect("pet list body");
    assert_eq!(pets.pets.len(), 1);
    assert!(pets.contains_id("p-1"));
}

#[tokio::test]
async fn test_list_pets_all_filter_is_empty_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .and(query_param("filter", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pets": []})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .get_list_of_pets("k-123", PetFilter::All)
        .await
        .expect("request");

    let pets: PetList = resp.json().expect("pet list body");
    assert!(pets.is_empty());
}

#[tokio::test]
async fn test_create_pet_simple_posts_form_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/create_pet_simple"))
        .and(header("auth_key", "k-123"))
        .and(body_string_contains("name=Roger"))
        .and(body_string_contains("animal_type=rabbit"))
        .and(body_string_contains("age=1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p-2", "name": "Roger", "animal_type": "rabbit", "age": "1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .create_pet_simple("k-123", "Roger", "rabbit", "1")
        .await
        .expect("request");

    assert_eq!(resp.status.as_u16(), 200);
    assert_eq!(resp.body["name"], "Roger");
}

#[tokio::test]
async fn test_update_pet_info_puts_form_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/pets/p-1"))
        .and(header("auth_key", "k-123"))
        .and(body_string_contains("name=Murzik"))
        .and(body_string_contains("age=5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p-1", "name": "Murzik", "animal_type": "cat", "age": "5"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .update_pet_info("k-123", "p-1", "Murzik", "cat", "5")
        .await
        .expect("request");

    assert_eq!(resp.status.as_u16(), 200);
    assert_eq!(resp.body["name"], "Murzik");
}

#[tokio::test]
async fn test_delete_pet_issues_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/pets/p-1"))
        .and(header("auth_key", "k-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .delete_pet("k-123", "p-1")
        .await
        .expect("request");

    assert_eq!(resp.status.as_u16(), 200);
}

#[tokio::test]
async fn test_server_error_status_is_returned_not_raised() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/pets/p-404"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    // A 5xx is data for the caller to assert on, never an Err.
    let resp = client_for(&server)
        .delete_pet("k-123", "p-404")
        .await
        .expect("request");

    assert_eq!(resp.status.as_u16(), 500);
    assert_eq!(resp.body, Value::String("internal error".to_string()));
}
