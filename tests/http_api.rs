use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use userstore::server::{self, ServerConfig};
use userstore::User;

fn client(name: &str) -> Client {
    let data_file = std::env::temp_dir().join(format!("userstore_http_{}.json", name));
    let _ = std::fs::remove_file(&data_file);
    let config = ServerConfig { port: 0, data_file };
    Client::tracked(server::rocket(&config)).expect("valid rocket instance")
}

fn body(name: &str) -> String {
    format!(r#"{{"name":"{name}","phone":5550100,"email":"{name}@example.com"}}"#)
}

#[test]
fn health_probe() {
    let client = client("health");
    let response = client.get("/").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string(), Some("userstore is up\n".into()));
}

#[test]
fn create_then_read_back() {
    let client = client("create_read");

    let response = client
        .post("/user")
        .header(ContentType::JSON)
        .body(body("ada"))
        .dispatch();
    assert_eq!(response.status(), Status::Created);
    let created: User = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.data.name, "ada");

    let response = client.get("/user/1").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let fetched: User = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn get_missing_is_404() {
    let client = client("get_missing");
    let response = client.get("/user/99").dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn update_preserves_path_id() {
    let client = client("update");
    let _ = client
        .post("/user")
        .header(ContentType::JSON)
        .body(body("ada"))
        .dispatch();

    let response = client
        .put("/user/1")
        .header(ContentType::JSON)
        .body(body("ada2"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let updated: User = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.data.name, "ada2");

    let response = client.put("/user/7").header(ContentType::JSON).body(body("x")).dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn delete_then_404() {
    let client = client("delete");
    let _ = client
        .post("/user")
        .header(ContentType::JSON)
        .body(body("ada"))
        .dispatch();

    let response = client.delete("/user/1").dispatch();
    assert_eq!(response.status(), Status::NoContent);

    let response = client.get("/user/1").dispatch();
    assert_eq!(response.status(), Status::NotFound);

    let response = client.delete("/user/1").dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn bulk_lookup_orders_and_omits() {
    let client = client("bulk");
    for name in ["a", "b", "c"] {
        let _ = client
            .post("/user")
            .header(ContentType::JSON)
            .body(body(name))
            .dispatch();
    }

    let response = client
        .post("/users")
        .header(ContentType::JSON)
        .body("[3, 99, 1]")
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let found: Vec<User> = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    let ids: Vec<u64> = found.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn malformed_body_is_a_client_error() {
    let client = client("bad_body");
    let response = client
        .post("/user")
        .header(ContentType::JSON)
        .body("{ not json")
        .dispatch();
    let code = response.status().code;
    assert!((400..500).contains(&code), "expected client error, got {code}");
}

#[test]
fn non_integer_id_is_a_client_error() {
    let client = client("bad_id");
    let response = client.get("/user/abc").dispatch();
    let code = response.status().code;
    assert!((400..500).contains(&code), "expected client error, got {code}");
}
