//! HTTP front end: Rocket routes over a shared [`UserStore`].

use crate::error::Error;
use crate::store::UserStore;
use crate::user::{User, UserData};
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, routes, Build, Rocket, State};
use std::path::PathBuf;
use std::sync::Arc;

#[get("/")]
fn health() -> &'static str {
    "userstore is up\n"
}

#[post("/user", format = "json", data = "<body>")]
fn create_user(
    store: &State<Arc<UserStore>>,
    body: Json<UserData>,
) -> Result<status::Created<Json<User>>, Status> {
    let user = store.create(body.into_inner()).map_err(error_status)?;
    let location = format!("/user/{}", user.id);
    Ok(status::Created::new(location).body(Json(user)))
}

#[get("/user/<id>")]
fn get_user(store: &State<Arc<UserStore>>, id: u64) -> Result<Json<User>, Status> {
    store.get(id).map(Json).map_err(error_status)
}

#[put("/user/<id>", format = "json", data = "<body>")]
fn update_user(
    store: &State<Arc<UserStore>>,
    id: u64,
    body: Json<UserData>,
) -> Result<Json<User>, Status> {
    store.update(id, body.into_inner()).map(Json).map_err(error_status)
}

#[delete("/user/<id>")]
fn delete_user(store: &State<Arc<UserStore>>, id: u64) -> Result<status::NoContent, Status> {
    store.delete(id).map(|()| status::NoContent).map_err(error_status)
}

#[post("/users", format = "json", data = "<ids>")]
fn lookup_users(store: &State<Arc<UserStore>>, ids: Json<Vec<u64>>) -> Json<Vec<User>> {
    Json(store.get_many(&ids))
}

/// A failed durable write is the server's fault, a missing record the
/// client's. Malformed ids and bodies never get this far — Rocket's routing
/// and the `Json` data guard reject those with their own client-error
/// statuses.
fn error_status(err: Error) -> Status {
    if err.is_persistence() {
        log::error!("durable write failed: {err}");
        return Status::InternalServerError;
    }
    match err {
        Error::NotFound(_) => Status::NotFound,
        _ => Status::InternalServerError,
    }
}

/// Everything the server needs to come up.
pub struct ServerConfig {
    /// Port to serve HTTP on.
    pub port: u16,
    /// Path of the JSON snapshot file backing the store.
    pub data_file: PathBuf,
}

/// Build an unlaunched Rocket with the store mounted. Tests drive the return
/// value through a local client; the binary launches it.
pub fn rocket(config: &ServerConfig) -> Rocket<Build> {
    let store = Arc::new(UserStore::open(&config.data_file));
    rocket::build()
        .configure(rocket::Config::figment().merge(("port", config.port)))
        .manage(store)
        .mount(
            "/",
            routes![
                health,
                create_user,
                get_user,
                update_user,
                delete_user,
                lookup_users,
            ],
        )
}
