//! File-backed user record store with an HTTP CRUD front end.
//!
//! An in-memory table of user records, mirrored to a pretty-printed JSON
//! snapshot file on every mutation. The durable write happens inside the
//! mutation's lock window (temp file + rename), so an acknowledged call
//! means memory and disk agree — and a failed write rolls the table back
//! instead of letting memory run ahead of the file.
//!
//! ```rust,no_run
//! use userstore::{UserData, UserStore};
//!
//! let store = UserStore::open("users.json");
//! let ada = store.create(UserData { name: "Ada".into(), ..Default::default() }).unwrap();
//! assert_eq!(store.get(ada.id).unwrap(), ada);
//! ```
//!
//! **Single-process only.** If multiple processes open the same file they
//! will clobber each other. Use advisory file locking or a real database for
//! multi-process access.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod persist;
pub mod serializer;
pub mod server;
pub mod store;
pub mod user;

pub use error::{Error, Result};
pub use store::{UserStore, UserStoreBuilder};
pub use user::{User, UserData};
