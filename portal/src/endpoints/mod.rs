//! Typed wrappers over the backend's REST routes.
//!
//! Each function takes any [`Backend`](crate::auth::Backend), so the web
//! client, the CLI and the tests share one definition of every route. Reads
//! return decoded payloads; writes return the raw envelope so callers can
//! show the backend's `message`.
//!
//! Routes marked authenticated go through the session's bearer token. A 401
//! on any of them ends the session (see [`crate::auth::AuthContext::send`]).

pub mod admins;
pub mod backups;
pub mod contacts;
pub mod dashboard;
pub mod events;
pub mod media;
pub mod messages;
pub mod news;

use crate::client::path_segment;

/// `base/<escaped id>`.
fn item_path(base: &str, id: &str) -> String {
    format!("{base}/{}", path_segment(id))
}
