//! Back-office screens. Everything except `login` renders behind the route
//! guard inside the admin layout.

pub mod admins;
pub mod backups;
pub mod contacts;
pub mod dashboard;
pub mod event_form;
pub mod events;
pub mod login;
pub mod messages;
pub mod news;
pub mod news_form;
pub mod profile;
