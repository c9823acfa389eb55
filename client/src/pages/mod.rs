pub mod admin;
pub mod contact;
pub mod event_detail;
pub mod events;
pub mod home;
pub mod news;
pub mod news_detail;
pub mod not_found;
pub mod partners;
