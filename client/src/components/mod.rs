pub mod admin_layout;
pub mod cards;
pub mod footer;
pub mod form_field;
pub mod image_upload;
pub mod navbar;
pub mod route_guard;
pub mod status;
