//! Browser networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` plugs `gloo-net` into the portal's `Transport` seam; `files`
//! turns picked files into multipart parts for image uploads.

pub mod files;
pub mod transport;
