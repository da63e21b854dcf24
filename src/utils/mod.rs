//! Helpers shared by the server and the admin CLI.
//!
//! - [`extract_host`] - Source host and client address extraction from requests
//! - [`destination`] - Validation of destination hostnames before they are stored

pub mod destination;
pub mod extract_host;
