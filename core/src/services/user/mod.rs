//! User query service backing the user lookup, listing and health endpoints

mod service;


pub use service::{UserPage, UserService};
