//! User lookup and listing

pub mod get;
pub mod list;

pub use get::get_user;
pub use list::list_users;
