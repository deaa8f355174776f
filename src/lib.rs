pub mod app;
pub mod config;
pub mod expenses;
pub mod extract;
pub mod response;
pub mod state;
pub mod store;
pub mod timestamp;
pub mod users;
