pub mod create;
pub mod id;
pub mod log;
pub mod store;
pub mod tracker;
