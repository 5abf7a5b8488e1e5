pub mod registry;
pub mod time;
pub mod timeline;
