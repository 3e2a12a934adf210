pub mod catalog;
pub mod config;
pub mod occasion;
pub mod recommend;
pub mod style;
pub mod user;
