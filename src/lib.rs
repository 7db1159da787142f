pub mod config;
pub mod content;
pub mod db;
pub mod model;
pub mod seed;
pub mod sync;
