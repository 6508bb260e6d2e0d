pub mod api;
pub mod config;
pub mod db;
pub mod geo;
pub mod model;
pub mod validation;
