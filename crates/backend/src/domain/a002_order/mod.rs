pub mod lines;
pub mod repository;
pub mod service;
