pub mod domain;
pub mod memory;
pub mod repository;
pub mod seaorm;
pub mod service;
