pub mod entity;
pub mod registration;
pub mod repository;
