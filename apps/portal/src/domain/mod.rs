pub mod article;
pub mod shared;
pub mod social;
pub mod user;
