//! Remote CMS API adapters.

pub mod client;
pub mod dto;
pub mod errors;

pub use client::ApiClient;
