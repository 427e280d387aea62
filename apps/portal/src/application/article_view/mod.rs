pub mod dto;
pub mod gallery;
pub mod use_case;
