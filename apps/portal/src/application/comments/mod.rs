pub mod edit;
pub mod use_case;
