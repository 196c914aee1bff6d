pub mod fetch;
pub mod prepare;
