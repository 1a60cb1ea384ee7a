pub mod config;
pub mod customer_loader;
pub mod openai_client;
