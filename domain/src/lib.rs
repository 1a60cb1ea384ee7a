pub mod completion;
pub mod customer;
pub mod prompt;
pub mod session;
