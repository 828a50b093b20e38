//! User lookup service

mod service;


pub use service::UserService;
