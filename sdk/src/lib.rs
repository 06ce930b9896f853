mod backend;
mod client_utils;
mod errors;
mod types;

pub mod http;
pub mod studypal_sdk_test;

pub use backend::StudyBackend;
pub use errors::*;
pub use types::*;
