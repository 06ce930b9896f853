//! Test doubles for the SDK. The mock backend yields predefined results
//! and records the inputs it was called with.

mod backend;

pub use backend::*;
