//! Operation traits implemented by runtime clients

mod random;

pub use random::RandomOps;
