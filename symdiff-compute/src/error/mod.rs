pub mod kind;

pub use symdiff_error::Error;
