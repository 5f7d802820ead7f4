pub mod announce;
pub mod harness;
pub mod signals;
pub mod wait;
