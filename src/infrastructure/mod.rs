mod call_count;

pub mod media;
pub mod observability;
pub mod persistence;
pub mod speech;
pub mod storage;
pub mod translation;

pub use call_count::CallCount;
