pub mod labels;
pub mod latency;
pub mod storage;
