pub mod redis;
pub mod storage;
