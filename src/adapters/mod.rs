pub mod cli;
pub mod dom;
pub mod page;
pub mod storage;
