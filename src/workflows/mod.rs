pub mod analysis;
pub mod format;
pub mod incidents;
pub mod news;
pub mod pipeline;
pub mod report;
pub mod storage;
