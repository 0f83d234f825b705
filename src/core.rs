pub mod action;
pub mod allocator;
pub mod config;
pub mod engine;
pub mod forecast;
pub mod interval;
pub mod schedule;
pub mod segmenter;

#[cfg(test)]
pub mod testing;
