// crates/spilatch-core/src/signal/mod.rs

pub mod level;
pub mod digitize;
pub mod latch;

pub mod bitgroup;
