// crates/spilatch-core/src/config/mod.rs

pub mod defaults;
pub mod params;
