// crates/spilatch-cli/src/cmd/mod.rs

pub mod args;
pub mod decode;
pub mod inspect;
