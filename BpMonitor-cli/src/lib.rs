// BpMonitor-cli lib.rs
//
// Terminal presentation shell: command parsing and text rendering.

pub mod commands;
pub mod render;
