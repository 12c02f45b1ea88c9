// src/lib.rs

//! An interactive portfolio terminal: a command interpreter with history,
//! scripted output sequences, a snake game, an ascii art panel and the
//! odxxt customization interface.
//!
//! [`term::Terminal`] holds all state and is driven purely by input events
//! and virtual time. [`orchestrator::AppOrchestrator`] connects it to a
//! [`platform::Driver`] and the wall clock.

pub mod ascii;
pub mod color;
pub mod command;
pub mod config;
pub mod digest;
pub mod keys;
pub mod odxxt;
pub mod orchestrator;
pub mod platform;
pub mod renderer;
pub mod sequence;
pub mod snake;
pub mod term;
pub mod timer;
