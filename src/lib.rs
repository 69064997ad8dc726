//! Acarnam - a text adventure on a 5x5 grid of zones.
//!
//! This module exposes the game logic for testing and for the binary.

pub mod character;
pub mod combat;
pub mod config;
pub mod constants;
pub mod errors;
pub mod items;
pub mod quests;
pub mod session;
pub mod world;
pub mod zones;
