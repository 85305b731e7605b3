//! Motion-triggered food slicing game: falling shapes are sliced by a tracked
//! fingertip.  The library is the frame-driven game engine; the binary wires
//! it to a terminal.

pub mod audio;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod pose;
pub mod render;
pub mod trail;
