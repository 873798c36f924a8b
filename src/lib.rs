// src/lib.rs

//! Surface-lifecycle and input-routing host for an external terminal engine.
//!
//! This crate keeps a hardware-accelerated drawing surface alive across
//! suspend/resume/destroy, feeds the engine a steady stream of timed
//! update/render ticks with monotonic delta-time computation, and routes
//! normalized input (pointer gestures, physical keys, virtual panel taps)
//! into it through one narrow boundary: the [`engine::Engine`] trait.
//!
//! The engine itself (text shaping, screen buffer, PTY handling) lives
//! elsewhere. Bind [`surface::SurfaceHost`] (or [`surface::SharedSurfaceHost`]
//! when input and draw callbacks arrive on different threads) to the
//! platform's windowing callbacks and hand it an `Engine` implementation.

pub mod config;
pub mod engine;
pub mod input;
pub mod keys;
pub mod panel;
pub mod surface;

pub use engine::Engine;
pub use input::{InputEvent, KeyPhase, PointerPhase};
pub use keys::{KeyCode, VirtualKeyDescriptor, PANEL_KEYS};
pub use panel::VirtualKeyPanel;
pub use surface::{HostError, SharedSurfaceHost, SurfaceHost, SurfaceState};
