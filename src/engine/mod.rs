// src/engine/mod.rs

//! The engine boundary: the fixed contract through which the host drives the
//! external terminal/rendering engine.
//!
//! This is the only seam between host and engine. The host guarantees call
//! ordering (`init` precedes everything, `resize` precedes the first
//! `render` after a size change, `teardown` is the final call of the
//! session) and serializes all calls relative to each other. The engine is
//! assumed synchronous, non-blocking, and non-reentrant.

use anyhow::Result;

use crate::input::PointerPhase;
use crate::keys::KeyCode;

pub mod headless;
#[cfg(test)]
pub mod mock;

pub use headless::HeadlessEngine;

/// Contract the external engine must satisfy.
///
/// Every method returns `Result` because any failure on this boundary is
/// fatal to the session: the engine's internal state after a partial failure
/// is undefined, so the host has no recovery or retry policy. It transitions
/// to Destroyed and stops dispatching.
pub trait Engine {
    /// One-time engine initialization. Called exactly once per session,
    /// before any other method.
    fn init(&mut self) -> Result<()>;

    /// The drawing surface changed dimensions. Guaranteed to arrive before
    /// the first `render` after a size change; dimensions are positive.
    fn resize(&mut self, width_px: u32, height_px: u32) -> Result<()>;

    /// Advance engine time by `delta_seconds` (always `>= 0`). Paired with
    /// exactly one `render` per tick, update first.
    fn update(&mut self, delta_seconds: f32) -> Result<()>;

    /// Draw one frame of the current engine state.
    fn render(&mut self) -> Result<()>;

    /// A normalized pointer gesture at surface-local coordinates.
    fn pointer_event(&mut self, phase: PointerPhase, x: f32, y: f32) -> Result<()>;

    /// A key went down. `character` is the key's textual value when it has
    /// one; arrow keys and virtual panel keys pass `None`.
    fn key_down(&mut self, code: KeyCode, character: Option<char>) -> Result<()>;

    /// A key came up. Never carries a character.
    fn key_up(&mut self, code: KeyCode) -> Result<()>;

    /// Final call of the session. Invoked exactly once, on process teardown
    /// or after a fatal boundary failure (best-effort in the latter case).
    fn teardown(&mut self) -> Result<()>;
}
