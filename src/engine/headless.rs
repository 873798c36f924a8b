// src/engine/headless.rs

//! Headless engine implementation: accepts every call, logs, counts frames.
//!
//! Used by the demo binary and anywhere a host needs exercising without a
//! real engine linked in.

use anyhow::Result;
use log::{debug, info, trace};

use crate::engine::Engine;
use crate::input::PointerPhase;
use crate::keys::KeyCode;

#[derive(Debug, Default)]
pub struct HeadlessEngine {
    width_px: u32,
    height_px: u32,
    frames_rendered: u64,
    elapsed_seconds: f64,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered since init.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Last reported surface size, zero before the first resize.
    pub fn size_px(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    /// Total engine time accumulated from update deltas.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }
}

impl Engine for HeadlessEngine {
    fn init(&mut self) -> Result<()> {
        info!("HeadlessEngine: init");
        Ok(())
    }

    fn resize(&mut self, width_px: u32, height_px: u32) -> Result<()> {
        info!("HeadlessEngine: resize to {}x{} px", width_px, height_px);
        self.width_px = width_px;
        self.height_px = height_px;
        Ok(())
    }

    fn update(&mut self, delta_seconds: f32) -> Result<()> {
        trace!("HeadlessEngine: update dt={:.6}s", delta_seconds);
        self.elapsed_seconds += f64::from(delta_seconds);
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.frames_rendered += 1;
        trace!("HeadlessEngine: render frame {}", self.frames_rendered);
        Ok(())
    }

    fn pointer_event(&mut self, phase: PointerPhase, x: f32, y: f32) -> Result<()> {
        debug!("HeadlessEngine: pointer {:?} at ({}, {})", phase, x, y);
        Ok(())
    }

    fn key_down(&mut self, code: KeyCode, character: Option<char>) -> Result<()> {
        debug!("HeadlessEngine: key down {:?} char={:?}", code, character);
        Ok(())
    }

    fn key_up(&mut self, code: KeyCode) -> Result<()> {
        debug!("HeadlessEngine: key up {:?}", code);
        Ok(())
    }

    fn teardown(&mut self) -> Result<()> {
        info!(
            "HeadlessEngine: teardown after {} frames, {:.3}s engine time",
            self.frames_rendered, self.elapsed_seconds
        );
        Ok(())
    }
}
