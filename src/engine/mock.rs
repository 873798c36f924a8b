// src/engine/mock.rs

use anyhow::{anyhow, Result};

use crate::engine::Engine;
use crate::input::PointerPhase;
use crate::keys::KeyCode;

/// One recorded call across the engine boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Init,
    Resize { width_px: u32, height_px: u32 },
    Update { delta_seconds: f32 },
    Render,
    Pointer { phase: PointerPhase, x: f32, y: f32 },
    KeyDown { code: KeyCode, character: Option<char> },
    KeyUp { code: KeyCode },
    Teardown,
}

/// Names an engine operation that can be armed to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOp {
    Init,
    Resize,
    Update,
    Render,
    Pointer,
    KeyDown,
    KeyUp,
    Teardown,
}

/// Records every boundary call in order; optionally fails one operation.
#[derive(Debug, Default)]
pub struct MockEngine {
    calls: Vec<EngineCall>,
    fail_on: Option<EngineOp>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the mock so the named operation returns an error when next
    /// invoked. The call is still recorded.
    pub fn fail_on(&mut self, op: EngineOp) {
        self.fail_on = Some(op);
    }

    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    fn record(&mut self, call: EngineCall, op: EngineOp) -> Result<()> {
        self.calls.push(call);
        if self.fail_on == Some(op) {
            return Err(anyhow!("MockEngine: injected failure in {:?}", op));
        }
        Ok(())
    }
}

impl Engine for MockEngine {
    fn init(&mut self) -> Result<()> {
        self.record(EngineCall::Init, EngineOp::Init)
    }

    fn resize(&mut self, width_px: u32, height_px: u32) -> Result<()> {
        self.record(
            EngineCall::Resize {
                width_px,
                height_px,
            },
            EngineOp::Resize,
        )
    }

    fn update(&mut self, delta_seconds: f32) -> Result<()> {
        self.record(EngineCall::Update { delta_seconds }, EngineOp::Update)
    }

    fn render(&mut self) -> Result<()> {
        self.record(EngineCall::Render, EngineOp::Render)
    }

    fn pointer_event(&mut self, phase: PointerPhase, x: f32, y: f32) -> Result<()> {
        self.record(EngineCall::Pointer { phase, x, y }, EngineOp::Pointer)
    }

    fn key_down(&mut self, code: KeyCode, character: Option<char>) -> Result<()> {
        self.record(EngineCall::KeyDown { code, character }, EngineOp::KeyDown)
    }

    fn key_up(&mut self, code: KeyCode) -> Result<()> {
        self.record(EngineCall::KeyUp { code }, EngineOp::KeyUp)
    }

    fn teardown(&mut self) -> Result<()> {
        self.record(EngineCall::Teardown, EngineOp::Teardown)
    }
}
