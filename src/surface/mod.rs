// src/surface/mod.rs

//! Surface lifecycle state machine and the host that routes every platform
//! callback (lifecycle, draw tick, input) across the engine boundary.
//!
//! One `SurfaceHost` owns one session: the lifetime from first `attach()` to
//! process teardown. All engine calls funnel through it, which is what lets
//! it enforce the two global invariants: no input reaches the engine while
//! the surface is not active, and the `init` / `resize`-before-`render` /
//! `teardown`-last ordering of the boundary contract.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use log::{debug, info, trace, warn};

use crate::engine::Engine;
use crate::input::{InputEvent, InputNormalizer, KeyPhase};
use crate::keys::{key_event_pair, VirtualKeyDescriptor};

pub(crate) mod scheduler;

use scheduler::FrameScheduler;

/// Lifecycle state of the drawing surface. Exactly one per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// No surface has been attached yet; the engine is uninitialized.
    Uninitialized,
    /// Surface attached, ticks flowing, input forwarded.
    Active,
    /// Surface detached (platform pause); engine state is retained, ticks
    /// stopped, input dropped.
    Suspended,
    /// Terminal state. Unrecoverable within this session.
    Destroyed,
}

/// Errors surfaced by the host.
///
/// Lifecycle misuse and invalid geometry leave the session running; an
/// engine failure is fatal and the session is already Destroyed by the time
/// the caller sees it.
#[derive(Debug)]
pub enum HostError {
    /// `attach`/`detach`/`destroy` called from a state that does not permit
    /// it. The operation was a no-op.
    InvalidTransition {
        from: SurfaceState,
        op: &'static str,
    },
    /// A resize with non-positive dimensions. Dropped, not forwarded.
    InvalidGeometry { width: i32, height: i32 },
    /// A call into the engine failed. The session is Destroyed.
    EngineFailure(anyhow::Error),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::InvalidTransition { from, op } => {
                write!(f, "invalid lifecycle transition: {} from {:?}", op, from)
            }
            HostError::InvalidGeometry { width, height } => {
                write!(f, "invalid surface geometry {}x{}", width, height)
            }
            HostError::EngineFailure(e) => write!(f, "engine boundary failure: {}", e),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::EngineFailure(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Owns the drawing-surface lifecycle and routes ticks and input into the
/// engine.
///
/// All methods take `&mut self`; on a platform whose callbacks arrive on a
/// single rendering/UI thread that is the whole concurrency story. Platforms
/// that deliver input and draw callbacks on different threads wrap the host
/// in [`SharedSurfaceHost`].
pub struct SurfaceHost<E: Engine> {
    engine: E,
    state: SurfaceState,
    scheduler: FrameScheduler,
    normalizer: InputNormalizer,
}

impl<E: Engine> SurfaceHost<E> {
    /// Creates a host for a not-yet-attached surface. The engine is not
    /// touched until the first `attach`.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            state: SurfaceState::Uninitialized,
            scheduler: FrameScheduler::new(),
            normalizer: InputNormalizer::new(),
        }
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Read access to the engine, mainly for inspection in tests and demos.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The platform attached (created or re-exposed) the surface.
    ///
    /// From Uninitialized this performs the one-time engine init; from
    /// Suspended it resumes without re-initializing, restarting the frame
    /// clock so the first post-resume delta is near zero. Calling it from
    /// Active or Destroyed is a caller error: reported, no-op, session
    /// continues.
    pub fn attach(&mut self) -> Result<(), HostError> {
        self.attach_at(Instant::now())
    }

    /// `attach` with an explicit timestamp for the clock restart.
    pub fn attach_at(&mut self, now: Instant) -> Result<(), HostError> {
        match self.state {
            SurfaceState::Uninitialized => {
                if let Err(e) = self.engine.init() {
                    return Err(self.fatal(e));
                }
                self.state = SurfaceState::Active;
                self.scheduler.start(now);
                info!("SurfaceHost: attached, engine initialized, session active");
                Ok(())
            }
            SurfaceState::Suspended => {
                self.state = SurfaceState::Active;
                self.scheduler.start(now);
                info!("SurfaceHost: resumed from suspension");
                Ok(())
            }
            from @ (SurfaceState::Active | SurfaceState::Destroyed) => {
                warn!("SurfaceHost: attach() ignored in state {:?}", from);
                Err(HostError::InvalidTransition { from, op: "attach" })
            }
        }
    }

    /// The platform hid or paused the surface. Stops the tick stream
    /// synchronously; engine state is retained for a later resume.
    pub fn detach(&mut self) -> Result<(), HostError> {
        match self.state {
            SurfaceState::Active => {
                self.scheduler.stop();
                self.state = SurfaceState::Suspended;
                info!("SurfaceHost: detached, session suspended");
                Ok(())
            }
            from => {
                warn!("SurfaceHost: detach() ignored in state {:?}", from);
                Err(HostError::InvalidTransition { from, op: "detach" })
            }
        }
    }

    /// The platform reported new surface dimensions.
    ///
    /// Non-positive dimensions are rejected and logged. Valid sizes forward
    /// to the engine in Active and Suspended (the surface may be re-measured
    /// while paused); before init or after destruction they are dropped.
    pub fn on_size_changed(&mut self, width: i32, height: i32) -> Result<(), HostError> {
        if width <= 0 || height <= 0 {
            warn!(
                "SurfaceHost: rejecting resize to {}x{} (non-positive)",
                width, height
            );
            return Err(HostError::InvalidGeometry { width, height });
        }
        match self.state {
            SurfaceState::Active | SurfaceState::Suspended => {
                debug!("SurfaceHost: resize to {}x{} px", width, height);
                if let Err(e) = self.engine.resize(width as u32, height as u32) {
                    return Err(self.fatal(e));
                }
                Ok(())
            }
            state => {
                debug!(
                    "SurfaceHost: dropping resize to {}x{} in state {:?}",
                    width, height, state
                );
                Ok(())
            }
        }
    }

    /// One platform draw callback. While Active this yields exactly one
    /// `update(delta)` followed by one `render()`; in any other state it
    /// returns immediately.
    pub fn on_tick(&mut self) -> Result<(), HostError> {
        self.tick_at(Instant::now())
    }

    /// `on_tick` with an explicit timestamp, so tests control time.
    pub fn tick_at(&mut self, now: Instant) -> Result<(), HostError> {
        if self.state != SurfaceState::Active {
            return Ok(());
        }
        // The clock advances before the engine runs; a slow update cannot
        // inflate the next delta.
        let Some(delta_seconds) = self.scheduler.tick(now) else {
            return Ok(());
        };
        trace!("SurfaceHost: tick dt={:.6}s", delta_seconds);
        if let Err(e) = self.engine.update(delta_seconds) {
            return Err(self.fatal(e));
        }
        if let Err(e) = self.engine.render() {
            return Err(self.fatal(e));
        }
        Ok(())
    }

    /// Raw pointer signal from the platform. Unrecognized phases are dropped
    /// before the gate; recognized ones are forwarded while Active.
    pub fn on_pointer(&mut self, raw_phase: i32, x: f32, y: f32) -> Result<(), HostError> {
        match self.normalizer.normalize_pointer(raw_phase, x, y) {
            Some(event) => self.dispatch_input(event),
            None => Ok(()),
        }
    }

    /// Raw key-down from the platform. `raw_character` is the key's unicode
    /// value, 0 when it has none.
    pub fn on_key_down(&mut self, raw_code: i32, raw_character: u32) -> Result<(), HostError> {
        match self.normalizer.normalize_key_down(raw_code, raw_character) {
            Some(event) => self.dispatch_input(event),
            None => Ok(()),
        }
    }

    /// Raw key-up from the platform.
    pub fn on_key_up(&mut self, raw_code: i32) -> Result<(), HostError> {
        match self.normalizer.normalize_key_up(raw_code) {
            Some(event) => self.dispatch_input(event),
            None => Ok(()),
        }
    }

    /// A virtual panel key was tapped: synthesize and dispatch its
    /// key-down/key-up pair with nothing interleaved. Subject to the same
    /// active-only gate as physical input.
    pub fn on_virtual_key(&mut self, descriptor: &VirtualKeyDescriptor) -> Result<(), HostError> {
        let (down, up) = key_event_pair(descriptor);
        self.dispatch_input(down)?;
        self.dispatch_input(up)
    }

    /// Process teardown. From Active or Suspended this calls the engine's
    /// `teardown` exactly once; repeated calls are no-ops.
    pub fn destroy(&mut self) -> Result<(), HostError> {
        match self.state {
            SurfaceState::Active | SurfaceState::Suspended => {
                self.scheduler.stop();
                self.state = SurfaceState::Destroyed;
                info!("SurfaceHost: session destroyed, tearing down engine");
                self.engine.teardown().map_err(|e| {
                    warn!("SurfaceHost: engine teardown failed: {:#}", e);
                    HostError::EngineFailure(e)
                })
            }
            SurfaceState::Uninitialized => {
                // Engine was never initialized; nothing to tear down.
                self.state = SurfaceState::Destroyed;
                debug!("SurfaceHost: destroyed before first attach");
                Ok(())
            }
            SurfaceState::Destroyed => {
                debug!("SurfaceHost: destroy() on already-destroyed session");
                Ok(())
            }
        }
    }

    /// Forwards one normalized event, enforcing the active-only gate.
    fn dispatch_input(&mut self, event: InputEvent) -> Result<(), HostError> {
        if self.state != SurfaceState::Active {
            trace!(
                "SurfaceHost: dropping {:?} in state {:?}",
                event,
                self.state
            );
            return Ok(());
        }
        let result = match event {
            InputEvent::Pointer { phase, x, y } => self.engine.pointer_event(phase, x, y),
            InputEvent::Key {
                phase: KeyPhase::Down,
                code,
                character,
            } => self.engine.key_down(code, character),
            InputEvent::Key {
                phase: KeyPhase::Up,
                code,
                ..
            } => self.engine.key_up(code),
        };
        match result {
            Ok(()) => Ok(()),
            Err(e) => Err(self.fatal(e)),
        }
    }

    /// An engine call failed. The engine's internal state is undefined after
    /// a partial failure, so there is no recovery: the session becomes
    /// Destroyed, a final best-effort teardown is attempted if init had
    /// succeeded, and every later entry point is a dropped no-op.
    fn fatal(&mut self, error: anyhow::Error) -> HostError {
        warn!(
            "SurfaceHost: engine boundary failure, destroying session: {:#}",
            error
        );
        let initialized = matches!(
            self.state,
            SurfaceState::Active | SurfaceState::Suspended
        );
        self.scheduler.stop();
        self.state = SurfaceState::Destroyed;
        if initialized {
            if let Err(e) = self.engine.teardown() {
                warn!("SurfaceHost: teardown after failure also failed: {:#}", e);
            }
        }
        HostError::EngineFailure(error)
    }
}

/// A `SurfaceHost` behind the single mutual-exclusion gate required when the
/// platform delivers input callbacks on a different thread than render
/// callbacks. The engine is not assumed reentrant, so every entry point
/// takes the lock for the duration of the engine call.
pub struct SharedSurfaceHost<E: Engine> {
    inner: Arc<Mutex<SurfaceHost<E>>>,
}

impl<E: Engine> Clone for SharedSurfaceHost<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Engine> SharedSurfaceHost<E> {
    pub fn new(engine: E) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SurfaceHost::new(engine))),
        }
    }

    /// Runs `f` under the gate. A poisoned lock is recovered rather than
    /// propagated: the state machine stays consistent across a panicking
    /// engine call because every transition completes before the call.
    fn with_host<T>(&self, f: impl FnOnce(&mut SurfaceHost<E>) -> T) -> T {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn state(&self) -> SurfaceState {
        self.with_host(|h| h.state())
    }

    pub fn attach(&self) -> Result<(), HostError> {
        self.with_host(|h| h.attach())
    }

    pub fn detach(&self) -> Result<(), HostError> {
        self.with_host(|h| h.detach())
    }

    pub fn on_size_changed(&self, width: i32, height: i32) -> Result<(), HostError> {
        self.with_host(|h| h.on_size_changed(width, height))
    }

    pub fn on_tick(&self) -> Result<(), HostError> {
        self.with_host(|h| h.on_tick())
    }

    pub fn on_pointer(&self, raw_phase: i32, x: f32, y: f32) -> Result<(), HostError> {
        self.with_host(|h| h.on_pointer(raw_phase, x, y))
    }

    pub fn on_key_down(&self, raw_code: i32, raw_character: u32) -> Result<(), HostError> {
        self.with_host(|h| h.on_key_down(raw_code, raw_character))
    }

    pub fn on_key_up(&self, raw_code: i32) -> Result<(), HostError> {
        self.with_host(|h| h.on_key_up(raw_code))
    }

    pub fn on_virtual_key(&self, descriptor: &VirtualKeyDescriptor) -> Result<(), HostError> {
        self.with_host(|h| h.on_virtual_key(descriptor))
    }

    pub fn destroy(&self) -> Result<(), HostError> {
        self.with_host(|h| h.destroy())
    }
}
