// The render loop: drain events, repaint the texture, present, repeat.
// Runs until the window closes or any key comes up.

use crate::backend::Backend;
use crate::churn::AllocationPressure;
use crate::draw::draw_cross;
use crate::error::Error;
use crate::input::InputState;
use crate::surface;
use crate::types::InputEvent;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Why the loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    KeyRelease,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated(StopReason),
}

/// Frames-per-second counter, reported to the log once per second.
struct FrameStats {
    last_report: Instant,
    frames_this_second: u32,
    total: u64,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            last_report: Instant::now(),
            frames_this_second: 0,
            total: 0,
        }
    }

    fn frame_done(&mut self) {
        self.frames_this_second += 1;
        self.total += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_report);
        if elapsed >= Duration::from_secs(1) {
            let fps = self.frames_this_second as f32 / elapsed.as_secs_f32();
            log::debug!("FPS: {:.1}", fps);
            self.frames_this_second = 0;
            self.last_report = now;
        }
    }
}

/// Drives one backend until a quit or key-release event arrives.
///
/// The loop is neither `Send` nor `Sync`: window and event APIs must stay on the
/// OS thread that created them, so the loop cannot be moved off the thread that
/// built it.
pub struct FrameLoop<B: Backend> {
    backend: B,
    input: InputState,
    churn: AllocationPressure,
    state: LoopState,
    stats: FrameStats,
    _pinned: PhantomData<*const ()>,
}

impl<B: Backend> FrameLoop<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            input: InputState::default(),
            churn: AllocationPressure::new(),
            state: LoopState::Running,
            stats: FrameStats::new(),
            _pinned: PhantomData,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.stats.total
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Step until terminated.
    pub fn run(&mut self) -> Result<StopReason, Error> {
        loop {
            if let LoopState::Terminated(reason) = self.step()? {
                log::info!("stopping after {} frames: {:?}", self.stats.total, reason);
                return Ok(reason);
            }
        }
    }

    /// One iteration: events, composite, present.
    ///
    /// Once terminated, further calls do nothing.
    pub fn step(&mut self) -> Result<LoopState, Error> {
        if self.state != LoopState::Running {
            return Ok(self.state);
        }

        // 1) Drain everything queued so the frame uses the freshest pointer.
        if let Some(reason) = self.pump_events() {
            self.state = LoopState::Terminated(reason);
            return Ok(self.state);
        }

        // 2) Repaint the texture inside the lock bracket.
        let (width, height) = self.backend.size();
        let (x0, y0) = self.input.position();
        let mut texture = surface::acquire(&mut self.backend, width, height)?;
        draw_cross(&mut texture.view(), x0, y0, &mut self.churn);
        texture.release();

        // 3) Put it on screen. Present may block until the next refresh.
        self.backend.clear()?;
        self.backend.copy()?;
        self.backend.present()?;

        self.stats.frame_done();
        Ok(self.state)
    }

    /// Apply all pending events. Returns a stop reason as soon as one is seen.
    fn pump_events(&mut self) -> Option<StopReason> {
        while let Some(event) = self.backend.poll_event() {
            match event {
                InputEvent::Quit => return Some(StopReason::Quit),
                InputEvent::KeyUp => return Some(StopReason::KeyRelease),
                InputEvent::PointerMotion { .. } => self.input.update(&event),
            }
        }
        None
    }
}
