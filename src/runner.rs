//! Single-threaded game loop
//!
//! One periodic task (the simulation tick) and one event-driven task (input)
//! share a single thread: pending input events are drained into a
//! [`TickInput`] between ticks, so input never interleaves with stepping.
//! Within a frame the draw callback runs before the step - objects are
//! rendered at their pre-tick pose.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use crate::consts::{SIM_DT, TICK_MS};
use crate::sim::{self, TickInput, Topology, Universe};

/// A discrete input command, produced by whatever reads the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Left,
    Right,
    Forward,
    Reverse,
    SetTopology(Topology),
    Reset,
    Quit,
}

/// Owns the universe and drives it at a fixed cadence
pub struct GameLoop {
    universe: Universe,
    events: Receiver<InputEvent>,
}

impl GameLoop {
    /// Build a loop around `universe`; the returned sender feeds it input
    pub fn new(universe: Universe) -> (Self, Sender<InputEvent>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                universe,
                events: rx,
            },
            tx,
        )
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Collect every queued event into one tick's input. `None` means quit.
    /// A disconnected sender is not a quit; the loop keeps simulating.
    fn drain_events(&mut self) -> Option<TickInput> {
        let mut input = TickInput::default();
        loop {
            match self.events.try_recv() {
                Ok(InputEvent::Left) => input.left = true,
                Ok(InputEvent::Right) => input.right = true,
                Ok(InputEvent::Forward) => input.forward = true,
                Ok(InputEvent::Reverse) => input.reverse = true,
                Ok(InputEvent::SetTopology(t)) => input.set_topology = Some(t),
                Ok(InputEvent::Reset) => input.reset = true,
                Ok(InputEvent::Quit) => return None,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return Some(input),
            }
        }
    }

    /// One frame: drain input, draw the pre-tick state, step.
    /// Returns `false` once a quit event has been seen.
    pub fn frame(&mut self, on_frame: &mut impl FnMut(&Universe)) -> bool {
        let Some(input) = self.drain_events() else {
            return false;
        };
        on_frame(&self.universe);
        sim::tick(&mut self.universe, &input, SIM_DT);
        true
    }

    /// Run until quit, sleeping out the remainder of each 50 ms tick
    pub fn run(mut self, mut on_frame: impl FnMut(&Universe)) {
        let interval = Duration::from_millis(TICK_MS);
        let mut next = Instant::now() + interval;
        while self.frame(&mut on_frame) {
            let now = Instant::now();
            if next > now {
                std::thread::sleep(next - now);
            }
            next += interval;
        }
        log::info!("Game loop stopped");
    }

    /// Run a bounded number of frames back to back (headless runs, tests)
    pub fn run_ticks(&mut self, ticks: u64, mut on_frame: impl FnMut(&Universe)) {
        for _ in 0..ticks {
            if !self.frame(&mut on_frame) {
                break;
            }
        }
    }
}
