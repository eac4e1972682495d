//! Fixed-increment animation driver

use bevy::prelude::*;

use crate::scene::OrbitArena;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriverState {
    #[default]
    Idle,
    Running,
    /// Terminal for the current mount
    Stopped,
}

/// Frame counter that steps the orbit arena once per rendered frame
#[derive(Resource, Debug, Default)]
pub struct AnimationDriver {
    state: DriverState,
    frame: u64,
}

impl AnimationDriver {
    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Idle -> Running. Returns false from any other state.
    pub fn start(&mut self) -> bool {
        if self.state != DriverState::Idle {
            return false;
        }
        self.state = DriverState::Running;
        true
    }

    pub fn stop(&mut self) {
        self.state = DriverState::Stopped;
    }

    /// Back to Idle for the next mount
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance every record by one frame; no-op unless running
    pub fn step(&mut self, arena: &mut OrbitArena) -> bool {
        if self.state != DriverState::Running {
            return false;
        }
        arena.advance(1);
        self.frame += 1;
        true
    }
}

pub fn drive_animation(mut driver: ResMut<AnimationDriver>, mut arena: ResMut<OrbitArena>) {
    driver.step(&mut arena);
}
