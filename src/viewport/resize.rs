//! Aspect ratio tracking for the mounted camera

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::viewport::camera::MainCamera;

/// Last known window size and the aspect derived from it
#[derive(Resource, Debug, Default)]
pub struct ViewportController {
    width: f32,
    height: f32,
    aspect: f32,
    subscribed: bool,
}

impl ViewportController {
    /// Recompute the aspect from scratch; repeating a call changes nothing
    pub fn resize(&mut self, width: f32, height: f32) -> f32 {
        self.width = width;
        self.height = height;
        self.aspect = width / height.max(1.0);
        self.aspect
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn subscribe(&mut self) {
        self.subscribed = true;
    }

    pub fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }
}

/// One recomputation per resize notification, reading the window size anew each time
pub fn respond_to_resize(
    mut resized: MessageReader<WindowResized>,
    mut controller: ResMut<ViewportController>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut projections: Query<&mut Projection, With<MainCamera>>,
) {
    if !controller.is_subscribed() {
        resized.clear();
        return;
    }
    for _ in resized.read() {
        let Ok(window) = windows.single() else {
            return;
        };
        let aspect = controller.resize(window.width(), window.height());
        for mut projection in &mut projections {
            if let Projection::Perspective(perspective) = projection.as_mut() {
                perspective.aspect_ratio = aspect;
            }
        }
        let (width, height) = controller.size();
        debug!("[VIEWPORT] resized to {width}x{height}, aspect {aspect:.3}");
    }
}
