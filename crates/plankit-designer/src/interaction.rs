//! Interaction state machine for canvas navigation.
//!
//! The canvas never mutates the viewport itself; pointer and wheel
//! events run through an explicit `idle <-> panning` state machine
//! that emits [`ViewportCommand`] values for the host to apply. Pan
//! mode is a session-global toggle driven by keyboard events; key
//! repeat makes those events fire rapidly, so the toggle is
//! idempotent.

use plankit_core::constants;

use crate::viewport::Viewport;

/// A viewport change requested by an interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportCommand {
    /// Translate by a pixel delta (content follows the pointer).
    PanBy { dx_px: f64, dy_px: f64 },
    /// Scale by `factor` while keeping the model point under `pixel`
    /// fixed on screen.
    ZoomAt { pixel: (f64, f64), factor: f64 },
}

impl ViewportCommand {
    /// Applies this command to a viewport.
    pub fn apply(&self, viewport: &mut Viewport) {
        match *self {
            ViewportCommand::PanBy { dx_px, dy_px } => viewport.pan_by(dx_px, dy_px),
            ViewportCommand::ZoomAt { pixel, factor } => {
                let anchor = viewport.pixel_to_world(pixel.0, pixel.1);
                let new_zoom = viewport.zoom() * factor;
                viewport.zoom_to_point(&anchor, new_zoom);
            }
        }
    }
}

/// Current pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    /// A pan drag is in progress; `last` is the pointer position the
    /// next move event will be measured against.
    Panning { last: (f64, f64) },
}

/// Explicit interaction state machine owned by the canvas host.
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: InteractionState,
    pan_mode: bool,
}

impl InteractionController {
    /// Creates a controller in the idle state with pan mode off.
    pub fn new() -> Self {
        Self {
            state: InteractionState::Idle,
            pan_mode: false,
        }
    }

    /// Current interaction state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// True while a pan drag is in progress.
    pub fn is_panning(&self) -> bool {
        matches!(self.state, InteractionState::Panning { .. })
    }

    /// True while the pan-mode modifier is held.
    pub fn pan_mode(&self) -> bool {
        self.pan_mode
    }

    /// Toggles pan mode. Idempotent: repeated key-down events have no
    /// additional effect. Releasing the modifier mid-drag ends the
    /// drag.
    pub fn set_pan_mode(&mut self, on: bool) {
        if self.pan_mode == on {
            return;
        }
        tracing::debug!("Pan mode {}", if on { "on" } else { "off" });
        self.pan_mode = on;
        if !on {
            self.state = InteractionState::Idle;
        }
    }

    /// Pointer pressed. Starts a pan drag when pan mode is held; a
    /// press during an active drag re-anchors it.
    pub fn pointer_down(&mut self, pixel: (f64, f64)) {
        if self.pan_mode {
            self.state = InteractionState::Panning { last: pixel };
        }
    }

    /// Pointer moved. While panning, emits the pixel delta since the
    /// previous event and re-anchors.
    pub fn pointer_move(&mut self, pixel: (f64, f64)) -> Option<ViewportCommand> {
        match self.state {
            InteractionState::Panning { last } => {
                self.state = InteractionState::Panning { last: pixel };
                Some(ViewportCommand::PanBy {
                    dx_px: pixel.0 - last.0,
                    dy_px: pixel.1 - last.1,
                })
            }
            InteractionState::Idle => None,
        }
    }

    /// Pointer released. Ends any active drag.
    pub fn pointer_up(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Wheel scrolled at a pointer position. Emits a zoom command
    /// anchored at the pointer; `delta` > 0 zooms in.
    pub fn wheel(&mut self, pixel: (f64, f64), delta: f64) -> Option<ViewportCommand> {
        if delta == 0.0 {
            return None;
        }
        let factor = if delta > 0.0 {
            constants::ZOOM_STEP
        } else {
            1.0 / constants::ZOOM_STEP
        };
        Some(ViewportCommand::ZoomAt { pixel, factor })
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}
