//! Planner state manager for UI integration.
//!
//! Owns the plan, the viewport, the interaction controller, and the
//! wall editor for one editing session, and exposes the setter surface
//! the host UI calls from its form and pointer callbacks. Every model
//! edit marks the session modified; viewport navigation does not.

use std::path::{Path, PathBuf};

use anyhow::Result;
use plankit_core::error::EditorError;
use plankit_core::SessionConfig;

use crate::canvas::PlanCanvas;
use crate::interaction::InteractionController;
use crate::model::{Cota, FloorProfile, Node, Plan, SecondaryAxis, TertiaryAxis, Wall};
use crate::quantities::{self, PlanQuantities};
use crate::scene::Scene;
use crate::serialization::{self, PlanFile, ViewportState};
use crate::svg;
use crate::viewport::Viewport;
use crate::wall_editor::{WallEditor, WallSubtype};

/// Default building footprint for a fresh session, centimeters.
const DEFAULT_BUILDING_WIDTH_CM: f64 = 1000.0;
const DEFAULT_BUILDING_LENGTH_CM: f64 = 800.0;

/// Session state for the plan editor.
#[derive(Debug, Clone)]
pub struct PlannerState {
    pub plan: Plan,
    pub viewport: Viewport,
    pub interaction: InteractionController,
    pub wall_editor: WallEditor,
    canvas: PlanCanvas,
    pub plan_name: String,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl PlannerState {
    /// Creates a session with an empty default-sized plan.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_plan(
            config,
            Plan::new(DEFAULT_BUILDING_WIDTH_CM, DEFAULT_BUILDING_LENGTH_CM),
        )
    }

    /// Creates a session around an existing plan.
    pub fn with_plan(config: SessionConfig, plan: Plan) -> Self {
        let config = config.validated();
        Self {
            plan,
            viewport: Viewport::from_config(&config),
            interaction: InteractionController::new(),
            wall_editor: WallEditor::new(config.clone()),
            canvas: PlanCanvas::new(config),
            plan_name: "Untitled".to_string(),
            current_file_path: None,
            is_modified: false,
        }
    }

    /// The session configuration in use.
    pub fn config(&self) -> &SessionConfig {
        self.canvas.config()
    }

    /// Renders the current plan under the current viewport.
    pub fn render(&self) -> Scene {
        self.canvas.render(&self.plan, &self.viewport)
    }

    /// Renders the current plan as an SVG preview document.
    pub fn render_svg(&self) -> String {
        svg::scene_to_svg(
            &self.render(),
            self.viewport.canvas_width(),
            self.viewport.canvas_height(),
        )
    }

    /// Sets the building footprint.
    pub fn set_building_size(&mut self, width_cm: f64, length_cm: f64) {
        debug_assert!(
            width_cm.is_finite() && width_cm > 0.0,
            "building width must be positive and finite, got {width_cm}"
        );
        debug_assert!(
            length_cm.is_finite() && length_cm > 0.0,
            "building length must be positive and finite, got {length_cm}"
        );
        self.plan.width_cm = width_cm;
        self.plan.length_cm = length_cm;
        self.is_modified = true;
    }

    /// Replaces the floor profile table.
    pub fn set_floors(&mut self, floors: Vec<FloorProfile>) {
        self.plan.floors = floors;
        self.is_modified = true;
    }

    /// Selects the floor level whose profile sizes the columns.
    /// A level without a profile is refused; the selector UI only
    /// offers existing levels.
    pub fn set_selected_level(&mut self, level: u32) {
        if self.plan.uses_floor_profiles() && !self.plan.floors.iter().any(|p| p.level == level) {
            tracing::warn!("Ignoring unknown floor level {}", level);
            return;
        }
        self.plan.selected_level = level;
    }

    /// Adds an interior reference axis.
    pub fn add_secondary_axis(&mut self, axis: SecondaryAxis) {
        self.plan.secondary_axes.push(axis);
        self.is_modified = true;
    }

    /// Adds a free-form reference segment.
    pub fn add_tertiary_axis(&mut self, axis: TertiaryAxis) {
        self.plan.tertiary_axes.push(axis);
        self.is_modified = true;
    }

    /// Adds a column node. Returns its index.
    pub fn add_node(&mut self, node: Node) -> usize {
        self.plan.nodes.push(node);
        self.is_modified = true;
        self.plan.nodes.len() - 1
    }

    /// Adds a dimension annotation.
    pub fn add_cota(&mut self, cota: Cota) {
        self.plan.cotas.push(cota);
        self.is_modified = true;
    }

    /// Adds a wall. Returns its index.
    pub fn add_wall(&mut self, wall: Wall) -> usize {
        self.plan.walls.push(wall);
        self.is_modified = true;
        self.plan.walls.len() - 1
    }

    /// Toggles pan mode; idempotent under key repeat.
    pub fn set_pan_mode(&mut self, on: bool) {
        self.interaction.set_pan_mode(on);
    }

    /// Pointer pressed on the canvas.
    pub fn on_pointer_down(&mut self, pixel: (f64, f64)) {
        self.interaction.pointer_down(pixel);
    }

    /// Pointer moved on the canvas; applies any resulting pan.
    pub fn on_pointer_move(&mut self, pixel: (f64, f64)) {
        if let Some(command) = self.interaction.pointer_move(pixel) {
            command.apply(&mut self.viewport);
        }
    }

    /// Pointer released.
    pub fn on_pointer_up(&mut self) {
        self.interaction.pointer_up();
    }

    /// Wheel scrolled on the canvas; applies the anchored zoom.
    pub fn on_wheel(&mut self, pixel: (f64, f64), delta: f64) {
        if let Some(command) = self.interaction.wheel(pixel, delta) {
            command.apply(&mut self.viewport);
        }
    }

    /// Fits the building footprint into the viewport.
    pub fn fit_view(&mut self) {
        self.viewport
            .fit_to_view(0.0, 0.0, self.plan.width_cm, self.plan.length_cm);
    }

    /// Resets zoom and pan to the session defaults.
    pub fn reset_viewport(&mut self) {
        self.viewport = Viewport::from_config(self.config());
    }

    /// Opens the wall editor for a wall. Returns false when the index
    /// does not resolve.
    pub fn open_wall_editor(&mut self, wall_index: usize, subtype: WallSubtype) -> bool {
        match self.plan.walls.get(wall_index) {
            Some(wall) => {
                self.wall_editor.open(wall_index, wall, subtype);
                true
            }
            None => {
                tracing::warn!("No wall at index {}", wall_index);
                false
            }
        }
    }

    /// Saves the open wall editor session back into the plan.
    ///
    /// The wall list cannot shrink while the modal is open, so the
    /// saved index always resolves.
    pub fn save_wall_edit(&mut self) -> std::result::Result<(), EditorError> {
        let saved = self.wall_editor.save()?;
        self.plan.walls[saved.wall_index].kind = saved.kind;
        self.is_modified = true;
        Ok(())
    }

    /// Discards the open wall editor session.
    pub fn cancel_wall_edit(&mut self) {
        self.wall_editor.cancel();
    }

    /// Computes the quantity take-off for the pricing payload.
    pub fn quantities(&self) -> PlanQuantities {
        quantities::take_off(&self.plan)
    }

    /// Saves the plan document and clears the modified flag.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        let file = PlanFile::new(self.plan_name.clone(), self.plan.clone(), &self.viewport);
        serialization::save_plan(path, &file)?;
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Loads a plan document, replacing the session's plan and
    /// viewport state.
    pub fn load_from(&mut self, path: &Path) -> Result<()> {
        let file = serialization::load_plan(path)?;
        self.plan = file.plan;
        self.plan_name = file.metadata.name;
        let state: ViewportState = file.viewport;
        state.apply(&mut self.viewport);
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
