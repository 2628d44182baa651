//! Modal wall editor.
//!
//! One wall at a time: `closed -> open(session) -> save | cancel`.
//! Every field change re-derives the partition and a validity flag;
//! saving is refused while the partition is invalid, but the session
//! stays open so the user can correct it. Cancel discards the draft
//! without emitting anything.

use plankit_core::error::{EditorError, PartitionError};
use plankit_core::SessionConfig;

use crate::model::{
    DoorWall, DoorWindowWall, Point, Wall, WallEnd, WallKind, WindowCount, WindowWall,
};
use crate::scene::Scene;
use crate::viewport::Viewport;
use crate::walls::{self, Partition};

/// Which partition layout the user asked the modal to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSubtype {
    Door,
    Window,
    DoorWindow,
}

/// The finalized result emitted by a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedWall {
    pub wall_index: usize,
    pub kind: WallKind,
}

/// An open editing session.
#[derive(Debug, Clone)]
pub struct EditSession {
    wall_index: usize,
    available_cm: f64,
    draft: WallKind,
    validity: Result<(), PartitionError>,
}

impl EditSession {
    /// Index of the wall being edited.
    pub fn wall_index(&self) -> usize {
        self.wall_index
    }

    /// Length available to the partition, centimeters.
    pub fn available_cm(&self) -> f64 {
        self.available_cm
    }

    /// The draft partition fields as currently edited.
    pub fn draft(&self) -> &WallKind {
        &self.draft
    }

    /// True when the draft can be saved.
    pub fn is_valid(&self) -> bool {
        self.validity.is_ok()
    }

    /// Warning text to show while the draft is invalid.
    pub fn validation_message(&self) -> Option<String> {
        self.validity.as_ref().err().map(|e| e.to_string())
    }

    /// Sum of the draft's declared widths, centimeters.
    pub fn total_cm(&self) -> f64 {
        walls::declared_total_cm(&self.draft)
    }

    /// The draft's partition, for the live preview. Computed even
    /// while invalid.
    pub fn partition(&self) -> Partition {
        walls::partition(&self.draft, self.available_cm)
    }
}

#[derive(Debug, Clone)]
enum EditorState {
    Closed,
    Open(EditSession),
}

/// Modal editor for a single wall's internal partition.
#[derive(Debug, Clone)]
pub struct WallEditor {
    config: SessionConfig,
    state: EditorState,
}

impl WallEditor {
    /// Creates a closed editor with the given seed defaults.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config: config.validated(),
            state: EditorState::Closed,
        }
    }

    /// True while a session is open.
    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open(_))
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&EditSession> {
        match &self.state {
            EditorState::Open(session) => Some(session),
            EditorState::Closed => None,
        }
    }

    /// True when a session is open and its draft can be saved.
    pub fn is_valid(&self) -> bool {
        self.session().is_some_and(EditSession::is_valid)
    }

    /// Opens a session for a wall.
    ///
    /// Numeric fields seed from the wall when it already carries the
    /// requested subtype, else from the session defaults. An already
    /// open session is replaced.
    pub fn open(&mut self, wall_index: usize, wall: &Wall, subtype: WallSubtype) {
        let draft = match (&wall.kind, subtype) {
            (WallKind::Door(door), WallSubtype::Door) => WallKind::Door(door.clone()),
            (WallKind::Window(window), WallSubtype::Window) => WallKind::Window(window.clone()),
            (WallKind::DoorWindow(both), WallSubtype::DoorWindow) => {
                WallKind::DoorWindow(both.clone())
            }
            (_, subtype) => self.default_draft(subtype),
        };
        let available_cm = wall.available_length_cm();
        tracing::debug!(
            "Opening wall editor for wall {} ({:?}, {:.1} cm available)",
            wall_index,
            subtype,
            available_cm
        );
        let validity = walls::validate_partition(&draft, available_cm);
        self.state = EditorState::Open(EditSession {
            wall_index,
            available_cm,
            draft,
            validity,
        });
    }

    /// Discards the session without emitting anything.
    pub fn cancel(&mut self) {
        if self.is_open() {
            tracing::debug!("Wall editor cancelled");
        }
        self.state = EditorState::Closed;
    }

    /// Finalizes the session.
    ///
    /// Fails with the current partition error while the draft is
    /// invalid; the session stays open in that case. On success the
    /// editor returns to closed and emits the finalized wall subtype.
    pub fn save(&mut self) -> Result<SavedWall, EditorError> {
        let session = match &self.state {
            EditorState::Open(session) => session,
            EditorState::Closed => return Err(EditorError::NotOpen),
        };
        if let Err(error) = &session.validity {
            return Err(EditorError::InvalidPartition(error.clone()));
        }
        let saved = SavedWall {
            wall_index: session.wall_index,
            kind: session.draft.clone(),
        };
        tracing::debug!("Wall editor saved wall {}", saved.wall_index);
        self.state = EditorState::Closed;
        Ok(saved)
    }

    /// Sets the door width.
    pub fn set_door_width(&mut self, value_cm: f64) -> Result<(), EditorError> {
        self.update(|draft| match draft {
            WallKind::Door(door) => door.door_width_cm = value_cm,
            WallKind::DoorWindow(both) => both.door_width_cm = value_cm,
            _ => tracing::warn!("Ignoring door width on a wall without a door"),
        })
    }

    /// Sets the window width (both windows on a two-window wall).
    pub fn set_window_width(&mut self, value_cm: f64) -> Result<(), EditorError> {
        self.update(|draft| match draft {
            WallKind::Window(window) => window.window_width_cm = value_cm,
            WallKind::DoorWindow(both) => both.window_width_cm = value_cm,
            _ => tracing::warn!("Ignoring window width on a wall without a window"),
        })
    }

    /// Sets the window height.
    pub fn set_window_height(&mut self, value_cm: f64) -> Result<(), EditorError> {
        self.update(|draft| match draft {
            WallKind::Window(window) => window.window_height_cm = value_cm,
            WallKind::DoorWindow(both) => both.window_height_cm = value_cm,
            _ => tracing::warn!("Ignoring window height on a wall without a window"),
        })
    }

    /// Sets the window count on a window-only wall.
    pub fn set_window_count(&mut self, count: WindowCount) -> Result<(), EditorError> {
        self.update(|draft| match draft {
            WallKind::Window(window) => window.count = count,
            _ => tracing::warn!("Ignoring window count on a non-window wall"),
        })
    }

    /// Sets which end of a door+window wall carries the door.
    pub fn set_door_end(&mut self, end: WallEnd) -> Result<(), EditorError> {
        self.update(|draft| match draft {
            WallKind::DoorWindow(both) => both.door_end = end,
            _ => tracing::warn!("Ignoring door end on a wall without both openings"),
        })
    }

    /// Sets the first side section length.
    pub fn set_side_a(&mut self, value_cm: f64) -> Result<(), EditorError> {
        self.update(|draft| match draft {
            WallKind::Door(door) => door.side_a_cm = value_cm,
            WallKind::Window(window) => window.side_a_cm = value_cm,
            WallKind::DoorWindow(both) => both.side_a_cm = value_cm,
            WallKind::Solid => tracing::warn!("Ignoring side length on a solid wall"),
        })
    }

    /// Sets the second side section length.
    pub fn set_side_b(&mut self, value_cm: f64) -> Result<(), EditorError> {
        self.update(|draft| match draft {
            WallKind::Door(door) => door.side_b_cm = value_cm,
            WallKind::Window(window) => window.side_b_cm = value_cm,
            WallKind::DoorWindow(both) => both.side_b_cm = value_cm,
            WallKind::Solid => tracing::warn!("Ignoring side length on a solid wall"),
        })
    }

    /// Sets the trailing side section of a two-window wall.
    pub fn set_side_c(&mut self, value_cm: f64) -> Result<(), EditorError> {
        self.update(|draft| match draft {
            WallKind::Window(window) => window.side_c_cm = value_cm,
            _ => tracing::warn!("Ignoring trailing side on a wall without two windows"),
        })
    }

    /// Renders the draft partition to scale into a preview box.
    ///
    /// The preview lays the wall out horizontally and scales it to the
    /// box width, re-rendered on every field change.
    pub fn preview_scene(&self, width_px: f64, height_px: f64) -> Option<Scene> {
        const PREVIEW_MARGIN_PX: f64 = 20.0;
        let session = self.session()?;
        if session.available_cm <= 0.0 {
            return None;
        }

        let mut viewport = Viewport::new(width_px, height_px);
        let scale = (width_px - 2.0 * PREVIEW_MARGIN_PX) / session.available_cm;
        viewport.set_zoom(scale);
        viewport.set_pan(PREVIEW_MARGIN_PX, height_px / 2.0);

        let preview_wall = Wall {
            start: Point::new(0.0, 0.0),
            end: Point::new(session.available_cm, 0.0),
            kind: session.draft.clone(),
        };
        let mut scene = Scene::new();
        walls::render_wall(&mut scene, &preview_wall, &viewport);
        Some(scene)
    }

    fn update(&mut self, apply: impl FnOnce(&mut WallKind)) -> Result<(), EditorError> {
        match &mut self.state {
            EditorState::Open(session) => {
                apply(&mut session.draft);
                session.validity =
                    walls::validate_partition(&session.draft, session.available_cm);
                Ok(())
            }
            EditorState::Closed => Err(EditorError::NotOpen),
        }
    }

    fn default_draft(&self, subtype: WallSubtype) -> WallKind {
        match subtype {
            WallSubtype::Door => WallKind::Door(DoorWall {
                door_width_cm: self.config.door_width_cm,
                side_a_cm: 0.0,
                side_b_cm: 0.0,
            }),
            WallSubtype::Window => WallKind::Window(WindowWall {
                count: WindowCount::One,
                window_width_cm: self.config.window_width_cm,
                window_height_cm: self.config.window_height_cm,
                side_a_cm: 0.0,
                side_b_cm: 0.0,
                side_c_cm: 0.0,
            }),
            WallSubtype::DoorWindow => WallKind::DoorWindow(DoorWindowWall {
                door_width_cm: self.config.door_width_cm,
                door_end: WallEnd::Start,
                window_width_cm: self.config.window_width_cm,
                window_height_cm: self.config.window_height_cm,
                side_a_cm: 0.0,
                side_b_cm: 0.0,
            }),
        }
    }
}
