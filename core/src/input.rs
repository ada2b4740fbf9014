use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Reveal.
    Primary,
    /// Toggle flag.
    Secondary,
}

/// A button press at a pixel position on the drawing surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub button: PointerButton,
    pub x: f64,
    pub y: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputOutcome {
    /// Missed the board, hit a protected cell, or the game is over.
    Ignored,
    Marked(MarkOutcome),
    Revealed(RevealOutcome),
}

impl InputOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Ignored => false,
            Self::Marked(outcome) => outcome.has_update(),
            Self::Revealed(outcome) => outcome.has_update(),
        }
    }
}

/// Routes one pointer press to the cell under it.
pub fn handle_pointer(
    session: &mut GameSession,
    geometry: &BoardGeometry,
    event: PointerEvent,
) -> InputOutcome {
    if session.is_finished() {
        return InputOutcome::Ignored;
    }

    let Some(coords) = geometry.hit_test(session.board(), event.x, event.y) else {
        log::trace!("pointer miss at ({}, {})", event.x, event.y);
        return InputOutcome::Ignored;
    };

    let result = match event.button {
        PointerButton::Secondary => session.toggle_flag(coords).map(InputOutcome::Marked),
        PointerButton::Primary if session.cell_at(coords) == CellState::Flagged => {
            return InputOutcome::Ignored;
        }
        PointerButton::Primary => session.reveal(coords).map(InputOutcome::Revealed),
    };

    match result {
        Ok(outcome) => {
            log::trace!("{:?} at {:?}: {:?}", event.button, coords, outcome);
            outcome
        }
        Err(err) => {
            log::warn!("{:?} at {:?} rejected: {}", event.button, coords, err);
            InputOutcome::Ignored
        }
    }
}
