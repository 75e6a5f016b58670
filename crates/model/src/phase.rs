//! Popup lifecycle
//!
//! Every popup moves through the same phases:
//!
//! ```text
//! Mounted ──show──▶ Visible ──submit──▶ Submitted ──finish──▶ Closed
//!                      │
//!                      └──cancel──▶ Cancelled ──finish──▶ Closed
//! ```
//!
//! A submitted popup is closed as soon as the request is issued; the host
//! does not wait for the response.

use thiserror::Error;

/// Phase of a popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogPhase {
    #[default]
    Mounted,
    Visible,
    Submitted,
    Cancelled,
    Closed,
}

/// Events that drive a popup between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogEvent {
    Show,
    Submit,
    Cancel,
    Finish,
}

/// A transition that is not allowed from the current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {event:?} a popup that is {from:?}")]
pub struct InvalidTransition {
    pub from: DialogPhase,
    pub event: DialogEvent,
}

impl DialogPhase {
    /// Apply an event, returning the next phase
    pub fn next(self, event: DialogEvent) -> Result<DialogPhase, InvalidTransition> {
        use DialogEvent::*;
        use DialogPhase::*;

        match (self, event) {
            (Mounted, Show) => Ok(Visible),
            (Visible, Submit) => Ok(Submitted),
            (Visible, Cancel) => Ok(Cancelled),
            (Submitted | Cancelled, Finish) => Ok(Closed),
            (from, event) => Err(InvalidTransition { from, event }),
        }
    }

    /// Apply an event in place; an invalid event leaves the phase unchanged
    pub fn advance(&mut self, event: DialogEvent) -> bool {
        match self.next(event) {
            Ok(next) => {
                *self = next;
                true
            }
            Err(_) => false,
        }
    }

    /// Whether the popup accepts input
    pub fn is_interactive(&self) -> bool {
        matches!(self, DialogPhase::Visible)
    }

    /// Whether the popup has reached its end
    pub fn is_closed(&self) -> bool {
        matches!(self, DialogPhase::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_path() {
        let phase = DialogPhase::default()
            .next(DialogEvent::Show)
            .and_then(|p| p.next(DialogEvent::Submit))
            .and_then(|p| p.next(DialogEvent::Finish))
            .unwrap();
        assert!(phase.is_closed());
    }

    #[test]
    fn test_cancel_path() {
        let visible = DialogPhase::Mounted.next(DialogEvent::Show).unwrap();
        assert!(visible.is_interactive());
        let cancelled = visible.next(DialogEvent::Cancel).unwrap();
        assert!(!cancelled.is_interactive());
        assert_eq!(cancelled.next(DialogEvent::Finish), Ok(DialogPhase::Closed));
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(DialogPhase::Mounted.next(DialogEvent::Submit).is_err());
        assert!(DialogPhase::Submitted.next(DialogEvent::Cancel).is_err());
        let err = DialogPhase::Closed.next(DialogEvent::Show).unwrap_err();
        assert_eq!(err.from, DialogPhase::Closed);
    }

    #[test]
    fn test_advance_ignores_invalid_events() {
        let mut phase = DialogPhase::Mounted;
        assert!(!phase.advance(DialogEvent::Finish));
        assert_eq!(phase, DialogPhase::Mounted);
        assert!(phase.advance(DialogEvent::Show));
        assert_eq!(phase, DialogPhase::Visible);
    }
}
