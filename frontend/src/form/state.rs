//! Contact form state machine.
//!
//! ```text
//!            submit                 validation ok
//!   Idle ──────────▶ (validate) ─────────────────▶ Submitting
//!    ▲                   │ failure                  │      │
//!    │ edit              ▼                 rejected │      │ accepted
//!    └──────────── Failed ◀────────────── transport ┘      ▼
//!                                                          Sent (terminal)
//! ```
//!
//! The state owns what the page shows (status line, button) so the view is a
//! pure function of it. DOM side effects (focus, reset, scrolling) are
//! returned to the caller as decisions.

use crate::config::SUCCESS_MESSAGE;
use crate::error::SubmitError;
use crate::form::validate;
use crate::types::{ButtonState, ContactPayload, Field, FormSnapshot, StatusLine};

/// Where the form is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Failed,
    Sent,
}

/// Outcome of a submit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Validation passed; post this payload.
    Send(ContactPayload),
    /// Validation failed; focus this field.
    Blocked(Field),
    /// A request is in flight or the form was already sent.
    Busy,
}

/// Outcome of a finished request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    /// Accepted; the inputs should be cleared.
    Sent,
    /// Rejected or failed; the visitor may try again.
    Failed,
}

/// Everything the contact form displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    phase: Phase,
    status: StatusLine,
    button: ButtonState,
    idle_label: String,
}

impl FormState {
    pub fn new(idle_label: impl Into<String>) -> Self {
        Self {
            phase: Phase::Idle,
            status: StatusLine::default(),
            button: ButtonState::Ready,
            idle_label: idle_label.into(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn button(&self) -> ButtonState {
        self.button
    }

    /// Current button text.
    pub fn button_label(&self) -> &str {
        self.button.label(&self.idle_label)
    }

    /// Handle a submit event with the values read from the inputs.
    pub fn begin_submit(&mut self, snapshot: FormSnapshot) -> SubmitDecision {
        if matches!(self.phase, Phase::Submitting | Phase::Sent) {
            return SubmitDecision::Busy;
        }

        self.status = StatusLine::default();

        if let Err(err) = validate(&snapshot) {
            self.phase = Phase::Failed;
            self.status = StatusLine::error(err.to_string());
            return SubmitDecision::Blocked(err.field());
        }

        self.phase = Phase::Submitting;
        self.button = ButtonState::Sending;
        SubmitDecision::Send(snapshot.into())
    }

    /// Apply the result of the request started by [`FormState::begin_submit`].
    pub fn settle(&mut self, result: Result<(), SubmitError>) -> Settled {
        match result {
            Ok(()) => {
                self.phase = Phase::Sent;
                self.status = StatusLine::success(SUCCESS_MESSAGE);
                self.button = ButtonState::Sent;
                Settled::Sent
            }
            Err(err) => {
                self.phase = Phase::Failed;
                self.status = StatusLine::error(err.to_string());
                self.button = ButtonState::Ready;
                Settled::Failed
            }
        }
    }

    /// The visitor typed into a tracked input. Returns `true` if an error
    /// was cleared.
    pub fn on_edit(&mut self) -> bool {
        if !self.status.is_error() {
            return false;
        }
        self.status = StatusLine::default();
        if self.phase == Phase::Failed {
            self.phase = Phase::Idle;
        }
        true
    }
}
