//! Common types used across the site behaviors.
//!
//! # Categories
//!
//! - **Form Types** - contact form fields and the submit-time snapshot
//! - **Presentation Types** - status line and submit button state

use crate::config::{SENDING_LABEL, SENT_LABEL};

// =============================================================================
// Form Types
// =============================================================================

/// A contact form input the controller may focus or read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl Field {
    /// DOM id of the input.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email-input",
            Field::Message => "message",
        }
    }

    /// Form data key the value is posted under.
    pub fn form_key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// Field values read once when the visitor submits.
///
/// Values are kept as typed; validation trims, the payload does not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl FormSnapshot {
    /// Raw value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Trimmed value of a field. A byte order mark counts as whitespace.
    pub fn trimmed(&self, field: Field) -> &str {
        self.value(field).trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
    }
}

/// Multipart entries posted to the form endpoint, in form order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactPayload {
    entries: Vec<(String, String)>,
}

impl ContactPayload {
    /// Payload carrying whatever named controls a page form holds.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self { entries: entries.into_iter().collect() }
    }

    /// Entries as `(key, value)` pairs.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

impl From<FormSnapshot> for ContactPayload {
    fn from(snapshot: FormSnapshot) -> Self {
        let FormSnapshot { name, phone, email, message } = snapshot;
        Self {
            entries: vec![
                (Field::Name.form_key().to_string(), name),
                (Field::Phone.form_key().to_string(), phone),
                (Field::Email.form_key().to_string(), email),
                (Field::Message.form_key().to_string(), message),
            ],
        }
    }
}

// =============================================================================
// Presentation Types
// =============================================================================

/// Style tag of the status display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Idle,
    Error,
    Success,
}

impl StatusKind {
    /// Class attribute of the status element.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Idle => "form-status",
            StatusKind::Error => "form-status error",
            StatusKind::Success => "form-status success",
        }
    }
}

/// Text and style currently shown in the status display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusLine {
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }

    pub fn is_idle(&self) -> bool {
        self.kind == StatusKind::Idle && self.message.is_empty()
    }
}

/// Lifecycle of the submit button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Ready,
    Sending,
    Sent,
}

impl ButtonState {
    pub fn disabled(&self) -> bool {
        !matches!(self, ButtonState::Ready)
    }

    /// Only an in-flight request is busy; a sent form is merely disabled.
    pub fn busy(&self) -> bool {
        matches!(self, ButtonState::Sending)
    }

    /// Label shown on the button; `idle_label` is the page's own text.
    pub fn label<'a>(&self, idle_label: &'a str) -> &'a str {
        match self {
            ButtonState::Ready => idle_label,
            ButtonState::Sending => SENDING_LABEL,
            ButtonState::Sent => SENT_LABEL,
        }
    }

    /// Inline style marking the button busy or finished.
    pub fn style(&self) -> &'static str {
        match self {
            ButtonState::Ready => "",
            ButtonState::Sending => "opacity: 0.7; cursor: not-allowed;",
            ButtonState::Sent => "opacity: 0.7; cursor: not-allowed;",
        }
    }

    /// The same style as single properties, for buttons the page styles
    /// itself. An empty value removes the property.
    pub fn style_properties(&self) -> [(&'static str, &'static str); 2] {
        match self {
            ButtonState::Ready => [("opacity", ""), ("cursor", "")],
            ButtonState::Sending => [("opacity", "0.7"), ("cursor", "not-allowed")],
            ButtonState::Sent => [("opacity", "0.7"), ("cursor", "not-allowed")],
        }
    }
}
