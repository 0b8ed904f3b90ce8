//! Console UI layer
//!
//! Everything that reads from or writes to the document model: panel,
//! sidebar, dropdowns, rendered displays, forms, notifications and the
//! event dispatcher tying them together.

pub mod actions;
pub mod console;
pub mod dom;
pub mod events;
pub mod forms;
pub mod host;
pub mod notifications;
pub mod panel;
pub mod render;
pub mod sidebar;
pub mod team_loader;

pub use actions::{ActionArgs, ActionHandler, ActionOutcome, ActionRegistry};
pub use console::AdminConsole;
pub use dom::{Document, Element, NodeId, SelectOption};
pub use events::{ConsoleEvent, UiEvent};
pub use forms::{Field, FieldKind, Form, FormKind, SubmitButton, SubmitOutcome};
pub use host::{Host, Navigation, RecordingHost};
pub use notifications::{Notification, NotificationCenter, Severity};
pub use panel::PanelController;
