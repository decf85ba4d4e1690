//! Keyboard event types.
//!
//! The reorder engine consumes key presses targeted at drag handles. The
//! accept/ignore model mirrors browser event handling: an accepted event
//! has had its default behavior consumed (the engine acted on it), an
//! ignored event should continue to whatever the host does by default
//! (caret movement, scrolling, focus traversal).

/// Common data for all events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, consuming its default behavior.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, preserving its default behavior.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Keyboard key codes.
///
/// This is the subset of keys a reorderable list reacts to, plus
/// `Unknown` for everything else the host forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Enter,
    Tab,
    Backspace,
    Delete,

    // Whitespace
    Space,

    // Control
    Escape,

    // Unknown/unmapped key
    Unknown(u16),
}

impl Key {
    /// Check if this is an activation key (toggles the grab state).
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }

    /// Check if this is a directional key the move engine interprets.
    pub fn is_directional(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight
        )
    }
}

/// Keyboard modifiers held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt key held.
    pub alt: bool,
    /// Meta/Super/Command key held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers held.
    pub fn none() -> Self {
        Self::default()
    }

    /// Check if any modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }
}

/// Key press event, sent when a key is pressed on a handle.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            is_repeat: false,
        }
    }

    /// Mark this event as a key repeat.
    pub fn with_repeat(mut self) -> Self {
        self.is_repeat = true;
        self
    }
}
