use serde::{Deserialize, Serialize};

/// Delay between inserting a toast and showing it, so the entrance
/// transition has a starting frame.
pub const SHOW_DELAY_MS: u32 = 100;
/// Delay between hiding a toast and removing its node.
pub const REMOVE_DELAY_MS: u32 = 300;
pub const DEFAULT_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted, `show` class not yet applied.
    Entering,
    Shown,
    /// `show` removed; the node goes away after [`REMOVE_DELAY_MS`].
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn new(id: u64, message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id,
            message: message.into(),
            kind,
            duration_ms: DEFAULT_DURATION_MS,
            phase: ToastPhase::Entering,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.phase == ToastPhase::Shown
    }
}

/// Toasts currently in the container, oldest first. No queue and no
/// de-duplication: identical toasts simply stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Adds a toast in the entering phase.
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(Toast {
            phase: ToastPhase::Entering,
            ..toast
        });
    }

    pub fn show(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            if toast.phase == ToastPhase::Entering {
                toast.phase = ToastPhase::Shown;
            }
        }
    }

    /// Starts the removal path. Returns `false` if the toast is already
    /// leaving or gone, in which case the caller must not schedule removal.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase != ToastPhase::Leaving => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
