//! Actions and their dispatch
//!
//! Each target gets its own request; a failure on one window is logged and
//! the batch moves on.

use std::fmt;

use tracing::{debug, info, warn};
use x11rb::protocol::xproto::Window;

use crate::error::Result;
use crate::wm::WindowControl;

/// What to do with each target window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Close,
    Kill,
    Hide,
    Show,
    Activate,
    /// Key press/release with a keycode
    KeyPress(u8),
    /// Button press/release with a button number
    ButtonPress(u8),
}

impl Action {
    /// Issue the action's request for one window
    pub fn apply<C: WindowControl + ?Sized>(&self, control: &C, window: Window) -> Result<()> {
        match *self {
            Action::Close => control.close(window),
            Action::Kill => control.kill(window),
            Action::Hide => control.hide(window),
            Action::Show => control.show(window),
            Action::Activate => control.activate(window),
            Action::KeyPress(code) => control.key_press_release(window, code),
            Action::ButtonPress(code) => control.button_press_release(window, code),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Close => write!(f, "close"),
            Action::Kill => write!(f, "kill"),
            Action::Hide => write!(f, "hide"),
            Action::Show => write!(f, "show"),
            Action::Activate => write!(f, "activate"),
            Action::KeyPress(code) => write!(f, "key {}", code),
            Action::ButtonPress(code) => write!(f, "button {}", code),
        }
    }
}

/// Outcome of a dispatch batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub applied: Vec<Window>,
    pub failed: Vec<Window>,
}

/// Apply `action` to every target in order, continuing past failures
pub fn dispatch_all<C: WindowControl + ?Sized>(
    action: Action,
    control: &C,
    targets: &[Window],
) -> DispatchReport {
    let mut report = DispatchReport::default();

    for &window in targets {
        match action.apply(control, window) {
            Ok(()) => {
                debug!("{}: window 0x{:x}", action, window);
                report.applied.push(window);
            }
            Err(e) => {
                warn!("Failed to {} window 0x{:x}: {}", action, window, e);
                report.failed.push(window);
            }
        }
    }

    info!(
        "{}: {} window(s) done, {} failed",
        action,
        report.applied.len(),
        report.failed.len()
    );
    report
}
