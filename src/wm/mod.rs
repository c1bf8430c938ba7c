//! Window system collaborators
//!
//! The resolver and dispatcher only talk to the display through these two
//! traits. [`session::X11Session`] implements both over x11rb.

pub mod ewmh;
pub mod session;

#[cfg(test)]
pub mod fake;

use x11rb::protocol::xproto::Window;

use crate::error::Result;

/// Read side: everything target resolution needs to know about windows
pub trait WindowDirectory {
    /// The window the window manager reports as active
    fn active_window(&self) -> Result<Window>;

    /// Children of the root window, in server order
    fn root_children(&self) -> Result<Vec<Window>>;

    /// Class part of `WM_CLASS` as raw bytes, if the window has one.
    /// The property is Latin-1, so no decoding happens here.
    fn class(&self, window: Window) -> Option<Vec<u8>>;

    /// `_NET_WM_DESKTOP` of the window, if set
    fn desktop(&self, window: Window) -> Option<u32>;

    /// `_NET_CURRENT_DESKTOP` of the screen, if set
    fn current_desktop(&self) -> Option<u32>;
}

/// Write side: the requests behind each action
pub trait WindowControl {
    /// Ask the client to close the window via `WM_DELETE_WINDOW`
    fn close(&self, window: Window) -> Result<()>;

    /// Kill the client owning the window
    fn kill(&self, window: Window) -> Result<()>;

    fn hide(&self, window: Window) -> Result<()>;

    fn show(&self, window: Window) -> Result<()>;

    /// Ask the window manager to activate the window
    fn activate(&self, window: Window) -> Result<()>;

    /// Synthesize a key press/release pair
    fn key_press_release(&self, window: Window, code: u8) -> Result<()>;

    /// Synthesize a button press/release pair
    fn button_press_release(&self, window: Window, code: u8) -> Result<()>;
}
