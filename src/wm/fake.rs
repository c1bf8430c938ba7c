//! In-memory window system for unit tests

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use x11rb::protocol::xproto::Window;

use crate::error::{Result, XdoError};
use crate::wm::{WindowControl, WindowDirectory};

/// Scripted directory state
#[derive(Debug, Default)]
pub struct FakeDirectory {
    pub active: Option<Window>,
    pub children: Option<Vec<Window>>,
    pub classes: HashMap<Window, Vec<u8>>,
    pub desktops: HashMap<Window, u32>,
    pub current_desktop: Option<u32>,
}

impl FakeDirectory {
    pub fn new(active: Window, children: &[Window]) -> Self {
        Self {
            active: Some(active),
            children: Some(children.to_vec()),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, window: Window, class: &str) -> Self {
        self.classes.insert(window, class.as_bytes().to_vec());
        self
    }

    pub fn with_class_bytes(mut self, window: Window, class: &[u8]) -> Self {
        self.classes.insert(window, class.to_vec());
        self
    }

    pub fn with_desktop(mut self, window: Window, desktop: u32) -> Self {
        self.desktops.insert(window, desktop);
        self
    }

    pub fn with_current_desktop(mut self, desktop: u32) -> Self {
        self.current_desktop = Some(desktop);
        self
    }
}

impl WindowDirectory for FakeDirectory {
    fn active_window(&self) -> Result<Window> {
        self.active.ok_or(XdoError::NoActiveWindow)
    }

    fn root_children(&self) -> Result<Vec<Window>> {
        self.children
            .clone()
            .ok_or(XdoError::QueryTree(x11rb::errors::ConnectionError::UnknownError.into()))
    }

    fn class(&self, window: Window) -> Option<Vec<u8>> {
        self.classes.get(&window).cloned()
    }

    fn desktop(&self, window: Window) -> Option<u32> {
        self.desktops.get(&window).copied()
    }

    fn current_desktop(&self) -> Option<u32> {
        self.current_desktop
    }
}

/// A request recorded by [`RecordingControl`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Close(Window),
    Kill(Window),
    Hide(Window),
    Show(Window),
    Activate(Window),
    Key(Window, u8),
    Button(Window, u8),
}

/// Records every request; windows in `failing` return an error instead
#[derive(Debug, Default)]
pub struct RecordingControl {
    pub calls: RefCell<Vec<Call>>,
    pub failing: HashSet<Window>,
}

impl RecordingControl {
    pub fn failing_on(windows: &[Window]) -> Self {
        Self {
            failing: windows.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, window: Window, call: Call) -> Result<()> {
        if self.failing.contains(&window) {
            return Err(XdoError::Connection(
                x11rb::errors::ConnectionError::UnknownError,
            ));
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl WindowControl for RecordingControl {
    fn close(&self, window: Window) -> Result<()> {
        self.record(window, Call::Close(window))
    }

    fn kill(&self, window: Window) -> Result<()> {
        self.record(window, Call::Kill(window))
    }

    fn hide(&self, window: Window) -> Result<()> {
        self.record(window, Call::Hide(window))
    }

    fn show(&self, window: Window) -> Result<()> {
        self.record(window, Call::Show(window))
    }

    fn activate(&self, window: Window) -> Result<()> {
        self.record(window, Call::Activate(window))
    }

    fn key_press_release(&self, window: Window, code: u8) -> Result<()> {
        self.record(window, Call::Key(window, code))
    }

    fn button_press_release(&self, window: Window, code: u8) -> Result<()> {
        self.record(window, Call::Button(window, code))
    }
}
