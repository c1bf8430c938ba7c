//! Session Module
//!
//! A single X11 connection with its root window and atoms. Implements the
//! read side and the write side of the window system for one invocation.

use tracing::{debug, info};
use x11rb::connection::Connection;
use x11rb::properties::WmClass;
use x11rb::protocol::xproto::{
    AtomEnum, BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT, ClientMessageEvent, ConnectionExt as _,
    EventMask, KEY_PRESS_EVENT, KEY_RELEASE_EVENT, Window,
};
use x11rb::protocol::xtest::ConnectionExt as _;
use x11rb::rust_connection::RustConnection;
use x11rb::CURRENT_TIME;

use crate::config::Config;
use crate::error::{Result, XdoError};
use crate::wm::ewmh::Atoms;
use crate::wm::{WindowControl, WindowDirectory};

/// Open connection to the display server
pub struct X11Session {
    conn: RustConnection,
    root: Window,
    atoms: Atoms,
    /// Source indication sent with `_NET_ACTIVE_WINDOW` requests
    activate_source: u32,
}

impl X11Session {
    /// Connect to the configured display (or `$DISPLAY`) and intern atoms
    pub fn connect(config: &Config) -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(config.display.as_deref())?;

        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .map(|screen| screen.root)
            .ok_or(XdoError::NoScreen(screen_num))?;

        let atoms = Atoms::new(&conn).map_err(XdoError::Atoms)?;

        info!("Connected to X server (screen {}, root 0x{:x})", screen_num, root);

        Ok(Self {
            conn,
            root,
            atoms,
            activate_source: config.activate.source,
        })
    }

    /// Flush pending requests. The connection closes when the session is dropped.
    pub fn flush(&self) -> Result<()> {
        self.conn.flush()?;
        Ok(())
    }

    /// Read the first CARDINAL of a property
    fn cardinal(&self, window: Window, property: u32) -> Option<u32> {
        let reply = self
            .conn
            .get_property(false, window, property, AtomEnum::CARDINAL, 0, 1)
            .ok()?
            .reply()
            .ok()?;
        reply.value32()?.next()
    }

    fn fake_input(&self, window: Window, event_type: u8, code: u8) -> Result<()> {
        self.conn
            .xtest_fake_input(event_type, code, CURRENT_TIME, window, 0, 0, 0)?
            .check()?;
        Ok(())
    }
}

impl WindowDirectory for X11Session {
    fn active_window(&self) -> Result<Window> {
        let reply = self
            .conn
            .get_property(
                false,
                self.root,
                self.atoms.net_active_window,
                AtomEnum::WINDOW,
                0,
                1,
            )
            .map_err(|_| XdoError::NoActiveWindow)?
            .reply()
            .map_err(|_| XdoError::NoActiveWindow)?;

        match reply.value32().and_then(|mut values| values.next()) {
            Some(window) if window != x11rb::NONE => {
                debug!("Active window: 0x{:x}", window);
                Ok(window)
            }
            _ => Err(XdoError::NoActiveWindow),
        }
    }

    fn root_children(&self) -> Result<Vec<Window>> {
        let tree = self
            .conn
            .query_tree(self.root)
            .map_err(|e| XdoError::QueryTree(e.into()))?
            .reply()
            .map_err(XdoError::QueryTree)?;
        debug!("Root window has {} children", tree.children.len());
        Ok(tree.children)
    }

    fn class(&self, window: Window) -> Option<Vec<u8>> {
        let class = WmClass::get(&self.conn, window).ok()?.reply().ok()??;
        Some(class.class().to_vec())
    }

    fn desktop(&self, window: Window) -> Option<u32> {
        self.cardinal(window, self.atoms.net_wm_desktop)
    }

    fn current_desktop(&self) -> Option<u32> {
        self.cardinal(self.root, self.atoms.net_current_desktop)
    }
}

impl WindowControl for X11Session {
    fn close(&self, window: Window) -> Result<()> {
        let event = ClientMessageEvent::new(
            32,
            window,
            self.atoms.wm_protocols,
            [self.atoms.wm_delete_window, CURRENT_TIME, 0, 0, 0],
        );
        self.conn
            .send_event(false, window, EventMask::NO_EVENT, event)?
            .check()?;
        Ok(())
    }

    fn kill(&self, window: Window) -> Result<()> {
        self.conn.kill_client(window)?.check()?;
        Ok(())
    }

    fn hide(&self, window: Window) -> Result<()> {
        self.conn.unmap_window(window)?.check()?;
        Ok(())
    }

    fn show(&self, window: Window) -> Result<()> {
        self.conn.map_window(window)?.check()?;
        Ok(())
    }

    fn activate(&self, window: Window) -> Result<()> {
        // Sent to the root so the window manager handles it
        let event = ClientMessageEvent::new(
            32,
            window,
            self.atoms.net_active_window,
            [self.activate_source, CURRENT_TIME, 0, 0, 0],
        );
        self.conn
            .send_event(
                false,
                self.root,
                EventMask::STRUCTURE_NOTIFY | EventMask::SUBSTRUCTURE_REDIRECT,
                event,
            )?
            .check()?;
        Ok(())
    }

    fn key_press_release(&self, window: Window, code: u8) -> Result<()> {
        self.fake_input(window, KEY_PRESS_EVENT, code)?;
        self.fake_input(window, KEY_RELEASE_EVENT, code)
    }

    fn button_press_release(&self, window: Window, code: u8) -> Result<()> {
        self.fake_input(window, BUTTON_PRESS_EVENT, code)?;
        self.fake_input(window, BUTTON_RELEASE_EVENT, code)
    }
}
