//! EWMH / ICCCM atoms
//!
//! Interned once per session. WM_CLASS, CARDINAL and WINDOW are predefined
//! and come from `AtomEnum` instead.

use x11rb::connection::Connection;
use x11rb::errors::ReplyError;
use x11rb::protocol::xproto::*;

/// Holds the interned atoms xdo needs
#[derive(Debug, Clone, Copy)]
pub struct Atoms {
    pub net_active_window: Atom,
    pub net_current_desktop: Atom,
    pub net_wm_desktop: Atom,
    pub wm_protocols: Atom,
    pub wm_delete_window: Atom,
}

impl Atoms {
    /// Intern all required atoms
    pub fn new<C: Connection>(conn: &C) -> Result<Self, ReplyError> {
        // Send every request before waiting on the first reply
        let net_active_window = conn.intern_atom(false, b"_NET_ACTIVE_WINDOW")?;
        let net_current_desktop = conn.intern_atom(false, b"_NET_CURRENT_DESKTOP")?;
        let net_wm_desktop = conn.intern_atom(false, b"_NET_WM_DESKTOP")?;
        let wm_protocols = conn.intern_atom(false, b"WM_PROTOCOLS")?;
        let wm_delete_window = conn.intern_atom(false, b"WM_DELETE_WINDOW")?;

        Ok(Self {
            net_active_window: net_active_window.reply()?.atom,
            net_current_desktop: net_current_desktop.reply()?.atom,
            net_wm_desktop: net_wm_desktop.reply()?.atom,
            wm_protocols: wm_protocols.reply()?.atom,
            wm_delete_window: wm_delete_window.reply()?.atom,
        })
    }
}
