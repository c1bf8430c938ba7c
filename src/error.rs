//! Error types for xdo.
//!
//! Everything in [`XdoError`] that comes out of connection setup or target
//! resolution is fatal for the run. The same type is reused for per-window
//! dispatch failures, which the dispatcher only logs.

use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError};

#[derive(Error, Debug)]
pub enum XdoError {
    /// The display connection could not be opened.
    #[error("Can't open display")]
    Connect(#[from] ConnectError),

    /// The setup did not contain the requested screen.
    #[error("Can't acquire screen {0}")]
    NoScreen(usize),

    /// Interning one of the required atoms failed.
    #[error("Can't initialize EWMH atoms")]
    Atoms(#[source] ReplyError),

    /// `_NET_ACTIVE_WINDOW` is missing, unreadable or `None`.
    #[error("Can't determine the active window")]
    NoActiveWindow,

    /// `QueryTree` on the root window failed.
    #[error("Failed to query the window tree")]
    QueryTree(#[source] ReplyError),

    #[error("X11 connection error")]
    Connection(#[from] ConnectionError),

    #[error("X11 reply error")]
    Reply(#[from] ReplyError),
}

pub type Result<T> = std::result::Result<T, XdoError>;
