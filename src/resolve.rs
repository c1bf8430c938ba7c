//! Target resolution
//!
//! Turns an invocation into the ordered list of windows to act on: either
//! the explicit window IDs, the active window alone, or the root's children
//! filtered by the selection criteria.

use tracing::{debug, warn};
use x11rb::protocol::xproto::Window;

use crate::action::Action;
use crate::criteria::{parse_window_id, Criteria};
use crate::error::Result;
use crate::wm::WindowDirectory;

/// One parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub action: Action,
    pub criteria: Criteria,
    /// Window ID tokens as given on the command line
    pub windows: Vec<String>,
}

/// Resolved targets plus the tokens that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targets {
    pub windows: Vec<Window>,
    pub invalid: Vec<String>,
}

/// Values the candidates are compared against
struct Reference {
    window: Option<Window>,
    class: Option<Vec<u8>>,
    desktop: Option<u32>,
}

/// Resolve the windows `request.action` applies to.
///
/// Fails only when the active window is needed but unknown, or when the
/// root window's children cannot be listed.
pub fn resolve<D: WindowDirectory + ?Sized>(directory: &D, request: &Request) -> Result<Targets> {
    if !request.windows.is_empty() {
        return Ok(parse_explicit(&request.windows));
    }

    if request.criteria.is_empty() {
        let active = directory.active_window()?;
        debug!("{}: no criteria, targeting active window 0x{:x}", request.action, active);
        return Ok(Targets {
            windows: vec![active],
            invalid: Vec::new(),
        });
    }

    let windows = discover(directory, &request.criteria)?;
    debug!(
        "{}: {} window(s) match {:?}",
        request.action,
        windows.len(),
        request.criteria
    );
    Ok(Targets {
        windows,
        invalid: Vec::new(),
    })
}

/// Keep the tokens that parse as window IDs, in order, warning on the rest
fn parse_explicit(tokens: &[String]) -> Targets {
    let mut targets = Targets::default();
    for token in tokens {
        match parse_window_id(token) {
            Some(window) => targets.windows.push(window),
            None => {
                warn!("Invalid window ID: '{}'", token);
                targets.invalid.push(token.clone());
            }
        }
    }
    targets
}

/// Filter the root's children by every active axis
fn discover<D: WindowDirectory + ?Sized>(directory: &D, criteria: &Criteria) -> Result<Vec<Window>> {
    let window = if criteria.needs_reference() {
        Some(directory.active_window()?)
    } else {
        None
    };

    let class = match window {
        Some(reference) if !criteria.class.is_ignored() => {
            Some(directory.class(reference).unwrap_or_default())
        }
        _ => None,
    };

    let desktop = if criteria.desktop.is_ignored() {
        None
    } else {
        let current = directory.current_desktop();
        if current.is_none() {
            warn!("Can't determine the current desktop, no window will match it");
        }
        current
    };

    let reference = Reference {
        window,
        class,
        desktop,
    };

    let candidates = directory.root_children()?;
    Ok(candidates
        .into_iter()
        .filter(|&candidate| accepts_candidate(directory, criteria, &reference, candidate))
        .collect())
}

/// Conjunction over the three axes. Lookups happen only for active axes and
/// stop at the first failing one.
fn accepts_candidate<D: WindowDirectory + ?Sized>(
    directory: &D,
    criteria: &Criteria,
    reference: &Reference,
    candidate: Window,
) -> bool {
    criteria
        .identity
        .accepts(reference.window.as_ref(), Some(&candidate))
        && (criteria.class.is_ignored()
            || criteria
                .class
                .accepts(reference.class.as_ref(), directory.class(candidate).as_ref()))
        && (criteria.desktop.is_ignored()
            || criteria
                .desktop
                .accepts(reference.desktop.as_ref(), directory.desktop(candidate).as_ref()))
}
