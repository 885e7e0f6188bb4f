use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::error::{PixelForgeError, Result};

/// Opaque identifier the host uses for one of its windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub u64);

impl From<u64> for WindowHandle {
    fn from(raw: u64) -> Self {
        WindowHandle(raw)
    }
}

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Maps live window handles to the controller that owns each window.
///
/// Entries are weak: the registry never keeps a controller alive. It lives
/// on the single UI thread, so it uses `Rc`/`RefCell` and no locking.
pub struct WindowInstanceRegistry<C> {
    entries: HashMap<WindowHandle, Weak<RefCell<C>>>,
}

impl<C> WindowInstanceRegistry<C> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Associate `handle` with `controller`.
    ///
    /// A handle that is already registered is a host bug: the entry is
    /// overwritten, logged, and `DuplicateHandle` is returned.
    pub fn register(&mut self, handle: WindowHandle, controller: &Rc<RefCell<C>>) -> Result<()> {
        let previous = self.entries.insert(handle, Rc::downgrade(controller));
        match previous {
            Some(old) if old.strong_count() > 0 => {
                warn!(%handle, "Window handle registered twice, replacing controller");
                Err(PixelForgeError::DuplicateHandle(handle.0))
            }
            _ => {
                debug!(%handle, "Window registered");
                Ok(())
            }
        }
    }

    /// Controller for `handle`, or `None` when unknown or already dropped.
    pub fn lookup(&self, handle: WindowHandle) -> Option<Rc<RefCell<C>>> {
        self.entries.get(&handle).and_then(Weak::upgrade)
    }

    /// Forget `handle`. Unknown handles are ignored.
    pub fn unregister(&mut self, handle: WindowHandle) {
        if self.entries.remove(&handle).is_some() {
            debug!(%handle, "Window unregistered");
        }
    }

    /// Drop entries whose controller no longer exists; returns how many.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, weak| weak.strong_count() > 0);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C> Default for WindowInstanceRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
