//! Binding for the host's back-navigation control.

use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::callback::Callback;
use crate::effect::EffectCell;
use crate::env::Environment;
use crate::host::{BackButtonBackend, WebApp, sync_click};

/// Declarative props for the host back button.
///
/// The component produces no visible output of its own: mounting it shows the
/// host widget and binds the click handler, and dropping the returned guard
/// hides the widget again.
///
/// ```ignore
/// let guard = back_button(|| navigator.pop()).mount(&env);
/// ```
#[derive(Debug)]
#[must_use]
pub struct BackButton {
    on_click: Callback,
}

impl BackButton {
    /// Creates the props with the required click handler.
    pub fn new(on_click: impl Into<Callback>) -> Self {
        Self {
            on_click: on_click.into(),
        }
    }

    /// Binds to the host back button.
    ///
    /// Shows the widget and registers the click handler. Returns `None`, and
    /// performs no host call of any kind, when the host or its back-button
    /// capability is unavailable — an ordinary state, not an error.
    pub fn mount(self, env: &Environment) -> Option<BackButtonGuard> {
        let Some(app) = WebApp::from_env(env) else {
            debug!("web-app host unavailable; back button left unbound");
            return None;
        };
        let Some(widget) = app.back_button() else {
            debug!("host exposes no back button; component is a no-op");
            return None;
        };

        let mut click = EffectCell::new();
        sync_click(&widget, &mut click, Some(self.on_click));
        widget.show();
        Some(BackButtonGuard { widget, click })
    }
}

/// Creates back-button props from a plain closure.
pub fn back_button(on_click: impl Fn() + 'static) -> BackButton {
    BackButton::new(on_click)
}

/// A live binding between [`BackButton`] props and the host widget.
///
/// Dropping the guard hides the widget and deregisters the current click
/// handler, in that order.
#[must_use = "dropping the guard hides the back button"]
pub struct BackButtonGuard {
    widget: Rc<dyn BackButtonBackend>,
    click: EffectCell<Option<Callback>>,
}

impl BackButtonGuard {
    /// Applies a re-render with fresh props.
    ///
    /// Only the click handler can change, and re-registration is gated on
    /// handler identity: an unchanged `Callback` causes no host calls.
    pub fn update(&mut self, next: BackButton) {
        sync_click(&self.widget, &mut self.click, Some(next.on_click));
    }
}

impl Drop for BackButtonGuard {
    fn drop(&mut self) {
        self.widget.hide();
        self.click.teardown();
    }
}

impl fmt::Debug for BackButtonGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackButtonGuard").finish_non_exhaustive()
    }
}
