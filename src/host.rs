//! The host capability seam.
//!
//! A web-app host (the embedding container) owns a set of chrome widgets that
//! this crate never renders itself: it only drives them through imperative
//! calls. The traits here describe exactly that surface, so a real bridge and
//! a recording test double are interchangeable behind [`WebApp`].
//!
//! How the host implements `show`, `hide` or `set_params` is out of scope;
//! every method is a fire-and-forget call into an opaque capability.

use std::fmt;
use std::rc::Rc;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::callback::{Callback, same_identity};
use crate::effect::{Cleanup, EffectCell};
use crate::env::Environment;

/// Operations shared by every host chrome widget.
///
/// Visibility calls are idempotent on the host side. Click registration is by
/// exact handler reference: `off_click` only removes the handler previously
/// passed to `on_click`.
pub trait WidgetBackend {
    /// Makes the widget visible.
    fn show(&self);
    /// Hides the widget.
    fn hide(&self);
    /// Registers a click handler.
    fn on_click(&self, callback: Callback);
    /// Deregisters a previously registered click handler.
    fn off_click(&self, callback: &Callback);
}

/// The host's back-navigation control. It carries no state beyond the shared
/// widget surface.
pub trait BackButtonBackend: WidgetBackend {}

/// The host's primary action button.
pub trait MainButtonBackend: WidgetBackend {
    /// Sets the button label.
    fn set_text(&self, text: &str);
    /// Applies a partial appearance update; unset fields are left unchanged.
    fn set_params(&self, params: ButtonParams);
    /// Makes the button respond to presses.
    fn enable(&self);
    /// Makes the button ignore presses.
    fn disable(&self);
    /// Whether the button currently responds to presses.
    fn is_active(&self) -> bool;
    /// Shows the loading indicator. `leave_enabled` controls whether the
    /// button stays pressable while the indicator is visible.
    fn show_progress(&self, leave_enabled: bool);
    /// Hides the loading indicator.
    fn hide_progress(&self);
    /// Whether the loading indicator is currently visible.
    fn is_progress_visible(&self) -> bool;
}

/// A partial appearance update for the action button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonParams {
    /// Background color, as the host understands it (typically `#rrggbb`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Label color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

/// Theme colors supplied by the host, used as fallbacks when a component
/// leaves its own colors unset. Hosts deliver these as JSON with exactly
/// these field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeParams {
    /// Default action-button background color.
    pub button_color: Option<String>,
    /// Default action-button label color.
    pub button_text_color: Option<String>,
}

/// A handle to the host web-app object.
///
/// Each widget is individually optional: running outside the host, or inside
/// a host without a given capability, is an ordinary state in which the
/// corresponding component simply does nothing. Install the handle into an
/// [`Environment`] and retrieve it with [`WebApp::from_env`].
#[derive(Clone, Default)]
pub struct WebApp {
    back_button: Option<Rc<dyn BackButtonBackend>>,
    main_button: Option<Rc<dyn MainButtonBackend>>,
    theme: ThemeParams,
}

impl WebApp {
    /// Creates a handle with no capabilities attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the back-button capability.
    #[must_use]
    pub fn with_back_button(mut self, backend: Rc<dyn BackButtonBackend>) -> Self {
        self.back_button = Some(backend);
        self
    }

    /// Attaches the action-button capability.
    #[must_use]
    pub fn with_main_button(mut self, backend: Rc<dyn MainButtonBackend>) -> Self {
        self.main_button = Some(backend);
        self
    }

    /// Sets the host theme parameters.
    #[must_use]
    pub fn with_theme(mut self, theme: ThemeParams) -> Self {
        self.theme = theme;
        self
    }

    /// Retrieves the handle from an environment, if one was installed.
    #[must_use]
    pub fn from_env(env: &Environment) -> Option<&Self> {
        env.get()
    }

    /// The host theme parameters.
    #[must_use]
    pub const fn theme(&self) -> &ThemeParams {
        &self.theme
    }

    pub(crate) fn back_button(&self) -> Option<Rc<dyn BackButtonBackend>> {
        self.back_button.clone()
    }

    pub(crate) fn main_button(&self) -> Option<Rc<dyn MainButtonBackend>> {
        self.main_button.clone()
    }
}

impl fmt::Debug for WebApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebApp")
            .field("back_button", &self.back_button.is_some())
            .field("main_button", &self.main_button.is_some())
            .field("theme", &self.theme)
            .finish()
    }
}

/// Keeps a widget's click registration in sync with the requested handler.
///
/// Registration is gated on handler *identity*: re-supplying the same
/// `Callback` is a no-op, while a distinct one deregisters the previous
/// handler before registering the new. Tearing the cell down deregisters
/// whatever is currently registered.
pub(crate) fn sync_click<W>(
    widget: &Rc<W>,
    cell: &mut EffectCell<Option<Callback>>,
    next: Option<Callback>,
) where
    W: WidgetBackend + ?Sized + 'static,
{
    cell.sync_with(next, same_identity, |next| {
        let callback = next.clone()?;
        trace!("registering click handler");
        widget.on_click(callback.clone());
        let widget = Rc::clone(widget);
        Some(Box::new(move || {
            trace!("deregistering click handler");
            widget.off_click(&callback);
        }) as Cleanup)
    });
}
