//! Binding for the host's primary action button.

use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::callback::Callback;
use crate::effect::EffectCell;
use crate::env::Environment;
use crate::host::{ButtonParams, MainButtonBackend, ThemeParams, WebApp, sync_click};

/// Label used until the caller supplies one.
const DEFAULT_TEXT: &str = "CONTINUE";
/// Background color of last resort, after props and host theme.
const FALLBACK_COLOR: &str = "#fff";
/// Label color of last resort.
const FALLBACK_TEXT_COLOR: &str = "#000";

/// Declarative props for the host action button.
///
/// Every attribute is synchronized to the host independently, each gated on
/// its own prop changing between renders. Colors left unset fall back to the
/// host theme, then to a hardcoded default.
///
/// ```ignore
/// let guard = MainButton::new()
///     .text("PAY")
///     .on_click(submit_order)
///     .mount(&env);
/// ```
#[derive(Debug)]
#[must_use]
pub struct MainButton {
    text: String,
    progress: bool,
    disable: bool,
    color: Option<String>,
    text_color: Option<String>,
    on_click: Option<Callback>,
}

impl Default for MainButton {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_owned(),
            progress: false,
            disable: false,
            color: None,
            text_color: None,
            on_click: None,
        }
    }
}

impl MainButton {
    /// Creates props with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the button label.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Toggles the loading indicator. The button stays pressable while the
    /// indicator shows.
    pub const fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Toggles whether the button ignores presses.
    pub const fn disable(mut self, disable: bool) -> Self {
        self.disable = disable;
        self
    }

    /// Overrides the background color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Overrides the label color.
    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Sets the click handler.
    pub fn on_click(mut self, on_click: impl Into<Callback>) -> Self {
        self.on_click = Some(on_click.into());
        self
    }

    /// Binds to the host action button.
    ///
    /// Runs every attribute effect once, registers the click handler if one
    /// was supplied, then shows the widget. Returns `None`, and performs no
    /// host call of any kind, when the host or its action-button capability
    /// is unavailable.
    pub fn mount(self, env: &Environment) -> Option<MainButtonGuard> {
        let Some(app) = WebApp::from_env(env) else {
            debug!("web-app host unavailable; main button left unbound");
            return None;
        };
        let Some(widget) = app.main_button() else {
            debug!("host exposes no main button; component is a no-op");
            return None;
        };

        let mut guard = MainButtonGuard {
            widget,
            theme: app.theme().clone(),
            color: EffectCell::new(),
            text_color: EffectCell::new(),
            text: EffectCell::new(),
            disabled: EffectCell::new(),
            progress: EffectCell::new(),
            click: EffectCell::new(),
        };
        guard.apply(self);
        guard.widget.show();
        Some(guard)
    }
}

/// Creates action-button props with the given label.
pub fn main_button(text: impl Into<String>) -> MainButton {
    MainButton::new().text(text)
}

/// A live binding between [`MainButton`] props and the host widget.
///
/// Dropping the guard hides the widget and deregisters the current click
/// handler, in that order.
#[must_use = "dropping the guard hides the main button"]
pub struct MainButtonGuard {
    widget: Rc<dyn MainButtonBackend>,
    theme: ThemeParams,
    color: EffectCell<Option<String>>,
    text_color: EffectCell<Option<String>>,
    text: EffectCell<String>,
    disabled: EffectCell<bool>,
    progress: EffectCell<bool>,
    click: EffectCell<Option<Callback>>,
}

impl MainButtonGuard {
    /// Applies a re-render with fresh props.
    ///
    /// Attributes whose props are unchanged cause no host calls. The enable
    /// and progress effects additionally consult the widget's current state
    /// so they never re-issue a call that would not change it.
    pub fn update(&mut self, next: MainButton) {
        self.apply(next);
    }

    fn apply(&mut self, next: MainButton) {
        let widget = &self.widget;
        let theme = &self.theme;

        self.color.sync(next.color, |color| {
            let color = color
                .clone()
                .or_else(|| theme.button_color.clone())
                .unwrap_or_else(|| FALLBACK_COLOR.to_owned());
            widget.set_params(ButtonParams {
                color: Some(color),
                text_color: None,
            });
            None
        });

        self.text_color.sync(next.text_color, |color| {
            let color = color
                .clone()
                .or_else(|| theme.button_text_color.clone())
                .unwrap_or_else(|| FALLBACK_TEXT_COLOR.to_owned());
            widget.set_params(ButtonParams {
                color: None,
                text_color: Some(color),
            });
            None
        });

        self.text.sync(next.text, |text| {
            widget.set_text(text);
            None
        });

        self.disabled.sync(next.disable, |&disable| {
            if widget.is_active() && disable {
                widget.disable();
            } else if !widget.is_active() && !disable {
                widget.enable();
            }
            None
        });

        self.progress.sync(next.progress, |&progress| {
            if !widget.is_progress_visible() && progress {
                // Keep the button pressable; disabling is the caller's call.
                widget.show_progress(false);
            } else if widget.is_progress_visible() && !progress {
                widget.hide_progress();
            }
            None
        });

        sync_click(widget, &mut self.click, next.on_click);
    }
}

impl Drop for MainButtonGuard {
    fn drop(&mut self) {
        self.widget.hide();
        self.click.teardown();
    }
}

impl fmt::Debug for MainButtonGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MainButtonGuard").finish_non_exhaustive()
    }
}
