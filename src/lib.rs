#![doc = include_str!("../README.md")]

pub mod back_button;
pub mod callback;
pub mod effect;
pub mod env;
pub mod host;
pub mod main_button;

#[doc(inline)]
pub use back_button::{BackButton, BackButtonGuard, back_button};
#[doc(inline)]
pub use callback::Callback;
#[doc(inline)]
pub use env::Environment;
#[doc(inline)]
pub use host::{BackButtonBackend, ButtonParams, MainButtonBackend, ThemeParams, WebApp};
#[doc(inline)]
pub use main_button::{MainButton, MainButtonGuard, main_button};
