//! Geolocation acquirer
//!
//! Wraps the platform's one-shot `getCurrentPosition` callback API as a
//! single async operation returning a fresh [`Fix`] or a classified error.
//! Every call forces `maximumAge = 0`; a fix is never cached or reused.

use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A single geolocation reading. Ephemeral: one submission, then discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
    pub captured_at_ms: f64,
}

/// Classified geolocation failure, carrying remediation text for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    #[error("Geolocation is not supported by your browser")]
    Unsupported,

    #[error("Location requires a secure connection. Please use https:// or open from http://localhost")]
    InsecureContext,

    #[error("Location permission denied. Please allow location access when the browser asks, or enable it in your browser/site settings.")]
    PermissionDenied,

    #[error("Location is unavailable. Check that location/GPS is on and try again.")]
    PositionUnavailable,

    #[error("Location request timed out. Please ensure location is enabled and try again.")]
    Timeout,
}

#[derive(Debug, Clone, Copy)]
pub struct GeoOptions {
    pub high_accuracy: bool,
    pub timeout_ms: u32,
}

impl Default for GeoOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 15_000,
        }
    }
}

/// Map the platform's native error codes (1/2/3) to the taxonomy. Anything
/// unexpected reads as "unavailable" rather than surfacing a raw code.
pub(crate) fn map_position_error(code: u16) -> GeoError {
    match code {
        1 => GeoError::PermissionDenied,
        3 => GeoError::Timeout,
        _ => GeoError::PositionUnavailable,
    }
}

/// Acquire a fresh position fix.
///
/// Triggers the native permission prompt on first use. The platform call has
/// no cancellation handle; callers that may go away before it settles should
/// drive this from a component-scoped task so a late fix is dropped with the
/// task.
pub async fn acquire(opts: &GeoOptions) -> Result<Fix, GeoError> {
    let window = web_sys::window().ok_or(GeoError::Unsupported)?;
    if !window.is_secure_context() {
        return Err(GeoError::InsecureContext);
    }
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| GeoError::Unsupported)?;

    let position_opts = web_sys::PositionOptions::new();
    position_opts.set_enable_high_accuracy(opts.high_accuracy);
    position_opts.set_timeout(opts.timeout_ms);
    position_opts.set_maximum_age(0);

    let (tx, rx) = oneshot::channel::<Result<Fix, GeoError>>();
    // Exactly one of the two callbacks fires; they share the sender.
    let sender = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let sender = Rc::clone(&sender);
        Closure::once_into_js(move |position: web_sys::Position| {
            let coords = position.coords();
            let fix = Fix {
                latitude: coords.latitude(),
                longitude: coords.longitude(),
                accuracy: coords.accuracy(),
                captured_at_ms: position.timestamp(),
            };
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(Ok(fix));
            }
        })
    };

    let on_error = {
        let sender = Rc::clone(&sender);
        Closure::once_into_js(move |error: web_sys::PositionError| {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(Err(map_position_error(error.code())));
            }
        })
    };

    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.unchecked_ref::<js_sys::Function>(),
            Some(on_error.unchecked_ref::<js_sys::Function>()),
            &position_opts,
        )
        .map_err(|_| GeoError::Unsupported)?;

    match rx.await {
        Ok(result) => result,
        // Sender dropped without firing; treat as unavailable.
        Err(_) => Err(GeoError::PositionUnavailable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_codes_map_exhaustively() {
        assert_eq!(map_position_error(1), GeoError::PermissionDenied);
        assert_eq!(map_position_error(2), GeoError::PositionUnavailable);
        assert_eq!(map_position_error(3), GeoError::Timeout);
        assert_eq!(map_position_error(42), GeoError::PositionUnavailable);
    }

    #[test]
    fn errors_carry_remediation_text() {
        assert!(GeoError::PermissionDenied.to_string().contains("allow location access"));
        assert!(GeoError::Timeout.to_string().contains("timed out"));
        assert!(GeoError::InsecureContext.to_string().contains("https://"));
    }

    #[test]
    fn default_options_demand_fresh_high_accuracy_fix() {
        let opts = GeoOptions::default();
        assert!(opts.high_accuracy);
        assert_eq!(opts.timeout_ms, 15_000);
    }
}
