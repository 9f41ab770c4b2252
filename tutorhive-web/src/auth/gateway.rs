//! Bindings to the host-provided `window.authBridge` identity provider.
//!
//! The bridge is a small JS shim loaded by `index.html` that wraps the
//! third-party identity SDK. It pushes sign-in/sign-out notifications to a
//! registered callback and exposes the sign-in/sign-out entry points.

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use yew::Callback;

use crate::auth::identity::Identity;

#[wasm_bindgen]
extern "C" {
    /// Registers a callback invoked on every identity change; returns the
    /// unsubscribe function.
    #[wasm_bindgen(js_namespace = ["window", "authBridge"], js_name = onIdentityChanged)]
    fn on_identity_changed(callback: &JsValue) -> Function;

    #[wasm_bindgen(catch, js_namespace = ["window", "authBridge"], js_name = signInWithPassword)]
    pub async fn sign_in_with_password(email: &str, password: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "authBridge"], js_name = registerWithPassword)]
    pub async fn register_with_password(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "authBridge"], js_name = signInWithGoogle)]
    pub async fn sign_in_with_google() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "authBridge"], js_name = signOut)]
    pub async fn sign_out() -> Result<JsValue, JsValue>;
}

/// Keeps an identity subscription alive; unsubscribes from the bridge when
/// dropped, so no notification can arrive after the app unmounts.
pub struct IdentitySubscription {
    unsubscribe: Function,
    _listener: Closure<dyn FnMut(JsValue)>,
}

impl Drop for IdentitySubscription {
    fn drop(&mut self) {
        let _ = self.unsubscribe.call0(&JsValue::NULL);
    }
}

/// Subscribe to identity changes. The listener receives `None` on sign-out.
pub fn subscribe_identity(listener: Callback<Option<Identity>>) -> IdentitySubscription {
    let closure = Closure::wrap(Box::new(move |payload: JsValue| {
        listener.emit(identity_from_js(&payload));
    }) as Box<dyn FnMut(JsValue)>);
    let unsubscribe = on_identity_changed(closure.as_ref());
    IdentitySubscription {
        unsubscribe,
        _listener: closure,
    }
}

/// Parse the bridge's identity payload. A payload without an email is
/// treated as signed out, since the role lookup is keyed by email.
pub fn identity_from_js(payload: &JsValue) -> Option<Identity> {
    if payload.is_null() || payload.is_undefined() {
        return None;
    }
    let field = |name: &str| {
        Reflect::get(payload, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_string())
    };
    Some(Identity {
        uid: field("uid").unwrap_or_default(),
        email: field("email")?,
        display_name: field("displayName"),
    })
}

/// Human-readable message out of a bridge rejection.
pub fn bridge_error_message(err: &JsValue) -> String {
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|value| value.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "identity provider error".to_string())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::Object;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn payload(entries: &[(&str, &str)]) -> JsValue {
        let object = Object::new();
        for (key, value) in entries {
            Reflect::set(
                &object,
                &JsValue::from_str(key),
                &JsValue::from_str(value),
            )
            .unwrap();
        }
        object.into()
    }

    #[wasm_bindgen_test]
    fn null_payload_is_signed_out() {
        assert_eq!(identity_from_js(&JsValue::NULL), None);
        assert_eq!(identity_from_js(&JsValue::UNDEFINED), None);
    }

    #[wasm_bindgen_test]
    fn payload_without_email_is_signed_out() {
        let value = payload(&[("uid", "u1"), ("displayName", "Asha")]);
        assert_eq!(identity_from_js(&value), None);
    }

    #[wasm_bindgen_test]
    fn full_payload_parses() {
        let value = payload(&[
            ("uid", "u1"),
            ("email", "asha@example.com"),
            ("displayName", "Asha"),
        ]);
        let identity = identity_from_js(&value).unwrap();
        assert_eq!(identity.email, "asha@example.com");
        assert_eq!(identity.display_name.as_deref(), Some("Asha"));
    }

    #[wasm_bindgen_test]
    fn error_message_extraction() {
        let err = payload(&[("message", "wrong password")]);
        assert_eq!(bridge_error_message(&err), "wrong password");
        assert_eq!(
            bridge_error_message(&JsValue::from_str("offline")),
            "offline"
        );
    }
}
