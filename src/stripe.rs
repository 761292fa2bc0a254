//! Stripe.js v3, loaded by a `<script>` tag in index.html.

use js_sys::{Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::checkout::{CheckoutRequest, HostedCheckout, PaymentProvider};

#[wasm_bindgen]
extern "C" {
    type Stripe;

    // Throws a ReferenceError when the script failed to load.
    #[wasm_bindgen(catch, js_name = Stripe)]
    fn init_stripe(publishable_key: &str) -> Result<Stripe, JsValue>;

    #[wasm_bindgen(method, js_name = redirectToCheckout)]
    fn redirect_to_checkout(this: &Stripe, options: &JsValue) -> Promise;
}

pub struct StripeJs;

pub struct StripeClient {
    inner: Stripe,
}

impl PaymentProvider for StripeJs {
    type Client = StripeClient;

    async fn load(&self, publishable_key: &str) -> Option<StripeClient> {
        match init_stripe(publishable_key) {
            Ok(inner) if !inner.is_undefined() && !inner.is_null() => Some(StripeClient { inner }),
            Ok(_) => {
                log::error!("Stripe.js returned no client");
                None
            }
            Err(err) => {
                log::error!("Stripe.js has not loaded: {:?}", err);
                None
            }
        }
    }
}

impl HostedCheckout for StripeClient {
    async fn redirect_to_checkout(&self, request: &CheckoutRequest) -> Result<(), String> {
        let options = serde_wasm_bindgen::to_value(request).map_err(|err| err.to_string())?;
        let outcome = JsFuture::from(self.inner.redirect_to_checkout(&options))
            .await
            .map_err(|err| describe(&err))?;

        // The promise resolves with `{ error }` when Stripe refuses the
        // redirect, otherwise the page is already navigating away.
        let error = Reflect::get(&outcome, &JsValue::from_str("error")).unwrap_or(JsValue::UNDEFINED);
        if error.is_undefined() || error.is_null() {
            return Ok(());
        }
        Err(describe(&error))
    }
}

fn describe(error: &JsValue) -> String {
    Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}
