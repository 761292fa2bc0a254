//! Hands the visitor over to the provider's hosted checkout page.
//!
//! Success means the browser navigates away; the guide is only unlocked
//! later, when the provider redirects back with the success marker.

use thiserror::Error;

use crate::config::PaymentConfig;
use crate::location::{PageLocation, ReturnMarker};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("payment publishable key is not configured (set STRIPE_PUBLISHABLE_KEY)")]
    Configuration,

    #[error("payment provider client failed to initialize")]
    ProviderUnavailable,

    #[error("payment provider rejected the checkout request: {0}")]
    Rejected(String),
}

impl CheckoutError {
    /// Generic text shown in the purchase dialog.
    pub fn user_message(&self) -> &'static str {
        match self {
            CheckoutError::Configuration => {
                "Error de configuración de pago. Por favor, contacte al soporte."
            }
            CheckoutError::ProviderUnavailable => {
                "No se pudo conectar con el proveedor de pago. Inténtalo de nuevo."
            }
            CheckoutError::Rejected(_) => {
                "No se pudo iniciar el pago. Por favor, inténtalo de nuevo."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LineItem {
    pub price: String,
    pub quantity: u32,
}

/// Options of a hosted checkout redirect, in the provider's field names.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub line_items: Vec<LineItem>,
    pub mode: &'static str,
    pub success_url: String,
    pub cancel_url: String,
}

impl CheckoutRequest {
    /// One unit of the guide, paid once, returning to `page`.
    pub fn one_time(price_id: &str, page: &PageLocation) -> Self {
        Self {
            line_items: vec![LineItem {
                price: price_id.to_string(),
                quantity: 1,
            }],
            mode: "payment",
            success_url: page.return_url(ReturnMarker::Success),
            cancel_url: page.return_url(ReturnMarker::Cancel),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait PaymentProvider {
    type Client: HostedCheckout;

    /// `None` when the provider's client library could not be initialized.
    async fn load(&self, publishable_key: &str) -> Option<Self::Client>;
}

#[allow(async_fn_in_trait)]
pub trait HostedCheckout {
    /// Navigates to the hosted page. Returns only if the provider refused,
    /// with its reason.
    async fn redirect_to_checkout(&self, request: &CheckoutRequest) -> Result<(), String>;
}

pub async fn initiate_checkout<P: PaymentProvider>(
    config: &PaymentConfig,
    provider: &P,
    page: &PageLocation,
) -> Result<(), CheckoutError> {
    let Some(publishable_key) = config.publishable_key.as_deref() else {
        log::error!("{}", CheckoutError::Configuration);
        return Err(CheckoutError::Configuration);
    };

    log::debug!("Loading payment provider client");
    let Some(client) = provider.load(publishable_key).await else {
        log::error!("{}", CheckoutError::ProviderUnavailable);
        return Err(CheckoutError::ProviderUnavailable);
    };

    let request = CheckoutRequest::one_time(&config.price_id, page);
    log::info!("Redirecting to hosted checkout for price {}", config.price_id);
    client.redirect_to_checkout(&request).await.map_err(|reason| {
        let err = CheckoutError::Rejected(reason);
        log::error!("{}", err);
        err
    })
}

/// Display state of the purchase dialog. `in_flight` doubles as the
/// re-entrancy guard while a checkout attempt is suspended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseDialog {
    pub open: bool,
    pub in_flight: bool,
    pub error: Option<&'static str>,
}

impl PurchaseDialog {
    pub fn show(&mut self) {
        self.open = true;
    }

    /// Closing is only possible before an attempt starts.
    pub fn close(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.open = false;
        self.error = None;
        true
    }

    /// Starts an attempt; `false` if one is already running.
    pub fn begin(&mut self) -> bool {
        if !self.open || self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.error = None;
        true
    }

    /// Re-enables the pay button so the visitor can retry.
    pub fn fail(&mut self, err: &CheckoutError) {
        self.in_flight = false;
        self.error = Some(err.user_message());
    }
}
