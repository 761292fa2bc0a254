/// Price reference used when STRIPE_PRICE_ID is not configured.
pub const DEFAULT_PRICE_ID: &str = "prod_Spm6cnxBN88zww";
pub const DEFAULT_PRICE_LABEL: &str = "$9.00";

/// Settings for the hosted checkout, resolved from the build environment
/// (see build.rs, which loads `.env` with dotenv).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfig {
    pub publishable_key: Option<String>,
    pub price_id: String,
    pub price_label: String,
}

impl PaymentConfig {
    pub fn new(publishable_key: Option<&str>, price_id: Option<&str>, price_label: Option<&str>) -> Self {
        Self {
            publishable_key: non_blank(publishable_key),
            price_id: non_blank(price_id).unwrap_or_else(|| DEFAULT_PRICE_ID.to_string()),
            price_label: non_blank(price_label).unwrap_or_else(|| DEFAULT_PRICE_LABEL.to_string()),
        }
    }

    pub fn from_build_env() -> Self {
        let config = Self::new(
            option_env!("STRIPE_PUBLISHABLE_KEY"),
            option_env!("STRIPE_PRICE_ID"),
            option_env!("GUIDE_PRICE_LABEL"),
        );
        if config.publishable_key.is_none() {
            log::warn!("STRIPE_PUBLISHABLE_KEY is not set, checkout will be unavailable");
        }
        config
    }
}

// `KEY=` in a .env file still defines the variable, so blank counts as unset
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
