#[derive(Debug, Clone)]
pub struct TossConfig {
    pub secret_key: String,
    pub client_key: String,
    pub variant_key: String,
    pub confirm_url: String,
    pub cancel_url: String,
    pub lookup_url: String,
    pub billing_url: String,
    pub brand_pay_token_url: String,
    pub brand_pay_method_url: String,
    pub brand_pay_redirect_url: String,
    pub max_connections_per_host: usize,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for TossConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            client_key: String::new(),
            variant_key: String::new(),
            confirm_url: "https://api.tosspayments.com/v1/payments/confirm".to_string(),
            cancel_url: "https://api.tosspayments.com/v1/payments/{paymentKey}/cancel".to_string(),
            lookup_url: "https://api.tosspayments.com/v1/payments/{paymentKey}".to_string(),
            billing_url: "https://api.tosspayments.com/v1/billing/{billingKey}".to_string(),
            brand_pay_token_url:
                "https://api.tosspayments.com/v1/brandpay/authorizations/access-token".to_string(),
            brand_pay_method_url: "https://api.tosspayments.com/v1/brandpay/cards".to_string(),
            brand_pay_redirect_url: String::new(),
            max_connections_per_host: 20,
            connect_timeout_ms: 5_000,
            request_timeout_ms: 30_000,
        }
    }
}

impl TossConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret_key: std::env::var("TOSS_SECRET_KEY").unwrap_or_default(),
            client_key: std::env::var("TOSS_CLIENT_KEY").unwrap_or_default(),
            variant_key: std::env::var("TOSS_VARIANT_KEY").unwrap_or_default(),
            confirm_url: std::env::var("TOSS_CONFIRM_URL").unwrap_or(defaults.confirm_url),
            cancel_url: std::env::var("TOSS_CANCEL_URL").unwrap_or(defaults.cancel_url),
            lookup_url: std::env::var("TOSS_LOOKUP_URL").unwrap_or(defaults.lookup_url),
            billing_url: std::env::var("TOSS_BILLING_URL").unwrap_or(defaults.billing_url),
            brand_pay_token_url: std::env::var("TOSS_BRANDPAY_TOKEN_URL")
                .unwrap_or(defaults.brand_pay_token_url),
            brand_pay_method_url: std::env::var("TOSS_BRANDPAY_METHOD_URL")
                .unwrap_or(defaults.brand_pay_method_url),
            brand_pay_redirect_url: std::env::var("TOSS_BRANDPAY_REDIRECT_URL").unwrap_or_default(),
            max_connections_per_host: std::env::var("TOSS_MAX_CONNECTIONS_PER_HOST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_connections_per_host),
            connect_timeout_ms: std::env::var("TOSS_CONNECT_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.connect_timeout_ms),
            request_timeout_ms: std::env::var("TOSS_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
        }
    }
}
