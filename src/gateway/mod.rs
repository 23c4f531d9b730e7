use crate::codes::status::PaymentStatus;
use crate::config::TossConfig;
use crate::domain::billing::BillingChargeRequest;
use crate::domain::brandpay::{BrandPayMethods, BrandPayToken};
use crate::domain::payment::{CancelRequest, ConfirmRequest, Payment};
use crate::error::TossError;
use crate::mask::mask_key;
use crate::validate;
use serde_json::json;
use std::time::Duration;

mod response;

use response::decode;

#[derive(Debug, Clone)]
pub struct TossGateway {
    config: TossConfig,
    client: reqwest::Client,
}

impl TossGateway {
    pub fn new(config: TossConfig) -> Result<Self, TossError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(config.max_connections_per_host)
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|source| TossError::Transport {
                operation: "client init",
                source,
            })?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self, TossError> {
        Self::new(TossConfig::from_env())
    }

    pub fn config(&self) -> &TossConfig {
        &self.config
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .basic_auth(&self.config.secret_key, Some(""))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&self.config.secret_key, Some(""))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }

    pub async fn confirm_payment(&self, req: &ConfirmRequest) -> Result<Payment, TossError> {
        validate::validate_confirm(req)?;
        tracing::info!(
            "payment confirm request - orderId: {}, amount: {}",
            req.order_id,
            req.amount
        );

        let body = json!({
            "paymentKey": req.payment_key,
            "orderId": req.order_id,
            "amount": req.amount,
        });
        let outcome = self.post(&self.config.confirm_url).json(&body).send().await;
        let payment: Payment = decode(outcome, "payment confirm").await?;

        tracing::info!(
            "payment confirm approved - orderId: {}, status: {}",
            req.order_id,
            payment.status.as_deref().unwrap_or("")
        );
        Ok(payment)
    }

    pub async fn cancel_payment(
        &self,
        payment_key: &str,
        req: &CancelRequest,
    ) -> Result<Payment, TossError> {
        validate::validate_payment_key(payment_key)?;
        validate::validate_cancel(req)?;
        tracing::info!(
            "payment cancel request - paymentKey: {}, cancelReason: {}, cancelAmount: {:?}",
            payment_key,
            req.cancel_reason,
            req.cancel_amount
        );

        let url = self.config.cancel_url.replace("{paymentKey}", payment_key);
        let outcome = self.post(&url).json(req).send().await;
        let payment: Payment = decode(outcome, "payment cancel").await?;

        tracing::info!(
            "payment cancel accepted - paymentKey: {}, status: {}",
            payment_key,
            payment.status.as_deref().unwrap_or("")
        );
        Ok(payment)
    }

    pub async fn lookup_payment(&self, payment_key: &str) -> Result<Payment, TossError> {
        validate::validate_payment_key(payment_key)?;
        tracing::info!("payment lookup request - paymentKey: {}", payment_key);

        let url = self.config.lookup_url.replace("{paymentKey}", payment_key);
        let outcome = self.get(&url).send().await;
        let payment: Payment = decode(outcome, "payment lookup").await?;

        tracing::info!(
            "payment lookup done - paymentKey: {}, status: {}",
            payment_key,
            payment.status.as_deref().unwrap_or("")
        );
        Ok(payment)
    }

    pub async fn charge_billing(&self, req: &BillingChargeRequest) -> Result<Payment, TossError> {
        validate::validate_billing_charge(req)?;
        tracing::info!(
            "billing charge request - billingKey: {}, orderId: {}, amount: {}",
            mask_key(&req.billing_key),
            req.order_id,
            req.amount
        );

        let url = self.config.billing_url.replace("{billingKey}", &req.billing_key);
        let outcome = self.post(&url).json(req).send().await;
        let payment: Payment = decode(outcome, "billing charge").await?;

        let status = payment.status.clone().unwrap_or_default();
        if !PaymentStatus::is_done(&status) {
            tracing::warn!(
                "billing charge not completed - orderId: {}, status: {}",
                req.order_id,
                status
            );
            return Err(TossError::State {
                operation: "billing charge",
                status,
            });
        }

        tracing::info!("billing charge completed - orderId: {}", req.order_id);
        Ok(payment)
    }

    pub async fn issue_brand_pay_token(
        &self,
        code: &str,
        customer_key: &str,
    ) -> Result<BrandPayToken, TossError> {
        validate::validate_brand_pay_token(code, customer_key)?;
        tracing::info!("brand pay token request - customerKey: {}", customer_key);

        let body = json!({
            "grantType": "AuthorizationCode",
            "code": code,
            "customerKey": customer_key,
        });
        let outcome = self
            .post(&self.config.brand_pay_token_url)
            .json(&body)
            .send()
            .await;
        let token: BrandPayToken = decode(outcome, "brand pay token").await?;

        match token.access_token.as_deref() {
            Some(access_token) if !access_token.is_empty() => {
                tracing::info!(
                    "brand pay token issued - customerKey: {}, accessToken: {}",
                    customer_key,
                    mask_key(access_token)
                );
                Ok(token)
            }
            _ => {
                tracing::warn!(
                    "brand pay token response missing accessToken - customerKey: {}",
                    customer_key
                );
                Err(TossError::MalformedResponse {
                    operation: "brand pay token",
                    status: 200,
                    detail: "accessToken missing in response".to_string(),
                })
            }
        }
    }

    pub async fn brand_pay_methods(&self, customer_key: &str) -> Result<BrandPayMethods, TossError> {
        tracing::info!("brand pay methods request - customerKey: {}", customer_key);

        let outcome = self
            .get(&self.config.brand_pay_method_url)
            .query(&[("customerKey", customer_key)])
            .send()
            .await;
        let methods: BrandPayMethods = decode(outcome, "brand pay methods").await?;

        tracing::info!(
            "brand pay methods fetched - customerKey: {}, count: {}",
            customer_key,
            methods.methods.len()
        );
        Ok(methods)
    }
}
