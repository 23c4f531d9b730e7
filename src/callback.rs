use crate::domain::brandpay::BrandPayToken;
use crate::error::TossError;
use crate::gateway::TossGateway;

#[derive(Debug, Clone, Default)]
pub struct BrandPayCallbackParams {
    pub code: Option<String>,
    pub customer_key: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum CallbackOutcome {
    Registered(BrandPayToken),
    Rejected { code: String, message: String },
}

pub async fn handle_brand_pay_callback(
    gateway: &TossGateway,
    params: &BrandPayCallbackParams,
) -> Result<CallbackOutcome, TossError> {
    if let Some(error_code) = params
        .error_code
        .as_deref()
        .filter(|code| !code.trim().is_empty())
    {
        let message = params.error_message.clone().unwrap_or_default();
        tracing::warn!(
            "brand pay registration rejected - errorCode: {}, errorMessage: {}",
            error_code,
            message
        );
        return Ok(CallbackOutcome::Rejected {
            code: error_code.to_string(),
            message,
        });
    }

    let code = params.code.as_deref().unwrap_or("");
    let customer_key = params.customer_key.as_deref().unwrap_or("");
    let token = gateway.issue_brand_pay_token(code, customer_key).await?;
    Ok(CallbackOutcome::Registered(token))
}
