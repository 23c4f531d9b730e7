use crate::domain::billing::BillingChargeRequest;
use crate::domain::payment::{CancelRequest, ConfirmRequest};
use crate::error::TossError;

pub fn validate_payment_key(payment_key: &str) -> Result<(), TossError> {
    if payment_key.trim().is_empty() {
        return Err(TossError::validation(
            "INVALID_PAYMENT_KEY",
            "paymentKey is required",
        ));
    }
    Ok(())
}

pub fn validate_confirm(req: &ConfirmRequest) -> Result<(), TossError> {
    validate_payment_key(&req.payment_key)?;
    if req.order_id.trim().is_empty() {
        return Err(TossError::validation(
            "INVALID_ORDER_ID",
            "orderId is required",
        ));
    }
    if req.amount <= 0 {
        return Err(TossError::validation(
            "INVALID_AMOUNT",
            "amount must be greater than 0",
        ));
    }
    Ok(())
}

pub fn validate_cancel(req: &CancelRequest) -> Result<(), TossError> {
    if req.cancel_reason.trim().is_empty() {
        return Err(TossError::validation(
            "INVALID_CANCEL_REASON",
            "cancelReason is required",
        ));
    }
    if let Some(amount) = req.cancel_amount {
        if amount <= 0 {
            return Err(TossError::validation(
                "INVALID_AMOUNT",
                "cancelAmount must be greater than 0",
            ));
        }
    }
    if let Some(account) = &req.refund_receive_account {
        if account.bank.trim().is_empty()
            || account.account_number.trim().is_empty()
            || account.holder_name.trim().is_empty()
        {
            return Err(TossError::validation(
                "INVALID_REFUND_ACCOUNT",
                "refundReceiveAccount requires bank, accountNumber and holderName",
            ));
        }
    }
    Ok(())
}

pub fn validate_billing_charge(req: &BillingChargeRequest) -> Result<(), TossError> {
    if req.billing_key.trim().is_empty() {
        return Err(TossError::validation(
            "INVALID_BILLING_KEY",
            "billingKey is required",
        ));
    }
    if req.customer_key.trim().is_empty() {
        return Err(TossError::validation(
            "INVALID_CUSTOMER_KEY",
            "customerKey is required",
        ));
    }
    if req.amount <= 0 {
        return Err(TossError::validation(
            "INVALID_AMOUNT",
            "amount must be greater than 0",
        ));
    }
    if req.order_id.trim().is_empty() {
        return Err(TossError::validation(
            "INVALID_ORDER_ID",
            "orderId is required",
        ));
    }
    if req.order_name.trim().is_empty() {
        return Err(TossError::validation(
            "INVALID_ORDER_NAME",
            "orderName is required",
        ));
    }
    Ok(())
}

pub fn validate_brand_pay_token(code: &str, customer_key: &str) -> Result<(), TossError> {
    if code.trim().is_empty() {
        return Err(TossError::validation("INVALID_CODE", "code is required"));
    }
    if customer_key.trim().is_empty() {
        return Err(TossError::validation(
            "INVALID_CUSTOMER_KEY",
            "customerKey is required",
        ));
    }
    Ok(())
}
