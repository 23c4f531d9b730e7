use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    pub payment_key: String,
    pub order_id: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    pub cancel_reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_receive_account: Option<RefundReceiveAccount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundReceiveAccount {
    pub bank: String,
    pub account_number: String,
    pub holder_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_key: Option<String>,
    pub order_id: Option<String>,
    pub order_name: Option<String>,
    #[serde(rename = "type")]
    pub payment_type: Option<String>,
    pub status: Option<String>,
    pub total_amount: Option<i64>,
    pub balance_amount: Option<i64>,
    pub supplied_amount: Option<i64>,
    pub vat: Option<i64>,
    pub requested_at: Option<DateTime<FixedOffset>>,
    pub approved_at: Option<DateTime<FixedOffset>>,
    pub method: Option<String>,
    pub card: Option<CardInfo>,
    pub virtual_account: Option<VirtualAccountInfo>,
    pub easy_pay: Option<EasyPayInfo>,
    pub cancels: Option<Vec<CancelHistory>>,
    pub code: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    pub amount: Option<i64>,
    pub issuer_code: Option<String>,
    pub acquirer_code: Option<String>,
    pub number: Option<String>,
    pub installment_plan_months: Option<i32>,
    pub approve_no: Option<String>,
    pub use_card_point: Option<bool>,
    pub card_type: Option<String>,
    pub owner_type: Option<String>,
    pub acquire_status: Option<String>,
    pub is_interest_free: Option<bool>,
    pub interest_payer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualAccountInfo {
    pub account_type: Option<String>,
    pub account_number: Option<String>,
    pub bank_code: Option<String>,
    pub customer_name: Option<String>,
    pub due_date: Option<DateTime<FixedOffset>>,
    pub refund_status: Option<String>,
    pub expired_at: Option<DateTime<FixedOffset>>,
    pub settlement_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EasyPayInfo {
    pub provider: Option<String>,
    pub amount: Option<i64>,
    pub discount_amount: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelHistory {
    pub cancel_reason: Option<String>,
    pub cancel_amount: Option<i64>,
    pub tax_free_amount: Option<i64>,
    pub tax_amount: Option<i64>,
    pub refundable_amount: Option<i64>,
    pub easy_pay_discount_amount: Option<i64>,
    pub canceled_at: Option<DateTime<FixedOffset>>,
    pub transaction_key: Option<String>,
    pub receipt_key: Option<String>,
}
