use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPayToken {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
    pub code: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPayMethods {
    pub customer_key: Option<String>,
    #[serde(default)]
    pub methods: Vec<BrandPayMethod>,
    pub code: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPayMethod {
    pub method_key: Option<String>,
    pub method_type: Option<String>,
    pub card: Option<BrandPayCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPayCard {
    pub issuer_code: Option<String>,
    pub acquirer_code: Option<String>,
    pub number: Option<String>,
    pub card_type: Option<String>,
    pub owner_type: Option<String>,
}
