use serde_json::json;
use toss_gateway::domain::billing::BillingChargeRequest;
use toss_gateway::{TossConfig, TossError, TossGateway};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(server: &MockServer) -> TossGateway {
    let config = TossConfig {
        secret_key: "test_sk_po20KR4ymDb51xm9".to_string(),
        billing_url: format!("{}/v1/billing/{{billingKey}}", server.uri()),
        ..TossConfig::default()
    };
    TossGateway::new(config).unwrap()
}

fn charge_request() -> BillingChargeRequest {
    BillingChargeRequest {
        billing_key: "bill_9f8c1b2d3e4a5061".to_string(),
        customer_key: "cust_1".to_string(),
        amount: 9900,
        order_id: "ord_sub_1".to_string(),
        order_name: "월간 구독".to_string(),
        customer_email: None,
        customer_name: None,
        customer_mobile_phone: None,
        tax_free_amount: None,
        card_installment_plan: None,
    }
}

#[tokio::test]
async fn charge_posts_to_the_billing_key_path_without_the_key_in_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/billing/bill_9f8c1b2d3e4a5061"))
        .and(header(
            "Authorization",
            "Basic dGVzdF9za19wbzIwS1I0eW1EYjUxeG05Og==",
        ))
        .and(body_json(json!({
            "customerKey": "cust_1",
            "amount": 9900,
            "orderId": "ord_sub_1",
            "orderName": "월간 구독",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paymentKey": "pk_bill_1",
            "orderId": "ord_sub_1",
            "type": "BILLING",
            "status": "DONE",
            "totalAmount": 9900,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payment = gateway(&server).charge_billing(&charge_request()).await.unwrap();

    assert_eq!(payment.status.as_deref(), Some("DONE"));
    assert_eq!(payment.payment_type.as_deref(), Some("BILLING"));
}

#[tokio::test]
async fn optional_customer_fields_are_forwarded_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/billing/bill_9f8c1b2d3e4a5061"))
        .and(body_json(json!({
            "customerKey": "cust_1",
            "amount": 9900,
            "orderId": "ord_sub_1",
            "orderName": "월간 구독",
            "customerEmail": "user@example.com",
            "taxFreeAmount": 0,
            "cardInstallmentPlan": 3,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orderId": "ord_sub_1",
            "status": "DONE",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut req = charge_request();
    req.customer_email = Some("user@example.com".to_string());
    req.tax_free_amount = Some(0);
    req.card_installment_plan = Some(3);
    gateway(&server).charge_billing(&req).await.unwrap();
}

#[tokio::test]
async fn non_done_status_is_a_state_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/billing/bill_9f8c1b2d3e4a5061"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orderId": "ord_sub_1",
            "status": "CANCELED",
        })))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .charge_billing(&charge_request())
        .await
        .unwrap_err();

    match err {
        TossError::State { ref status, .. } => assert_eq!(status, "CANCELED"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.provider_code().is_none());
}

#[tokio::test]
async fn provider_error_code_wins_over_the_state_check() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/billing/bill_9f8c1b2d3e4a5061"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "NOT_MATCHES_CUSTOMER_KEY",
            "message": "빌링키에 연결된 customerKey가 아닙니다.",
        })))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .charge_billing(&charge_request())
        .await
        .unwrap_err();

    assert_eq!(err.provider_code(), Some("NOT_MATCHES_CUSTOMER_KEY"));
}

#[tokio::test]
async fn zero_amount_fails_validation_before_any_network_call() {
    let server = MockServer::start().await;
    let gateway = gateway(&server);

    let mut req = charge_request();
    req.amount = 0;
    let err = gateway.charge_billing(&req).await.unwrap_err();
    assert!(matches!(
        err,
        TossError::Validation {
            code: "INVALID_AMOUNT",
            ..
        }
    ));

    let mut req = charge_request();
    req.order_name = String::new();
    let err = gateway.charge_billing(&req).await.unwrap_err();
    assert!(matches!(
        err,
        TossError::Validation {
            code: "INVALID_ORDER_NAME",
            ..
        }
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
}
