use serde_json::json;
use toss_gateway::domain::payment::{CancelRequest, RefundReceiveAccount};
use toss_gateway::{TossConfig, TossError, TossGateway};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AUTH_HEADER: &str = "Basic dGVzdF9za19wbzIwS1I0eW1EYjUxeG05Og==";

fn gateway(server: &MockServer) -> TossGateway {
    let base = server.uri();
    let config = TossConfig {
        secret_key: "test_sk_po20KR4ymDb51xm9".to_string(),
        cancel_url: format!("{base}/v1/payments/{{paymentKey}}/cancel"),
        lookup_url: format!("{base}/v1/payments/{{paymentKey}}"),
        ..TossConfig::default()
    };
    TossGateway::new(config).unwrap()
}

fn cancel_request() -> CancelRequest {
    CancelRequest {
        cancel_reason: "customer request".to_string(),
        cancel_amount: None,
        refund_receive_account: None,
    }
}

#[tokio::test]
async fn cancel_substitutes_payment_key_into_the_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payments/pk_1/cancel"))
        .and(header("Authorization", AUTH_HEADER))
        .and(body_json(json!({"cancelReason": "customer request"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paymentKey": "pk_1",
            "orderId": "ord_1",
            "status": "CANCELED",
            "totalAmount": 1000,
            "balanceAmount": 0,
            "cancels": [{
                "cancelReason": "customer request",
                "cancelAmount": 1000,
                "canceledAt": "2024-02-13T13:01:22+09:00",
                "transactionKey": "txn_1",
            }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payment = gateway(&server)
        .cancel_payment("pk_1", &cancel_request())
        .await
        .unwrap();

    assert_eq!(payment.status.as_deref(), Some("CANCELED"));
    let cancels = payment.cancels.unwrap();
    assert_eq!(cancels.len(), 1);
    assert_eq!(cancels[0].cancel_amount, Some(1000));
}

#[tokio::test]
async fn already_canceled_payment_is_detectable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payments/pk_1/cancel"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "ALREADY_CANCELED_PAYMENT",
            "message": "이미 취소된 결제 입니다.",
        })))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .cancel_payment("pk_1", &cancel_request())
        .await
        .unwrap_err();

    assert_eq!(err.provider_code(), Some("ALREADY_CANCELED_PAYMENT"));
    assert!(err.is_already_canceled());
}

#[tokio::test]
async fn partial_cancel_sends_amount_and_refund_account() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payments/pk_2/cancel"))
        .and(body_json(json!({
            "cancelReason": "단순 변심",
            "cancelAmount": 300,
            "refundReceiveAccount": {
                "bank": "11",
                "accountNumber": "12345678901234",
                "holderName": "홍길동",
            },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paymentKey": "pk_2",
            "orderId": "ord_2",
            "status": "PARTIAL_CANCELED",
            "totalAmount": 1000,
            "balanceAmount": 700,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = CancelRequest {
        cancel_reason: "단순 변심".to_string(),
        cancel_amount: Some(300),
        refund_receive_account: Some(RefundReceiveAccount {
            bank: "11".to_string(),
            account_number: "12345678901234".to_string(),
            holder_name: "홍길동".to_string(),
        }),
    };
    let payment = gateway(&server).cancel_payment("pk_2", &req).await.unwrap();

    assert_eq!(payment.status.as_deref(), Some("PARTIAL_CANCELED"));
    assert_eq!(payment.balance_amount, Some(700));
}

#[tokio::test]
async fn blank_cancel_reason_never_reaches_the_network() {
    let server = MockServer::start().await;
    let gateway = gateway(&server);

    let req = CancelRequest {
        cancel_reason: " ".to_string(),
        cancel_amount: None,
        refund_receive_account: None,
    };
    let err = gateway.cancel_payment("pk_1", &req).await.unwrap_err();

    assert!(matches!(
        err,
        TossError::Validation {
            code: "INVALID_CANCEL_REASON",
            ..
        }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn lookup_returns_the_payment_with_nested_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/payments/pk_3"))
        .and(header("Authorization", AUTH_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paymentKey": "pk_3",
            "orderId": "ord_3",
            "type": "NORMAL",
            "status": "WAITING_FOR_DEPOSIT",
            "totalAmount": 50000,
            "method": "가상계좌",
            "virtualAccount": {
                "accountType": "일반",
                "accountNumber": "70123456789",
                "bankCode": "20",
                "customerName": "홍길동",
                "dueDate": "2024-02-20T23:59:59+09:00",
            },
            "easyPay": null,
        })))
        .mount(&server)
        .await;

    let payment = gateway(&server).lookup_payment("pk_3").await.unwrap();

    assert_eq!(payment.status.as_deref(), Some("WAITING_FOR_DEPOSIT"));
    let account = payment.virtual_account.unwrap();
    assert_eq!(account.bank_code.as_deref(), Some("20"));
    assert!(account.due_date.is_some());
}

#[tokio::test]
async fn lookup_surfaces_embedded_error_codes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/payments/pk_gone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "NOT_FOUND_PAYMENT",
            "message": "존재하지 않는 결제 입니다.",
        })))
        .mount(&server)
        .await;

    let err = gateway(&server).lookup_payment("pk_gone").await.unwrap_err();

    assert_eq!(err.provider_code(), Some("NOT_FOUND_PAYMENT"));
}
