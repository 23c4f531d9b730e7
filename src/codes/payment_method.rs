#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    EasyPay,
    VirtualAccount,
    Transfer,
    MobilePhone,
    CultureGiftCertificate,
    BookGiftCertificate,
    GameGiftCertificate,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 8] = [
        PaymentMethod::Card,
        PaymentMethod::EasyPay,
        PaymentMethod::VirtualAccount,
        PaymentMethod::Transfer,
        PaymentMethod::MobilePhone,
        PaymentMethod::CultureGiftCertificate,
        PaymentMethod::BookGiftCertificate,
        PaymentMethod::GameGiftCertificate,
    ];

    fn entry(self) -> (&'static str, &'static str, &'static str) {
        match self {
            PaymentMethod::Card => ("CARD", "카드", "카드 결제"),
            PaymentMethod::EasyPay => (
                "EASY_PAY",
                "간편결제",
                "간편결제 (네이버페이, 카카오페이, 토스페이 등)",
            ),
            PaymentMethod::VirtualAccount => ("VIRTUAL_ACCOUNT", "가상계좌", "가상계좌"),
            PaymentMethod::Transfer => ("TRANSFER", "계좌이체", "계좌이체"),
            PaymentMethod::MobilePhone => ("MOBILE_PHONE", "휴대폰", "휴대폰 소액결제"),
            PaymentMethod::CultureGiftCertificate => {
                ("CULTURE_GIFT_CERTIFICATE", "문화상품권", "문화상품권")
            }
            PaymentMethod::BookGiftCertificate => {
                ("BOOK_GIFT_CERTIFICATE", "도서문화상품권", "도서문화상품권")
            }
            PaymentMethod::GameGiftCertificate => {
                ("GAME_GIFT_CERTIFICATE", "게임문화상품권", "게임문화상품권")
            }
        }
    }

    pub fn code(self) -> &'static str {
        self.entry().0
    }

    pub fn korean_name(self) -> &'static str {
        self.entry().1
    }

    pub fn description(self) -> &'static str {
        self.entry().2
    }

    pub fn from_value(value: &str) -> Option<PaymentMethod> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        PaymentMethod::ALL
            .iter()
            .copied()
            .find(|method| method.code().eq_ignore_ascii_case(trimmed))
            .or_else(|| {
                PaymentMethod::ALL
                    .iter()
                    .copied()
                    .find(|method| method.korean_name() == trimmed)
            })
    }

    pub fn to_english_code(value: &str) -> String {
        if value.trim().is_empty() {
            return "UNKNOWN".to_string();
        }
        match PaymentMethod::from_value(value) {
            Some(method) => method.code().to_string(),
            None => value.trim().to_uppercase(),
        }
    }

    pub fn to_korean_name(value: &str) -> String {
        match PaymentMethod::from_value(value) {
            Some(method) => method.korean_name().to_string(),
            None => value.to_string(),
        }
    }

    pub fn is_valid(value: &str) -> bool {
        PaymentMethod::from_value(value).is_some()
    }
}
