#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasyPayProvider {
    KakaoPay,
    NaverPay,
    TossPay,
    SamsungPay,
    LPay,
    Payco,
    SsgPay,
    ApplePay,
}

impl EasyPayProvider {
    pub const ALL: [EasyPayProvider; 8] = [
        EasyPayProvider::KakaoPay,
        EasyPayProvider::NaverPay,
        EasyPayProvider::TossPay,
        EasyPayProvider::SamsungPay,
        EasyPayProvider::LPay,
        EasyPayProvider::Payco,
        EasyPayProvider::SsgPay,
        EasyPayProvider::ApplePay,
    ];

    fn entry(self) -> (&'static str, &'static str) {
        match self {
            EasyPayProvider::KakaoPay => ("KAKAOPAY", "카카오페이"),
            EasyPayProvider::NaverPay => ("NAVERPAY", "네이버페이"),
            EasyPayProvider::TossPay => ("TOSSPAY", "토스페이"),
            EasyPayProvider::SamsungPay => ("SAMSUNGPAY", "삼성페이"),
            EasyPayProvider::LPay => ("LPAY", "LG페이"),
            EasyPayProvider::Payco => ("PAYCO", "페이코"),
            EasyPayProvider::SsgPay => ("SSGPAY", "SSG페이"),
            EasyPayProvider::ApplePay => ("APPLEPAY", "애플페이"),
        }
    }

    pub fn code(self) -> &'static str {
        self.entry().0
    }

    pub fn korean_name(self) -> &'static str {
        self.entry().1
    }

    pub fn from_value(value: &str) -> Option<EasyPayProvider> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        EasyPayProvider::ALL
            .iter()
            .copied()
            .find(|provider| provider.code().eq_ignore_ascii_case(trimmed))
            .or_else(|| {
                EasyPayProvider::ALL
                    .iter()
                    .copied()
                    .find(|provider| provider.korean_name() == trimmed)
            })
    }

    pub fn to_english_code(value: &str) -> String {
        match EasyPayProvider::from_value(value) {
            Some(provider) => provider.code().to_string(),
            None => value.trim().to_uppercase(),
        }
    }

    pub fn to_korean_name(value: &str) -> String {
        match EasyPayProvider::from_value(value) {
            Some(provider) => provider.korean_name().to_string(),
            None => value.to_string(),
        }
    }

    pub fn is_valid(value: &str) -> bool {
        EasyPayProvider::from_value(value).is_some()
    }
}
