#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankCode {
    Kdb,
    Ibk,
    Kookmin,
    Suhyeop,
    Nonghyeop,
    LocalNonghyeop,
    Woori,
    Sc,
    Citi,
    SuhyeopFederation,
    Daegu,
    Busan,
    Gwangju,
    Jeju,
    Jeonbuk,
    Kyongnam,
    Saemaul,
    Shinhyeop,
    SavingBank,
    Hsbc,
    Boa,
    Sanlim,
    Post,
    Hana,
    Shinhan,
    KBank,
    KakaoBank,
    TossBank,
}

impl BankCode {
    pub const ALL: [BankCode; 28] = [
        BankCode::Kdb,
        BankCode::Ibk,
        BankCode::Kookmin,
        BankCode::Suhyeop,
        BankCode::Nonghyeop,
        BankCode::LocalNonghyeop,
        BankCode::Woori,
        BankCode::Sc,
        BankCode::Citi,
        BankCode::SuhyeopFederation,
        BankCode::Daegu,
        BankCode::Busan,
        BankCode::Gwangju,
        BankCode::Jeju,
        BankCode::Jeonbuk,
        BankCode::Kyongnam,
        BankCode::Saemaul,
        BankCode::Shinhyeop,
        BankCode::SavingBank,
        BankCode::Hsbc,
        BankCode::Boa,
        BankCode::Sanlim,
        BankCode::Post,
        BankCode::Hana,
        BankCode::Shinhan,
        BankCode::KBank,
        BankCode::KakaoBank,
        BankCode::TossBank,
    ];

    fn entry(self) -> (&'static str, &'static str, &'static str) {
        match self {
            BankCode::Kdb => ("02", "산업", "한국산업은행"),
            BankCode::Ibk => ("03", "기업", "IBK기업은행"),
            BankCode::Kookmin => ("06", "국민", "KB국민은행"),
            BankCode::Suhyeop => ("07", "수협", "Sh수협은행"),
            BankCode::Nonghyeop => ("11", "농협", "NH농협은행"),
            BankCode::LocalNonghyeop => ("12", "단위농협", "단위농협(지역농축협)"),
            BankCode::Woori => ("20", "우리", "우리은행"),
            BankCode::Sc => ("23", "SC제일", "SC제일은행"),
            BankCode::Citi => ("27", "씨티", "씨티은행"),
            BankCode::SuhyeopFederation => ("30", "수협중앙회", "수협중앙회"),
            BankCode::Daegu => ("31", "대구", "iM뱅크(대구)"),
            BankCode::Busan => ("32", "부산", "부산은행"),
            BankCode::Gwangju => ("34", "광주", "광주은행"),
            BankCode::Jeju => ("35", "제주", "제주은행"),
            BankCode::Jeonbuk => ("37", "전북", "전북은행"),
            BankCode::Kyongnam => ("39", "경남", "경남은행"),
            BankCode::Saemaul => ("45", "새마을", "새마을금고"),
            BankCode::Shinhyeop => ("48", "신협", "신협"),
            BankCode::SavingBank => ("50", "저축", "저축은행중앙회"),
            BankCode::Hsbc => ("54", "HSBC", "홍콩상하이은행"),
            BankCode::Boa => ("60", "BOA", "Bank of America"),
            BankCode::Sanlim => ("64", "산림", "산림조합"),
            BankCode::Post => ("71", "우체국", "우체국예금보험"),
            BankCode::Hana => ("81", "하나", "하나은행"),
            BankCode::Shinhan => ("88", "신한", "신한은행"),
            BankCode::KBank => ("89", "케이", "케이뱅크"),
            BankCode::KakaoBank => ("90", "카카오", "카카오뱅크"),
            BankCode::TossBank => ("92", "토스", "토스뱅크"),
        }
    }

    pub fn code(self) -> &'static str {
        self.entry().0
    }

    pub fn korean_name(self) -> &'static str {
        self.entry().1
    }

    pub fn full_name(self) -> &'static str {
        self.entry().2
    }

    pub fn from_code(code: &str) -> Option<BankCode> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return None;
        }
        BankCode::ALL
            .iter()
            .copied()
            .find(|bank| bank.code().eq_ignore_ascii_case(trimmed))
    }

    pub fn to_korean_name(code: &str) -> String {
        match BankCode::from_code(code) {
            Some(bank) => bank.korean_name().to_string(),
            None => code.to_string(),
        }
    }

    pub fn to_full_name(code: &str) -> String {
        match BankCode::from_code(code) {
            Some(bank) => bank.full_name().to_string(),
            None => code.to_string(),
        }
    }

    pub fn is_valid(code: &str) -> bool {
        BankCode::from_code(code).is_some()
    }
}
