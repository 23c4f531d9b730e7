#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardCompany {
    Kookmin,
    KakaoBank,
    Hana,
    TossBank,
    Kdb,
    Bc,
    WooriBc,
    Suhyeop,
    Jeonbuk,
    Citi,
    Post,
    Saemaul,
    SavingBank,
    KBank,
    IbkBc,
    Shinhan,
    Jeju,
    Gwangju,
    Samsung,
    Hyundai,
    Shinhyeop,
    Lotte,
    Nonghyeop,
    Woori,
}

impl CardCompany {
    pub const ALL: [CardCompany; 24] = [
        CardCompany::Kookmin,
        CardCompany::KakaoBank,
        CardCompany::Hana,
        CardCompany::TossBank,
        CardCompany::Kdb,
        CardCompany::Bc,
        CardCompany::WooriBc,
        CardCompany::Suhyeop,
        CardCompany::Jeonbuk,
        CardCompany::Citi,
        CardCompany::Post,
        CardCompany::Saemaul,
        CardCompany::SavingBank,
        CardCompany::KBank,
        CardCompany::IbkBc,
        CardCompany::Shinhan,
        CardCompany::Jeju,
        CardCompany::Gwangju,
        CardCompany::Samsung,
        CardCompany::Hyundai,
        CardCompany::Shinhyeop,
        CardCompany::Lotte,
        CardCompany::Nonghyeop,
        CardCompany::Woori,
    ];

    fn entry(self) -> (&'static str, &'static str, &'static str) {
        match self {
            CardCompany::Kookmin => ("11", "국민", "KB국민카드"),
            CardCompany::KakaoBank => ("15", "카카오뱅크", "카카오뱅크"),
            CardCompany::Hana => ("21", "하나", "하나카드"),
            CardCompany::TossBank => ("24", "토스뱅크", "토스뱅크"),
            CardCompany::Kdb => ("30", "산업", "한국산업은행"),
            CardCompany::Bc => ("31", "BC", "BC카드"),
            CardCompany::WooriBc => ("33", "우리", "우리BC카드(BC 매입)"),
            CardCompany::Suhyeop => ("34", "수협", "Sh수협은행"),
            CardCompany::Jeonbuk => ("35", "전북", "전북은행"),
            CardCompany::Citi => ("36", "씨티", "씨티카드"),
            CardCompany::Post => ("37", "우체국", "우체국예금보험"),
            CardCompany::Saemaul => ("38", "새마을", "새마을금고"),
            CardCompany::SavingBank => ("39", "저축", "저축은행중앙회"),
            CardCompany::KBank => ("3A", "케이뱅크", "케이뱅크"),
            CardCompany::IbkBc => ("3K", "기업비씨", "기업 BC"),
            CardCompany::Shinhan => ("41", "신한", "신한카드"),
            CardCompany::Jeju => ("42", "제주", "제주은행"),
            CardCompany::Gwangju => ("46", "광주", "광주은행"),
            CardCompany::Samsung => ("51", "삼성", "삼성카드"),
            CardCompany::Hyundai => ("61", "현대", "현대카드"),
            CardCompany::Shinhyeop => ("62", "신협", "신협"),
            CardCompany::Lotte => ("71", "롯데", "롯데카드"),
            CardCompany::Nonghyeop => ("91", "농협", "NH농협카드"),
            CardCompany::Woori => ("W1", "우리", "우리카드(우리 매입)"),
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

    pub fn from_code(code: &str) -> Option<CardCompany> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return None;
        }
        CardCompany::ALL
            .iter()
            .copied()
            .find(|company| company.code().eq_ignore_ascii_case(trimmed))
    }

    pub fn to_korean_name(code: &str) -> String {
        match CardCompany::from_code(code) {
            Some(company) => company.korean_name().to_string(),
            None => code.to_string(),
        }
    }

    pub fn to_full_name(code: &str) -> String {
        match CardCompany::from_code(code) {
            Some(company) => company.full_name().to_string(),
            None => code.to_string(),
        }
    }

    pub fn is_valid(code: &str) -> bool {
        CardCompany::from_code(code).is_some()
    }
}
