#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Ready,
    InProgress,
    WaitingForDeposit,
    Done,
    Canceled,
    PartialCanceled,
    Aborted,
    Expired,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 8] = [
        PaymentStatus::Ready,
        PaymentStatus::InProgress,
        PaymentStatus::WaitingForDeposit,
        PaymentStatus::Done,
        PaymentStatus::Canceled,
        PaymentStatus::PartialCanceled,
        PaymentStatus::Aborted,
        PaymentStatus::Expired,
    ];

    fn entry(self) -> (&'static str, &'static str) {
        match self {
            PaymentStatus::Ready => ("READY", "결제 대기 중"),
            PaymentStatus::InProgress => ("IN_PROGRESS", "결제 진행 중"),
            PaymentStatus::WaitingForDeposit => ("WAITING_FOR_DEPOSIT", "입금 대기 중"),
            PaymentStatus::Done => ("DONE", "결제 완료"),
            PaymentStatus::Canceled => ("CANCELED", "전체 취소"),
            PaymentStatus::PartialCanceled => ("PARTIAL_CANCELED", "부분 취소"),
            PaymentStatus::Aborted => ("ABORTED", "결제 승인 실패"),
            PaymentStatus::Expired => ("EXPIRED", "결제 만료"),
        }
    }

    pub fn code(self) -> &'static str {
        self.entry().0
    }

    pub fn description(self) -> &'static str {
        self.entry().1
    }

    pub fn from_code(code: &str) -> Option<PaymentStatus> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return None;
        }
        PaymentStatus::ALL
            .iter()
            .copied()
            .find(|status| status.code().eq_ignore_ascii_case(trimmed))
    }

    pub fn is_done(code: &str) -> bool {
        code == PaymentStatus::Done.code()
    }

    pub fn is_canceled(code: &str) -> bool {
        code == PaymentStatus::Canceled.code() || code == PaymentStatus::PartialCanceled.code()
    }

    pub fn is_failed(code: &str) -> bool {
        code == PaymentStatus::Aborted.code() || code == PaymentStatus::Expired.code()
    }

    pub fn is_in_progress(code: &str) -> bool {
        code == PaymentStatus::Ready.code()
            || code == PaymentStatus::InProgress.code()
            || code == PaymentStatus::WaitingForDeposit.code()
    }
}
