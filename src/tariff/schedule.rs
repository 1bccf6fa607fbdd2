//! 누진 요금 구간(bracket)과 요금표(schedule) 정의.

/// 누진 요금의 한 구간. `upper`가 `None`이면 상한이 없는 마지막 구간이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBracket {
    /// 구간 하한 (포함)
    pub lower: u64,
    /// 구간 상한 (포함). `None`이면 무제한
    pub upper: Option<u64>,
    /// 단위당 요금
    pub unit_rate: f64,
    /// 화면 표시용 짧은 설명
    pub label: &'static str,
}

impl RateBracket {
    pub const fn bounded(lower: u64, upper: u64, unit_rate: f64, label: &'static str) -> Self {
        Self {
            lower,
            upper: Some(upper),
            unit_rate,
            label,
        }
    }

    pub const fn unbounded(lower: u64, unit_rate: f64, label: &'static str) -> Self {
        Self {
            lower,
            upper: None,
            unit_rate,
            label,
        }
    }

    /// 이 구간이 소화할 수 있는 사용량. 무제한 구간은 남은 사용량 전부를 받는다.
    pub fn capacity(&self, remaining: u64) -> u64 {
        match self.upper {
            Some(upper) => upper - self.lower + 1,
            None => remaining,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.upper.is_none()
    }
}

/// 요금표. 구간 목록 + 기본요금 + 세율로 구성되며 내장 상수로만 존재한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSchedule {
    pub brackets: &'static [RateBracket],
    /// 기본요금. 0이면 명세서에 항목을 만들지 않는다.
    pub base_fee: f64,
    /// 세율(0~1). 0이면 세금 항목을 만들지 않는다.
    pub tax_rate: f64,
}

/// 요금표 구성이 잘못되었을 때의 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// 구간이 하나도 없음
    Empty,
    /// 첫 구간이 0에서 시작하지 않음
    DoesNotStartAtZero(u64),
    /// 상한이 하한보다 작음
    InvertedBracket { index: usize },
    /// 앞 구간 상한 + 1 과 다음 구간 하한이 다름
    Gap { index: usize },
    /// 마지막이 아닌 구간이 무제한이거나 마지막 구간이 유한함
    MisplacedUnbounded { index: usize },
    /// 단가/기본요금/세율이 음수이거나 유한하지 않음
    InvalidAmount(&'static str),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::Empty => write!(f, "요금표에 구간이 없습니다"),
            ScheduleError::DoesNotStartAtZero(lower) => {
                write!(f, "첫 구간이 0이 아닌 {lower}에서 시작합니다")
            }
            ScheduleError::InvertedBracket { index } => {
                write!(f, "{index}번 구간의 상한이 하한보다 작습니다")
            }
            ScheduleError::Gap { index } => {
                write!(f, "{index}번 구간이 앞 구간과 연속되지 않습니다")
            }
            ScheduleError::MisplacedUnbounded { index } => {
                write!(f, "{index}번 구간의 무제한 여부가 잘못되었습니다")
            }
            ScheduleError::InvalidAmount(what) => write!(f, "잘못된 금액 값: {what}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl RateSchedule {
    /// 구간들이 0부터 빈틈 없이 이어지고 마지막 구간만 무제한인지 검사한다.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let first = self.brackets.first().ok_or(ScheduleError::Empty)?;
        if first.lower != 0 {
            return Err(ScheduleError::DoesNotStartAtZero(first.lower));
        }
        if !(self.base_fee.is_finite() && self.base_fee >= 0.0) {
            return Err(ScheduleError::InvalidAmount("base_fee"));
        }
        if !(self.tax_rate.is_finite() && self.tax_rate >= 0.0) {
            return Err(ScheduleError::InvalidAmount("tax_rate"));
        }

        let last = self.brackets.len() - 1;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if !(bracket.unit_rate.is_finite() && bracket.unit_rate >= 0.0) {
                return Err(ScheduleError::InvalidAmount("unit_rate"));
            }
            if bracket.is_unbounded() != (index == last) {
                return Err(ScheduleError::MisplacedUnbounded { index });
            }
            if let Some(upper) = bracket.upper {
                if upper < bracket.lower {
                    return Err(ScheduleError::InvertedBracket { index });
                }
                let next = &self.brackets[index + 1];
                if upper + 1 != next.lower {
                    return Err(ScheduleError::Gap { index: index + 1 });
                }
            }
        }
        Ok(())
    }

    pub fn has_tax(&self) -> bool {
        self.tax_rate > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAPPED: &[RateBracket] = &[
        RateBracket::bounded(0, 10, 1.0, "0-10"),
        RateBracket::unbounded(12, 2.0, "12+"),
    ];

    const OPEN_MIDDLE: &[RateBracket] = &[
        RateBracket::unbounded(0, 1.0, "0+"),
        RateBracket::unbounded(1, 2.0, "1+"),
    ];

    #[test]
    fn gap_between_brackets_is_reported() {
        let schedule = RateSchedule {
            brackets: GAPPED,
            base_fee: 0.0,
            tax_rate: 0.0,
        };
        assert_eq!(schedule.validate(), Err(ScheduleError::Gap { index: 1 }));
    }

    #[test]
    fn unbounded_bracket_must_be_last() {
        let schedule = RateSchedule {
            brackets: OPEN_MIDDLE,
            base_fee: 0.0,
            tax_rate: 0.0,
        };
        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::MisplacedUnbounded { index: 0 })
        );
    }

    #[test]
    fn empty_schedule_is_rejected() {
        let schedule = RateSchedule {
            brackets: &[],
            base_fee: 0.0,
            tax_rate: 0.0,
        };
        assert_eq!(schedule.validate(), Err(ScheduleError::Empty));
    }

    #[test]
    fn capacity_counts_both_bounds() {
        let b = RateBracket::bounded(121, 330, 2.38, "121-330");
        assert_eq!(b.capacity(1_000), 210);
        let open = RateBracket::unbounded(1001, 6.41, "1001+");
        assert_eq!(open.capacity(42), 42);
    }
}
