// src/domain/status.rs

use std::fmt;

/// Daily workload category. `severity()` ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLabel {
    TurnaroundBoth,
    DoubleCheckoutOnly,
    SingleChangeover,
    CheckInOnly,
    Free,
}

impl StatusLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusLabel::TurnaroundBoth => "Turnaround in BOTH",
            StatusLabel::DoubleCheckoutOnly => "Double Checkout Only",
            StatusLabel::SingleChangeover => "Single Changeover",
            StatusLabel::CheckInOnly => "Check-in Only",
            StatusLabel::Free => "Free",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            StatusLabel::TurnaroundBoth => "🔴",
            StatusLabel::DoubleCheckoutOnly => "🔶",
            StatusLabel::SingleChangeover => "🟡",
            StatusLabel::CheckInOnly => "🟢",
            StatusLabel::Free => "🔷",
        }
    }

    /// 0xRRGGBB, display only.
    pub fn rgb(self) -> u32 {
        match self {
            StatusLabel::TurnaroundBoth => 0xb30000,
            StatusLabel::DoubleCheckoutOnly => 0xe65100,
            StatusLabel::SingleChangeover => 0xf1c232,
            StatusLabel::CheckInOnly => 0x4caf50,
            StatusLabel::Free => 0xa1d99b,
        }
    }

    pub fn color(self) -> String {
        format!("#{:06x}", self.rgb())
    }

    /// Higher is worse. Display only; nothing downstream branches on it.
    pub fn severity(self) -> u8 {
        match self {
            StatusLabel::TurnaroundBoth => 4,
            StatusLabel::DoubleCheckoutOnly => 3,
            StatusLabel::SingleChangeover => 2,
            StatusLabel::CheckInOnly => 1,
            StatusLabel::Free => 0,
        }
    }

    /// The only category that raises the upcoming-days alert.
    pub fn is_alert(self) -> bool {
        self == StatusLabel::TurnaroundBoth
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.as_str())
    }
}
