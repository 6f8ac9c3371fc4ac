//! 計測結果のレポート

use std::fmt;
use std::time::Duration;

/// 1回の計測パスの結果
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub label: String,
    pub element_count: usize,
    pub elapsed: Duration,
    pub sum: f64,
}

impl BenchmarkReport {
    pub fn new(
        label: impl Into<String>,
        element_count: usize,
        elapsed: Duration,
        sum: f64,
    ) -> Self {
        Self {
            label: label.into(),
            element_count,
            elapsed,
            sum,
        }
    }

    /// 1要素あたりの平均時間（マイクロ秒）
    ///
    /// 要素数0の場合は0.0を返す（NaNにはしない）。
    pub fn average_us_per_iteration(&self) -> f64 {
        if self.element_count == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() / self.element_count as f64 * 1_000_000.0
    }

    /// 合計時間（ミリ秒）
    pub fn total_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

// 標準出力の2行フォーマット
impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n = {} ", self.element_count)?;
        write!(
            f,
            "{} : {:.6} us per iteration ({:.6} ms total) [{:.6}]",
            self.label,
            self.average_us_per_iteration(),
            self.total_ms(),
            self.sum
        )
    }
}
