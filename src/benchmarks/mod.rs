//! パフォーマンス測定モジュール
//!
//! 動的ディスパッチの計測と、静的ディスパッチとの比較を提供

pub mod dispatch;
pub mod report;

pub use dispatch::{
    measure, sum_all, DispatchBenchmark, DYNAMIC_DISPATCH_LABEL, STATIC_DISPATCH_LABEL,
};
pub use report::BenchmarkReport;
