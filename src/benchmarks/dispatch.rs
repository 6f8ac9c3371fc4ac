//! 動的ディスパッチの計測
//!
//! 構築 → 1回の計測パス → レポート の順に逐次実行する。

use super::report::BenchmarkReport;
use crate::core::{BenchConfig, BenchResult};
use crate::factories::{DynamicCollection, ShapeCollection, StaticCollection};
use crate::shapes::Shape;
use log::{debug, info};
use rand::Rng;
use std::marker::PhantomData;
use std::time::Instant;

/// バイナリが出力するラベル
pub const DYNAMIC_DISPATCH_LABEL: &str = "dynamic dispatch";

/// 静的ディスパッチ版のラベル
pub const STATIC_DISPATCH_LABEL: &str = "static dispatch";

/// 全要素の `compute_value` を順に合計
///
/// 並べ替えも並列化もしないため、同じ入力に対して丸め誤差まで決定的。
pub fn sum_all<S: Shape>(shapes: &[S]) -> f64 {
    let mut sum = 0.0;
    for shape in shapes {
        sum += shape.compute_value();
    }
    sum
}

/// 1回の `sum_all` パスを計測
pub fn measure<S: Shape>(label: &str, collection: &ShapeCollection<S>) -> BenchmarkReport {
    let start = Instant::now();
    let sum = std::hint::black_box(sum_all(collection.as_slice()));
    let elapsed = start.elapsed();

    debug!("{label}: {} elements in {elapsed:?}", collection.len());
    BenchmarkReport::new(label, collection.len(), elapsed, sum)
}

/// 型レベル設定で要素数を決めるベンチマークドライバ
pub struct DispatchBenchmark<C: BenchConfig> {
    _config: PhantomData<C>,
}

impl<C: BenchConfig> DispatchBenchmark<C> {
    pub const fn new() -> Self {
        Self {
            _config: PhantomData,
        }
    }

    /// トレイトオブジェクトで構築して計測
    pub fn run_dynamic<R: Rng + ?Sized>(&self, rng: &mut R) -> BenchResult<BenchmarkReport> {
        info!(
            "building {} trait objects ({}: {})",
            C::ELEMENT_COUNT,
            C::NAME,
            C::DESCRIPTION
        );
        let collection = DynamicCollection::generate_dynamic(C::ELEMENT_COUNT, rng)?;
        Ok(measure(DYNAMIC_DISPATCH_LABEL, &collection))
    }

    /// 列挙型で構築して計測
    pub fn run_static<R: Rng + ?Sized>(&self, rng: &mut R) -> BenchResult<BenchmarkReport> {
        info!(
            "building {} enum shapes ({}: {})",
            C::ELEMENT_COUNT,
            C::NAME,
            C::DESCRIPTION
        );
        let collection = StaticCollection::generate_static(C::ELEMENT_COUNT, rng)?;
        Ok(measure(STATIC_DISPATCH_LABEL, &collection))
    }
}

impl<C: BenchConfig> Default for DispatchBenchmark<C> {
    fn default() -> Self {
        Self::new()
    }
}
