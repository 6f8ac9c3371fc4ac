//! 図形コレクション - 構築フェーズ
//!
//! 要素は生成順に保持され、その順序がそのまま計測時の走査順になる。

use super::shape_factory::{DynamicShapeFactory, ShapeFactory, StaticShapeFactory};
use crate::benchmarks::sum_all;
use crate::core::{BenchError, BenchResult};
use crate::shapes::{Shape, StaticShape};
use log::debug;
use rand::Rng;

/// 図形を排他的に所有する順序付きコレクション
pub struct ShapeCollection<S> {
    shapes: Vec<S>,
}

/// トレイトオブジェクトのコレクション（動的ディスパッチ）
pub type DynamicCollection = ShapeCollection<Box<dyn Shape>>;

/// 列挙型のコレクション（静的ディスパッチ）
pub type StaticCollection = ShapeCollection<StaticShape>;

impl<S: Shape> ShapeCollection<S> {
    /// `n` 個の一様乱数 `[0, 1)` から図形を生成
    pub fn generate<F, R>(factory: &F, n: usize, rng: &mut R) -> BenchResult<Self>
    where
        F: ShapeFactory<Output = S>,
        R: Rng + ?Sized,
    {
        debug!("generating {n} shapes");
        let mut shapes = Self::reserve(n)?;
        for _ in 0..n {
            let r: f64 = rng.gen();
            shapes.push(factory.create(r));
        }

        let collection = Self { shapes };
        debug!("variant histogram: {:?}", collection.variant_histogram());
        Ok(collection)
    }

    /// 既知の値から決定的に生成
    pub fn from_draws<F>(factory: &F, draws: &[f64]) -> BenchResult<Self>
    where
        F: ShapeFactory<Output = S>,
    {
        let mut shapes = Self::reserve(draws.len())?;
        shapes.extend(draws.iter().map(|&r| factory.create(r)));
        Ok(Self { shapes })
    }

    fn reserve(n: usize) -> BenchResult<Vec<S>> {
        let mut shapes = Vec::new();
        shapes.try_reserve_exact(n).map_err(|source| {
            BenchError::resource_exhaustion(
                "heap",
                format!(
                    "cannot reserve {n} elements of {} bytes",
                    std::mem::size_of::<S>()
                ),
                source,
            )
        })?;
        Ok(shapes)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.shapes
    }

    /// 種類ごとの要素数（`Variant::ALL` の順）
    pub fn variant_histogram(&self) -> [usize; 5] {
        let mut counts = [0; 5];
        for shape in &self.shapes {
            counts[shape.variant().index()] += 1;
        }
        counts
    }

    /// 全要素の値を順に合計
    pub fn sum_all(&self) -> f64 {
        sum_all(&self.shapes)
    }
}

impl DynamicCollection {
    /// トレイトオブジェクトのコレクションを乱数から生成
    pub fn generate_dynamic<R: Rng + ?Sized>(n: usize, rng: &mut R) -> BenchResult<Self> {
        Self::generate(&DynamicShapeFactory, n, rng)
    }
}

impl StaticCollection {
    /// 列挙型のコレクションを乱数から生成
    pub fn generate_static<R: Rng + ?Sized>(n: usize, rng: &mut R) -> BenchResult<Self> {
        Self::generate(&StaticShapeFactory, n, rng)
    }
}

impl<'a, S> IntoIterator for &'a ShapeCollection<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
