//! 閉じた列挙型による静的ディスパッチ版
//!
//! vtableを使わず、1つの `match` で種類ごとの実装を選択する。

use super::{Shape, Variant};

/// 5種類の図形を値として保持する列挙型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StaticShape {
    A(f64),
    B(f64),
    C(f64),
    D(f64),
    E(f64),
}

impl StaticShape {
    /// 種類と長さから作成
    pub fn new(variant: Variant, length: f64) -> Self {
        match variant {
            Variant::A => StaticShape::A(length),
            Variant::B => StaticShape::B(length),
            Variant::C => StaticShape::C(length),
            Variant::D => StaticShape::D(length),
            Variant::E => StaticShape::E(length),
        }
    }
}

impl Shape for StaticShape {
    fn compute_value(&self) -> f64 {
        match *self {
            StaticShape::A(length)
            | StaticShape::B(length)
            | StaticShape::C(length)
            | StaticShape::D(length)
            | StaticShape::E(length) => length,
        }
    }

    fn variant(&self) -> Variant {
        match self {
            StaticShape::A(_) => Variant::A,
            StaticShape::B(_) => Variant::B,
            StaticShape::C(_) => Variant::C,
            StaticShape::D(_) => Variant::D,
            StaticShape::E(_) => Variant::E,
        }
    }
}
