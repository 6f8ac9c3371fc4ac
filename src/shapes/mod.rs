//! 図形の抽象化と5種類の具象型
//!
//! 5つの具象型は振る舞いが同一で、異なる型として存在すること自体が目的。
//! 1つのコレクションに混在させることで、最適化による脱仮想化を防ぐ。

pub mod static_shape;

use mockall::automock;

pub use static_shape::StaticShape;

/// 図形の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    A,
    B,
    C,
    D,
    E,
}

impl Variant {
    /// 全種類（バケット順）
    pub const ALL: [Variant; 5] = [Variant::A, Variant::B, Variant::C, Variant::D, Variant::E];

    /// 乱数値 `r` (`[0, 1)`) からバケット規則で種類を決定
    ///
    /// `[0,1)` を幅0.2の5区間に分け、境界値は下側の区間に含める。
    pub fn for_draw(r: f64) -> Self {
        if r <= 0.2 {
            Variant::A
        } else if r <= 0.4 {
            Variant::B
        } else if r <= 0.6 {
            Variant::C
        } else if r <= 0.8 {
            Variant::D
        } else {
            Variant::E
        }
    }

    /// バケット順のインデックス
    pub fn index(self) -> usize {
        self as usize
    }
}

/// 図形の抽象化トレイト
#[automock]
pub trait Shape {
    /// 図形の値を計算（計測対象の多態的な操作）
    fn compute_value(&self) -> f64;

    /// 具象型の種類
    fn variant(&self) -> Variant;
}

// Shape for Box<dyn Shape>
// vtable経由で呼び出すため、ジェネリックなコードから動的ディスパッチを計測できる
impl Shape for Box<dyn Shape> {
    fn compute_value(&self) -> f64 {
        self.as_ref().compute_value()
    }

    fn variant(&self) -> Variant {
        self.as_ref().variant()
    }
}

macro_rules! define_shape {
    ($(#[$meta:meta])* $name:ident => $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            pub length: f64,
        }

        impl $name {
            pub fn new(length: f64) -> Self {
                Self { length }
            }
        }

        impl Shape for $name {
            fn compute_value(&self) -> f64 {
                self.length
            }

            fn variant(&self) -> Variant {
                Variant::$variant
            }
        }
    };
}

define_shape!(
    /// バケットA (`r <= 0.2`)
    ShapeA => A
);
define_shape!(ShapeB => B);
define_shape!(ShapeC => C);
define_shape!(ShapeD => D);
define_shape!(
    /// バケットE (`0.8 < r`)
    ShapeE => E
);
