//! ShapeFactory - 乱数値から図形を生成する Factory Pattern 実装

use crate::shapes::{Shape, ShapeA, ShapeB, ShapeC, ShapeD, ShapeE, StaticShape, Variant};

/// 乱数値 `r` から図形を1つ生成するファクトリ
///
/// 種類は [`Variant::for_draw`] のバケット規則で決まり、長さは `r` そのもの。
pub trait ShapeFactory {
    type Output: Shape;

    fn create(&self, r: f64) -> Self::Output;
}

/// トレイトオブジェクト (`Box<dyn Shape>`) を生成するファクトリ
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicShapeFactory;

impl ShapeFactory for DynamicShapeFactory {
    type Output = Box<dyn Shape>;

    fn create(&self, r: f64) -> Box<dyn Shape> {
        match Variant::for_draw(r) {
            Variant::A => Box::new(ShapeA::new(r)),
            Variant::B => Box::new(ShapeB::new(r)),
            Variant::C => Box::new(ShapeC::new(r)),
            Variant::D => Box::new(ShapeD::new(r)),
            Variant::E => Box::new(ShapeE::new(r)),
        }
    }
}

/// 列挙型 (`StaticShape`) を生成するファクトリ
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticShapeFactory;

impl ShapeFactory for StaticShapeFactory {
    type Output = StaticShape;

    fn create(&self, r: f64) -> StaticShape {
        StaticShape::new(Variant::for_draw(r), r)
    }
}
