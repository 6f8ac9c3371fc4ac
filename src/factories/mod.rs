//! Factory Pattern による図形とコレクションの生成

pub mod collection;
pub mod shape_factory;

pub use collection::{DynamicCollection, ShapeCollection, StaticCollection};
pub use shape_factory::{DynamicShapeFactory, ShapeFactory, StaticShapeFactory};
