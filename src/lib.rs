pub mod benchmarks;
pub mod core;
pub mod factories;
pub mod shapes;

pub use benchmarks::{measure, sum_all, BenchmarkReport, DispatchBenchmark};
pub use factories::{DynamicCollection, ShapeCollection, StaticCollection};
pub use shapes::{Shape, StaticShape, Variant};
