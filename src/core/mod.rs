// コアレイヤー - 設定とエラー定義
// 他のレイヤーから参照される基本的な定義を提供

pub mod error;
pub mod static_config;

// 公開API
pub use error::{BenchError, BenchResult};
pub use static_config::{BenchConfig, DefaultConfig, TestingConfig};
