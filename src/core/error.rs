// ベンチマーク専用のカスタムエラー型定義

use thiserror::Error;

/// ベンチマーク固有のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("リソース不足エラー: {resource_type} - {details}")]
    ResourceExhaustionError {
        resource_type: String,
        details: String,
        #[source]
        source: std::collections::TryReserveError,
    },
}

impl BenchError {
    /// リソース不足エラーの作成
    pub fn resource_exhaustion(
        resource_type: impl Into<String>,
        details: impl Into<String>,
        source: std::collections::TryReserveError,
    ) -> Self {
        Self::ResourceExhaustionError {
            resource_type: resource_type.into(),
            details: details.into(),
            source,
        }
    }
}

/// ベンチマーク処理の結果型
pub type BenchResult<T> = Result<T, BenchError>;
