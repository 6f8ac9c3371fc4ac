//! コンパイル時設定システム
//!
//! 型レベルで設定を表現し、実行時の設定読み込みを持たない：
//! - BenchConfig: 型レベル設定表現
//! - validate_bench_config!: 設定の静的検証

/// 型レベル設定 - コンパイル時設定表現
pub trait BenchConfig {
    /// 設定名（コンパイル時文字列）
    const NAME: &'static str;

    /// 説明（コンパイル時文字列）
    const DESCRIPTION: &'static str;

    /// 生成する図形の数
    const ELEMENT_COUNT: usize;
}

/// デフォルト設定（バイナリが使用する）
pub struct DefaultConfig;

impl BenchConfig for DefaultConfig {
    const NAME: &'static str = "default";
    const DESCRIPTION: &'static str = "100万要素の計測用設定";
    const ELEMENT_COUNT: usize = 1_000_000;
}

/// テスト用設定
pub struct TestingConfig;

impl BenchConfig for TestingConfig {
    const NAME: &'static str = "testing";
    const DESCRIPTION: &'static str = "テスト用軽量設定";
    const ELEMENT_COUNT: usize = 1_000;
}

/// 出荷する設定の要素数が0でないことをコンパイル時に検証
#[macro_export]
macro_rules! validate_bench_config {
    ($config:ty) => {
        const _: () = {
            if <$config as $crate::core::BenchConfig>::ELEMENT_COUNT == 0 {
                panic!("ELEMENT_COUNT must be non-zero");
            }
        };
    };
}

validate_bench_config!(DefaultConfig);
validate_bench_config!(TestingConfig);
