use anyhow::{Context, Result};
use dispatch_bench::{core::DefaultConfig, DispatchBenchmark};

// コマンドライン引数は読まない（要素数は DefaultConfig で固定）
fn run() -> Result<()> {
    let benchmark = DispatchBenchmark::<DefaultConfig>::new();
    let mut rng = rand::thread_rng();

    let report = benchmark
        .run_dynamic(&mut rng)
        .context("failed to build shape collection")?;

    println!("{report}");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(error) = run() {
        eprintln!("❌ エラー: {error:#}");
        std::process::exit(1);
    }
}
