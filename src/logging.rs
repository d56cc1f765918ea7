use tracing_subscriber::EnvFilter;

/// ログ出力を初期化（RUST_LOG があれば優先）
///
/// 通常は警告以上、`--verbose` 指定時は debug まで stderr に出力する。
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // テスト等で二重初期化された場合は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
