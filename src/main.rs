use clap::Parser;
use device_inventory::{cli, config, convert, error, import, logging, verify};
use device_inventory::store::Register;
use cli::{Cli, Commands};
use config::Config;
use dialoguer::Confirm;
use error::{InventoryError, Result};
use inventory_common::ExtractOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Convert { input, output, field_mode, lenient, sheet } => {
            println!("📋 device-inventory - 変換\n");

            let output = output.unwrap_or_else(|| convert::default_output_path(&input));
            let options = convert::ConvertOptions {
                extract: ExtractOptions {
                    resolution: field_mode.into(),
                    strict: config.strict && !lenient,
                },
                sheet,
            };

            println!("- 読み込み中: {} (識別: {})", input.display(), field_mode);
            let summary = convert::convert_file(&input, &output, &options)?;

            for warning in &summary.warnings {
                println!("⚠ {}", warning);
            }
            if summary.skipped_rows > 0 {
                println!("- 対象外の行: {}行", summary.skipped_rows);
            }

            println!("✔ 設備種類数: {}", summary.categories.len());
            println!("✔ 設備数: {}", summary.device_count);
            println!("✔ 設備種類: {}", summary.categories.join(", "));
            println!("✔ 出力: {}", summary.output.display());

            println!("\n✅ 変換完了");
        }

        Commands::Import { input, register, clear_existing, yes, skip_invalid_dates } => {
            println!("📥 device-inventory - 取り込み\n");

            let register_path = config.resolve_register_path(register)?;

            if clear_existing && !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("{} の既存データを削除しますか？", register_path.display()))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    return Err(InventoryError::Cancelled);
                }
            }

            let options = import::ImportOptions {
                clear_existing,
                skip_invalid_dates,
                ..import::ImportOptions::from_config(&config)
            };

            println!("- 取り込み中: {}", input.display());
            let report = import::import_file_with_progress(&input, &register_path, &options, |created| {
                println!("- {} 件の設備を作成...", created);
            })?;

            if let Some((devices, types)) = report.cleared {
                println!("- 削除: 設備 {}件、設備種類 {}件", devices, types);
            }
            for skipped in &report.skipped {
                println!("⚠ スキップ [{}] {}: {}", skipped.index, skipped.label, skipped.reason);
            }
            if report.dates_defaulted > 0 {
                println!(
                    "⚠ 既定日付 ({}) を使用: {}件",
                    options.default_install_date.format("%Y/%m/%d"),
                    report.dates_defaulted
                );
            }

            println!(
                "✔ 新規: 設備種類 {}件（自動作成 {}件）、設備 {}件",
                report.types_created, report.types_auto_created, report.devices_created
            );
            if !report.skipped.is_empty() {
                println!("✔ スキップ: {}件（重複または不完全）", report.skipped.len());
            }
            println!(
                "✔ 台帳合計: 設備種類 {}件、設備 {}件",
                report.total_types, report.total_devices
            );
            println!("✔ 台帳: {}", register_path.display());

            println!("\n✅ 取り込み完了");
        }

        Commands::Verify { register, limit } => {
            let register_path = config.resolve_register_path(register)?;
            if !register_path.exists() {
                return Err(InventoryError::FileNotFound(register_path.display().to_string()));
            }

            let register = Register::load(&register_path)?;
            println!("台帳: {}\n", register_path.display());
            verify::print_summary(&verify::summarize(&register, limit));
        }

        Commands::Config { set_register, set_default_date, show } => {
            let mut config = config;

            if let Some(path) = set_register {
                config.set_register_path(path)?;
                println!("✔ 台帳ファイルを設定しました");
            }

            if let Some(date) = set_default_date {
                config.set_default_install_date(&date)?;
                println!("✔ 既定の安裝日期を設定しました");
            }

            if show {
                println!("設定:");
                println!("  台帳ファイル: {}", config.resolve_register_path(None)?.display());
                println!("  既定の安裝日期: {}", config.default_install_date.format("%Y/%m/%d"));
                println!("  日付形式: {}", config.date_formats.join(", "));
                println!("  厳格モード: {}", if config.strict { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
