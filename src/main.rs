use anyhow::Context;
use clap::Parser;
use roster_match::{cli, config, export, loader};
use cli::{Cli, Commands};
use config::Config;
use roster_match_common::export::excel_core::ExcelOptions;
use roster_match_common::{duplicate_names, process, ColumnMap, Field, HeaderAliases, MatchSummary};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match (Config::load(), &cli.command) {
        (Ok(config), _) => config,
        // 壊れた設定ファイルでも --reset は通す
        (Err(_), Commands::Config { reset: true, .. }) => Config::default(),
        (Err(e), _) => return Err(e).context("設定ファイルの読み込みに失敗しました"),
    };

    match cli.command {
        Commands::Match { primary, reference, format, output, stem } => {
            println!("📋 roster-match - 教室割り当て\n");

            let primary = loader::require_input(primary.as_deref(), "試験結果ファイル")?;
            let reference = loader::require_input(reference.as_deref(), "名簿ファイル")?;
            let aliases = &config.extra_aliases;

            // 1. 試験結果
            println!("[1/4] 試験結果を読み込み中...");
            let students = loader::load_students(primary, aliases)
                .with_context(|| format!("{} を読み込めません", primary.display()))?;
            print_missing_columns(&students.missing_columns);
            println!("✔ {}件\n", students.len());

            // 2. 名簿
            println!("[2/4] 名簿を読み込み中...");
            let roster = loader::load_roster(reference, aliases)
                .with_context(|| format!("{} を読み込めません", reference.display()))?;
            print_missing_columns(&roster.missing_columns);
            let duplicates = duplicate_names(&roster.records);
            if !duplicates.is_empty() {
                println!("⚠ 名簿に重複した氏名が{}件あります（先頭の行を使用）", duplicates.len());
            }
            println!("✔ {}件\n", roster.len());

            // 3. 照合
            println!("[3/4] 照合中...");
            let results = process(&students.records, &roster.records);
            let summary = MatchSummary::from_results(&results);
            print_summary(&summary);

            // 4. 出力
            println!("[4/4] エクスポート中...");
            let format = format.unwrap_or(config.default_format);
            let stem = stem.unwrap_or_else(|| config.output_stem.clone());
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            let excel_options = ExcelOptions {
                column_width: config.column_width,
                ..Default::default()
            };

            export::export_results(&results, format, &output, &stem, &excel_options)
                .context("エクスポートに失敗しました")?;

            println!("\n✅ 完了");
        }

        Commands::Headers { file } => {
            show_headers(&file, &config.extra_aliases)?;
        }

        Commands::Config { show, reset } => {
            let mut config = config;

            if reset {
                config = Config::default();
                config.save()?;
                println!("✔ 設定を初期化しました: {}", Config::config_path()?.display());
            }

            if show || !reset {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  出力ファイル名: {}", config.output_stem);
                println!("  出力形式: {}", config.default_format);
                println!("  列幅: {}", config.column_width);
                for field in Field::PRIMARY.iter().chain(Field::REFERENCE.iter()) {
                    println!("  {}: {}", field, config.extra_aliases.aliases(*field).join(" | "));
                }
            }
        }
    }

    Ok(())
}

fn print_missing_columns(missing: &[Field]) {
    for field in missing {
        println!("⚠ 列 '{}' が見つかりません（空欄として扱います）", field);
    }
}

fn print_summary(summary: &MatchSummary) {
    println!("✔ 照合完了: {}件", summary.total);
    println!("  教室あり: {}", summary.assigned);
    println!("  教室なし: {}", summary.found_but_no_classroom);
    println!("  未検出:   {}\n", summary.not_found);
}

fn show_headers(path: &Path, aliases: &HeaderAliases) -> anyhow::Result<()> {
    let table = loader::load_table(path)
        .with_context(|| format!("{} を読み込めません", path.display()))?;

    println!("見出し ({}):", path.display());
    for (idx, header) in table.headers.iter().enumerate() {
        println!("  {}: {}", idx + 1, header);
    }
    println!("データ行: {}\n", table.len());

    let fields: Vec<Field> = Field::PRIMARY.iter().chain(Field::REFERENCE.iter()).copied().collect();
    let columns = ColumnMap::resolve(&table.headers, &fields, aliases);
    println!("列の解決:");
    for field in &fields {
        let indices = columns.indices(*field);
        if indices.is_empty() {
            println!("  {:<15} -", field.canonical());
        } else {
            let found: Vec<String> = indices
                .iter()
                .map(|&i| format!("{} ({})", i + 1, table.headers[i]))
                .collect();
            println!("  {:<15} {}", field.canonical(), found.join(", "));
        }
    }

    Ok(())
}
