//! Check command

use clap::{Args, ValueEnum};
use depcheck_backends::{Config, Manifest, SmartCommClient, SqliteExecutor, ThunderheadNowClient};
use depcheck_core::logging_facility::{init, Profile};
use depcheck_core::{Category, CheckReport, ExError};
use depcheck_engine::environment::sections;
use depcheck_engine::{run_check, CategoryOutcome, CheckEnvironment};
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Manifest XML file, or a directory of *.xml files
    #[arg(long)]
    pub manifest: PathBuf,

    /// Backend configuration (TOML)
    #[arg(long)]
    pub config: PathBuf,

    /// DB2 region; selects `[DB2.<region>]` overrides and filters grants
    #[arg(long)]
    pub db2_region: Option<String>,

    /// Service user whose table grants are checked
    #[arg(long)]
    pub user_id: Option<String>,

    /// Only run these categories (repeatable)
    #[arg(long, value_parser = parse_category)]
    pub only: Vec<Category>,

    /// Print reports as JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

fn parse_category(slug: &str) -> Result<Category, String> {
    Category::from_slug(slug).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.iter().map(Category::slug).collect();
        format!("unknown category '{}', expected one of: {}", slug, known.join(", "))
    })
}

/// Run the selected checks; `Ok(false)` when any category failed or errored
pub fn execute(args: CheckArgs) -> Result<bool, Box<dyn std::error::Error>> {
    init(match args.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let categories: Vec<Category> = if args.only.is_empty() {
        Category::ALL.to_vec()
    } else {
        args.only.clone()
    };

    let config = Config::load(&args.config)?;
    let manifest = Manifest::load(&args.manifest)?;
    let sql = SqliteExecutor::new();

    // HTTP clients are only needed for templates
    let document_apis = if categories.contains(&Category::Template) {
        Some((
            ThunderheadNowClient::from_section(
                &config.section(sections::THUNDERHEAD_NOW, None)?,
            )?,
            SmartCommClient::from_section(&config.section(sections::SMART_COMM, None)?)?,
        ))
    } else {
        None
    };

    let mut env = CheckEnvironment::new(&config, &manifest, &sql);
    if let Some((thunderhead, smartcomm)) = &document_apis {
        env = env.with_document_apis(thunderhead, smartcomm);
    }
    if let Some(region) = &args.db2_region {
        env = env.with_db2_region(region.clone());
    }
    if let Some(user_id) = &args.user_id {
        env = env.with_user_id(user_id.clone());
    }

    let mut outcomes = Vec::with_capacity(categories.len());
    for category in categories {
        if args.json {
            eprintln!("-- {}...", category.name());
        } else {
            println!("-- {}...", category.name());
        }
        let outcome = CategoryOutcome {
            category,
            result: run_check(&env, category),
        };
        if !args.json {
            print_outcome(&outcome);
        }
        outcomes.push(outcome);
    }

    if args.json {
        let records: Vec<serde_json::Value> = outcomes
            .iter()
            .map(outcome_json)
            .collect::<Result<_, _>>()?;
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    Ok(depcheck_engine::all_passed(&outcomes))
}

fn print_outcome(outcome: &CategoryOutcome) {
    match &outcome.result {
        Ok(report) => print_report(report),
        Err(e) => eprintln!("ERROR {}", e),
    }
}

fn print_report(report: &CheckReport) {
    if report.passed {
        println!("PASS ({} checked)", report.count);
    } else {
        println!(
            "FAIL ({} of {} not in place)",
            report.failures.len(),
            report.count
        );
        println!("{}", report.output_text);
    }
}

fn outcome_json(outcome: &CategoryOutcome) -> Result<serde_json::Value, serde_json::Error> {
    match &outcome.result {
        Ok(report) => serde_json::to_value(report),
        Err(e) => Ok(error_json(outcome.category, e)),
    }
}

fn error_json(category: Category, err: &ExError) -> serde_json::Value {
    json!({
        "Name": category.name(),
        "Category": category,
        "Passed": false,
        "Error": {
            "code": err.code(),
            "message": err.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: CheckArgs,
    }

    #[test]
    fn test_only_accepts_repeated_slugs() {
        let cli = TestCli::try_parse_from([
            "depcheck",
            "--manifest",
            "app.xml",
            "--config",
            "depcheck.toml",
            "--only",
            "templates",
            "--only",
            "workflow-maps",
        ])
        .unwrap();
        assert_eq!(cli.args.only, vec![Category::Template, Category::WorkflowMap]);
        assert_eq!(cli.args.log_format, LogFormat::Pretty);
        assert!(!cli.args.json);
    }

    #[test]
    fn test_only_rejects_unknown_slug() {
        let err = TestCli::try_parse_from([
            "depcheck",
            "--manifest",
            "app.xml",
            "--config",
            "depcheck.toml",
            "--only",
            "tables",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("unknown category 'tables'"));
    }

    #[test]
    fn test_error_json_carries_code() {
        let err = ExError::new(depcheck_core::ExErrorKind::Config).with_message("no [DB2] section");
        let value = error_json(Category::DataQuery, &err);
        assert_eq!(value["Name"], "Letter Data Queries");
        assert_eq!(value["Error"]["code"], "ERR_CONFIG");
    }
}
