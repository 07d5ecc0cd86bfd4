//! studykit - Main CLI Entry Point

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use clap::Parser;
use colored::Colorize;
use log::{debug, info};
use serde_json::{json, Value};
use std::io::Read;
use std::path::Path;
use studykit::{
    cli::{Args, Commands},
    collections::{
        by_field, collection_from_json, group_by, parse_date_value, remove_duplicates,
        sort_records_by_date, Collection, SortOrder,
    },
    config::Config,
    format::{
        capitalize_first_letter, format_date_in, format_file_size, format_relative,
        format_time_in, truncate_text_with, Locale,
    },
    ids::generate_id_with_len,
    logging::init_logging,
    validation::is_valid_email,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;

    init_logging(args.log_level(&config).as_str()).context("Failed to initialize logging")?;
    debug!("verbosity={} config={:?}", args.verbosity().as_str(), args.config);

    let locale = args.resolve_locale(&config)?;

    match args.command {
        Commands::Size { bytes } => {
            println!("{}", format_file_size(bytes));
        }

        Commands::Email { address } => {
            if is_valid_email(&address) {
                println!("{} {}", "✓".green(), address);
            } else {
                println!("{} {}", "✗".red(), address);
                std::process::exit(1);
            }
        }

        Commands::Id { count, length } => {
            let length = length.unwrap_or(config.ids.length);
            for _ in 0..count {
                println!("{}", generate_id_with_len(length));
            }
        }

        Commands::Truncate { text, max } => {
            println!("{}", truncate_text_with(&text, max, &config.display.ellipsis));
        }

        Commands::Capitalize { text } => {
            println!("{}", capitalize_first_letter(&text)?);
        }

        Commands::Date { instant } => {
            let instant = match instant {
                Some(raw) => parse_instant(&raw)?,
                None => Utc::now(),
            };
            print_date(&instant, locale);
        }

        Commands::Ago { instant } => {
            let instant = parse_instant(&instant)?;
            println!("{}", format_relative(&instant, &Utc::now(), locale));
        }

        Commands::Sort {
            input,
            field,
            ascending,
        } => {
            let records = read_collection(&input)?;
            let order = if ascending {
                SortOrder::Ascending
            } else {
                SortOrder::Descending
            };
            let sorted = sort_records_by_date(&records, &field, order);
            print_json(&Value::Array(sorted.into_iter().map(Value::Object).collect()))?;
        }

        Commands::Group { input, field } => {
            let records = read_collection(&input)?;
            let groups = group_by(&records, by_field(&field));
            info!("grouped {} records into {} buckets", records.len(), groups.len());

            let buckets: Vec<Value> = groups
                .into_buckets()
                .into_iter()
                .map(|(key, items)| {
                    json!({
                        "key": key.label(),
                        "count": items.len(),
                        "items": items,
                    })
                })
                .collect();
            print_json(&Value::Array(buckets))?;
        }

        Commands::Dedup { input, field } => {
            let records = read_collection(&input)?;
            let unique = remove_duplicates(&records, by_field(&field));
            info!("kept {} of {} records", unique.len(), records.len());
            print_json(&Value::Array(unique.into_iter().map(Value::Object).collect()))?;
        }

        Commands::Config => {
            let path = args
                .config
                .clone()
                .or_else(Config::config_path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".to_string());

            println!("{} {}", "Config file:".bold(), path);
            println!("{}", toml::to_string_pretty(&config).context("Failed to render config")?);
        }
    }

    Ok(())
}

/// Accept epoch milliseconds or any date string the record reader accepts
fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    let value = match raw.trim().parse::<i64>() {
        Ok(millis) => json!(millis),
        Err(_) => Value::String(raw.trim().to_string()),
    };
    parse_date_value(&value).with_context(|| format!("Could not read '{}' as a time", raw))
}

fn print_date(instant: &DateTime<Utc>, locale: Locale) {
    let local = instant.with_timezone(&Local);
    println!(
        "{}  {}",
        format_date_in(&local, locale),
        format_time_in(&local, locale).dimmed()
    );
}

fn read_collection(input: &Path) -> Result<Collection> {
    let text = if input == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };

    let records = collection_from_json(&text)
        .with_context(|| format!("Failed to parse collection from {}", input.display()))?;
    debug!("read {} records from {}", records.len(), input.display());
    Ok(records)
}

fn print_json(value: &Value) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to render JSON")?
    );
    Ok(())
}
