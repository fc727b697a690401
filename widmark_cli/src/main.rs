use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use widmark_core::constants::LEGAL_THRESHOLD_G_PER_L;
use widmark_core::*;

#[derive(Parser)]
#[command(name = "bac")]
#[command(about = "Blood alcohol estimate using the Widmark formula", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate current BAC and time until sober
    Estimate {
        /// Sex (male, female); falls back to the config file
        #[arg(long)]
        sex: Option<String>,

        /// Body weight in kg; falls back to the config file
        #[arg(long)]
        weight: Option<f64>,

        /// Hours elapsed since the first drink
        #[arg(long, conflicts_with = "since", allow_negative_numbers = true)]
        hours: Option<f64>,

        /// Time of the first drink (HH:MM today, or RFC 3339)
        #[arg(long)]
        since: Option<String>,

        /// Drink as [label=]<volume>[ml|cl|l|oz]@<abv>, e.g. 500ml@5 (repeatable)
        #[arg(long = "drink")]
        drinks: Vec<String>,

        /// Add a drink from the preset list (repeatable)
        #[arg(long = "preset")]
        presets: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available drink presets
    Presets,
}

fn main() -> Result<()> {
    widmark_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Estimate {
            sex,
            weight,
            hours,
            since,
            drinks,
            presets,
            json,
        } => cmd_estimate(&config, sex, weight, hours, since, &drinks, &presets, json),
        Commands::Presets => cmd_presets(&config),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_estimate(
    config: &Config,
    sex: Option<String>,
    weight: Option<f64>,
    hours: Option<f64>,
    since: Option<String>,
    drink_specs: &[String],
    preset_ids: &[String],
    json: bool,
) -> Result<()> {
    let sex = match sex {
        Some(s) => s.parse::<Sex>()?,
        None => config.subject.sex.ok_or_else(|| {
            Error::InvalidSubject("no sex given; pass --sex or set subject.sex in config".into())
        })?,
    };
    let weight_kg = weight.or(config.subject.weight_kg).ok_or_else(|| {
        Error::InvalidSubject(
            "no weight given; pass --weight or set subject.weight_kg in config".into(),
        )
    })?;
    let elapsed_hours = match (hours, since) {
        (Some(h), _) => h,
        (None, Some(s)) => hours_since(&s, Local::now())?,
        (None, None) => 0.0,
    };

    let subject = SubjectParams::new(sex, weight_kg, elapsed_hours)?;

    let catalog = config.preset_catalog();
    let mut list = DrinkList::new();
    for id in preset_ids {
        list.add_preset(catalog.find(id)?);
    }
    for spec in drink_specs {
        list.add(parse_drink_spec(spec)?);
    }

    if list.is_empty() {
        tracing::warn!("No drinks given; the estimate will be zero");
    }

    let result = estimate_for(list.as_slice(), &subject);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_estimate(&list, &subject, &result, config);
    }

    Ok(())
}

fn cmd_presets(config: &Config) -> Result<()> {
    let catalog = config.preset_catalog();
    let sep = config.display.decimal_separator;
    for preset in &catalog.presets {
        println!("{}", preset_line(preset, sep));
    }
    Ok(())
}

fn preset_line(preset: &Preset, sep: DecimalSeparator) -> String {
    format!(
        "  {:<12} {:<18} {:>6} {} @ {}%",
        preset.id,
        preset.label,
        fmt_decimal(preset.volume_ml, 0, sep),
        VolumeUnit::Ml.symbol(),
        fmt_decimal(preset.abv, 1, sep)
    )
}

/// Hours between `since` and `now`
///
/// A bare HH:MM later than `now` is taken to mean yesterday.
fn hours_since(since: &str, now: DateTime<Local>) -> Result<f64> {
    let start = if let Ok(dt) = DateTime::parse_from_rfc3339(since) {
        dt.with_timezone(&Local)
    } else {
        let time = NaiveTime::parse_from_str(since.trim(), "%H:%M").map_err(|e| {
            Error::Parse(format!("invalid --since '{}': {}", since, e))
        })?;
        let naive = now.date_naive().and_time(time);
        let today = Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| Error::Parse(format!("'{}' does not exist today", since)))?;
        if today > now {
            today - Duration::days(1)
        } else {
            today
        }
    };

    Ok((now - start).num_seconds() as f64 / 3600.0)
}

fn display_estimate(
    list: &DrinkList,
    subject: &SubjectParams,
    result: &EstimationResult,
    config: &Config,
) {
    let sep = config.display.decimal_separator;
    let bac = |v: f64| fmt_decimal(v, config.display.bac_places, sep);

    println!();
    println!(
        "  {} kg, {}, {} since first drink",
        fmt_decimal(subject.weight_kg, 1, sep),
        subject.sex,
        fmt_hm(subject.elapsed_hours)
    );
    for drink in list {
        println!(
            "  → {}: {} {} @ {}%",
            drink.label,
            fmt_decimal(drink.volume_ml, 0, sep),
            VolumeUnit::Ml.symbol(),
            fmt_decimal(drink.abv, 1, sep)
        );
    }
    println!();
    println!(
        "  Pure alcohol:   {} g",
        fmt_decimal(result.grams_pure_alcohol, config.display.grams_places, sep)
    );
    println!("  Peak BAC:       {} g/L", bac(result.peak_bac));
    println!("  Current BAC:    {} g/L", bac(result.current_bac));
    println!(
        "  Below {} g/L in: {}",
        bac(LEGAL_THRESHOLD_G_PER_L),
        fmt_hm(result.hours_to_legal_threshold)
    );
    println!("  Zero in:        {}", fmt_hm(result.hours_to_zero));
    println!();

    if result.is_over_legal_limit() {
        println!("  ✗ Over the legal limit");
    } else if result.is_sober() {
        println!("  ✓ No alcohol left");
    } else {
        println!("  ✓ Under the legal limit");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local
            .from_local_datetime(
                &chrono::NaiveDate::from_ymd_opt(2024, 6, 15)
                    .unwrap()
                    .and_hms_opt(h, m, 0)
                    .unwrap(),
            )
            .earliest()
            .unwrap()
    }

    #[test]
    fn test_hours_since_same_day() {
        let hours = hours_since("20:30", at(23, 0)).unwrap();
        assert_eq!(hours, 2.5);
    }

    #[test]
    fn test_hours_since_wraps_to_yesterday() {
        let hours = hours_since("22:00", at(1, 0)).unwrap();
        assert_eq!(hours, 3.0);
    }

    #[test]
    fn test_hours_since_rfc3339() {
        let now = at(12, 0);
        let start = (now - Duration::minutes(90)).to_rfc3339();
        assert_eq!(hours_since(&start, now).unwrap(), 1.5);
    }

    #[test]
    fn test_preset_line_uses_decimal_separator() {
        let preset = Preset {
            id: "wine".into(),
            label: "Wine glass".into(),
            volume_ml: 150.0,
            abv: 12.5,
        };

        let comma = preset_line(&preset, DecimalSeparator::Comma);
        assert!(comma.contains("150 ml @ 12,5%"), "{}", comma);

        let point = preset_line(&preset, DecimalSeparator::Point);
        assert!(point.contains("150 ml @ 12.5%"), "{}", point);
    }

    #[test]
    fn test_hours_since_rejects_garbage() {
        assert!(matches!(
            hours_since("yesterday", at(12, 0)),
            Err(Error::Parse(_))
        ));
    }
}
