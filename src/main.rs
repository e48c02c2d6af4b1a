use clap::{Parser, Subcommand};
use gstcalc::config::Config;
use gstcalc::convert::{Category, ConversionTable};
use gstcalc::expr::{self, format_number, round_decimals, EvalResult};
use gstcalc::history::{EntryKind, History};
use gstcalc::tax::{self, format_inr, GstMode};

#[derive(Parser)]
#[command(name = "gstcalc")]
#[command(about = "Calculator, GST and unit conversion tool", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression (e.g., "1500+78%")
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Show the preview of a partially typed expression
    Preview {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Add or remove GST
    Gst {
        /// Amount (tax-exclusive, or tax-inclusive with --remove)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Rate in percent (default: gst.default_rate from config)
        rate: Option<f64>,

        /// Treat the amount as tax-inclusive and extract the GST
        #[arg(short, long)]
        remove: bool,
    },

    /// Convert a value between units of one category
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// length, area, volume or weight
        category: String,

        /// Source unit code (e.g., "m")
        from: String,

        /// Target unit code (e.g., "cm")
        to: String,
    },

    /// List conversion categories and their units
    Units {
        /// Only this category
        category: Option<String>,
    },

    /// Show or clear the history file
    History {
        /// Only GST entries
        #[arg(long)]
        gst: bool,

        /// Remove every entry
        #[arg(long)]
        clear: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Eval { expression } => eval_expression(&config, &expression, cli.json),
        Commands::Preview { expression } => preview_expression(&expression, cli.json),
        Commands::Gst {
            amount,
            rate,
            remove,
        } => {
            let mode = if remove { GstMode::Remove } else { GstMode::Add };
            let rate = rate.unwrap_or(config.gst.default_rate);
            gst(&config, &amount, rate, mode, cli.json)
        }
        Commands::Convert {
            value,
            category,
            from,
            to,
        } => convert_value(&config, value, &category, &from, &to, cli.json),
        Commands::Units { category } => list_units(&config, category.as_deref(), cli.json),
        Commands::History { gst, clear } => show_history(&config, gst, clear, cli.json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if debug {
        EnvFilter::new("gstcalc=debug")
    } else {
        EnvFilter::new("gstcalc=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Ok(Config::empty()),
    }
}

/// Record into the configured history file, if there is one
fn record_history(
    config: &Config,
    kind: EntryKind,
    expression: &str,
    result: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &config.history.path else {
        return Ok(());
    };

    let mut history = History::load_from_file(path, config.history.capacity)?;
    history.record(kind, expression, result);
    history.save_to_file(path)?;

    Ok(())
}

fn eval_expression(
    config: &Config,
    expression: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = expr::evaluate(expression);

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", result);
    }

    match result {
        EvalResult::Value(value) => record_history(config, EntryKind::Calc, expression, &value),
        EvalResult::Error => {
            let reason = expr::evaluate_detailed(expression)
                .err()
                .map(|e| e.to_string())
                .unwrap_or_default();
            Err(format!("Cannot evaluate '{}': {}", expression, reason).into())
        }
    }
}

fn preview_expression(expression: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let preview = expr::preview(expression);

    if json {
        println!("{}", serde_json::json!({ "preview": preview }));
    } else if !preview.is_empty() {
        println!("{}", preview);
    }

    Ok(())
}

fn gst(
    config: &Config,
    amount: &str,
    rate: f64,
    mode: GstMode,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let amount = tax::parse_amount(amount)?;
    let gst = tax::compute_gst(amount, rate, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&gst)?);
    } else {
        println!("Base:       {}", format_inr(gst.base));
        println!("GST ({}%):  {}", format_number(rate), format_inr(gst.gst_amount));
        println!("  CGST:     {}", format_inr(gst.cgst));
        println!("  SGST:     {}", format_inr(gst.sgst));
        println!("Total:      {}", format_inr(gst.total));
    }

    let shown = match mode {
        GstMode::Add => gst.total,
        GstMode::Remove => gst.base,
    };
    record_history(
        config,
        EntryKind::Gst,
        &format!("{} {} {}%", format_number(amount), mode.sign(), format_number(rate)),
        &format_number(round_decimals(shown, 2)),
    )
}

fn convert_value(
    config: &Config,
    value: f64,
    category: &str,
    from: &str,
    to: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = config.conversion_table()?;
    let category: Category = category.parse()?;
    let result = table.convert(value, category, from, to)?;

    if json {
        let output = serde_json::json!({
            "value": value,
            "category": category,
            "from": from,
            "to": to,
            "result": result,
        });
        println!("{}", output);
    } else {
        let units = table.get(category);
        let label = |code: &str| {
            units
                .and_then(|u| u.unit(code))
                .map(|u| u.label.clone())
                .unwrap_or_else(|| code.to_string())
        };
        println!(
            "{} {} = {} {}",
            format_number(value),
            label(from),
            format_number(result),
            label(to)
        );
    }

    Ok(())
}

fn list_units(
    config: &Config,
    category: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table: ConversionTable = config.conversion_table()?;
    let categories: Vec<Category> = match category {
        Some(name) => vec![name.parse()?],
        None => table.categories().collect(),
    };

    if json {
        let mut output = serde_json::Map::new();
        for category in &categories {
            if let Some(units) = table.get(*category) {
                output.insert(category.to_string(), serde_json::to_value(units)?);
            }
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for category in categories {
        let Some(units) = table.get(category) else {
            continue;
        };
        println!("{} (base: {})", category, units.base);
        for unit in &units.units {
            println!("  - {:<5} {} (x{})", unit.code, unit.label, unit.factor);
        }
    }

    Ok(())
}

fn show_history(
    config: &Config,
    gst_only: bool,
    clear: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = config
        .history
        .path
        .as_ref()
        .ok_or("No history file configured (set history.path in the config)")?;
    let mut history = History::load_from_file(path, config.history.capacity)?;

    if clear {
        history.clear();
        history.save_to_file(path)?;
        println!("History cleared");
        return Ok(());
    }

    let entries: Vec<_> = if gst_only {
        history.gst_entries().collect()
    } else {
        history.calc_entries().collect()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!(
            "{}",
            if gst_only {
                "No GST history yet"
            } else {
                "No history yet"
            }
        );
    }
    for entry in entries {
        println!(
            "{}  {} = {}",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.expression,
            entry.result
        );
    }

    Ok(())
}
