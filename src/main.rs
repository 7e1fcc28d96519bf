use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use serde::Serialize;

use ids_ai::features::{MAX_BYTES, MAX_DURATION};
use ids_ai::{DetectionEngine, EventInput, Protocol, Service, Verdict};

#[derive(Parser, Debug)]
#[command(about = "AI Network IDS dashboard")]
struct Args {
    /// Path to the serialized random forest model
    #[arg(long, default_value = "rf_model.bin")]
    model: PathBuf,

    /// Path to the feature column list
    #[arg(long, default_value = "feature_columns.json")]
    features: PathBuf,

    /// CSV file receiving one record per prediction
    #[arg(long, default_value = "predictions.csv")]
    log_file: PathBuf,
}

#[derive(Debug, Serialize)]
struct PredictionRecord {
    timestamp: String,
    duration: u32,
    src_bytes: u32,
    dst_bytes: u32,
    protocol_type: Protocol,
    service: Service,
    label: &'static str,
    severity: String,
}

#[derive(Default)]
struct SessionStats {
    predictions: u32,
    attacks: u32,
    normal: u32,
}

fn main() -> ids_ai::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("\x1b[36m=== AI Network IDS Dashboard ===\x1b[0m");
    println!("Intrusion Detection Powered by Random Forest\n");

    // Engine offline is a terminal state for the session: show the status
    // and leave without ever reaching the prediction path.
    let engine = match DetectionEngine::load(&args.model, &args.features) {
        Ok(engine) => {
            println!("\x1b[32mDetection Engine Online\x1b[0m ({} feature columns)", engine.schema().len());
            engine
        }
        Err(e) => {
            println!("\x1b[31mModel Load Failed\x1b[0m");
            println!("{}", e);
            println!(
                "Ensure '{}' and '{}' sit next to the dashboard binary.",
                args.model.display(),
                args.features.display()
            );
            return Ok(());
        }
    };

    let mut writer = csv::Writer::from_path(&args.log_file)?;
    let mut stats = SessionStats::default();

    loop {
        println!("\n\x1b[36m--- Simulate Network Event Features ---\x1b[0m");

        let duration = match prompt_number("Connection duration (seconds)", 0, MAX_DURATION, 1)? {
            Some(v) => v,
            None => break,
        };
        let src_bytes = match prompt_number("Source bytes sent", 0, MAX_BYTES, 100)? {
            Some(v) => v,
            None => break,
        };
        let dst_bytes = match prompt_number("Destination bytes received", 0, MAX_BYTES, 0)? {
            Some(v) => v,
            None => break,
        };
        let protocol = match prompt_choice("Protocol type", &Protocol::ALL)? {
            Some(v) => v,
            None => break,
        };
        let service = match prompt_choice("Network service", &Service::ALL)? {
            Some(v) => v,
            None => break,
        };

        let input = EventInput::new(duration, src_bytes, dst_bytes, protocol, service)?;
        let verdict = engine.predict(&input)?;

        match verdict {
            Verdict::Attack => {
                println!("\n\x1b[31m🚨 ATTACK DETECTED!\x1b[0m");
                println!("Threat Level: HIGH - the model classified this event as an intrusion.");
            }
            Verdict::Normal => {
                println!("\n\x1b[32m✅ NORMAL TRAFFIC\x1b[0m");
                println!("Threat Level: LOW - the model classified this event as normal activity.");
            }
        }

        stats.predictions += 1;
        if verdict.is_attack() {
            stats.attacks += 1;
        } else {
            stats.normal += 1;
        }

        writer.serialize(PredictionRecord {
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            duration,
            src_bytes,
            dst_bytes,
            protocol_type: protocol,
            service,
            label: verdict.label(),
            severity: verdict.severity().to_string(),
        })?;
        writer.flush()?;

        println!(
            "\nSession stats: {} analyzed | \x1b[31m{} attack\x1b[0m | \x1b[32m{} normal\x1b[0m",
            stats.predictions, stats.attacks, stats.normal
        );

        match read_trimmed("\nRun another prediction? [Y/n]: ")? {
            Some(answer) if answer.eq_ignore_ascii_case("n") => break,
            Some(_) => continue,
            None => break,
        }
    }

    println!("Predictions logged to '{}'. Goodbye.", args.log_file.display());
    Ok(())
}

/// Prints the prompt and reads one line. Returns None on EOF.
fn read_trimmed(prompt: &str) -> ids_ai::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_number(label: &str, min: u32, max: u32, default: u32) -> ids_ai::Result<Option<u32>> {
    loop {
        let prompt = format!("{} ({}-{}) [{}]: ", label, min, max, default);
        let line = match read_trimmed(&prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        if line.is_empty() {
            return Ok(Some(default));
        }
        match line.parse::<u32>() {
            Ok(v) if v >= min && v <= max => return Ok(Some(v)),
            Ok(v) => println!("\x1b[33m{} is out of range {}-{}\x1b[0m", v, min, max),
            Err(_) => println!("\x1b[33mPlease enter a whole number\x1b[0m"),
        }
    }
}

fn prompt_choice<T>(label: &str, options: &[T]) -> ids_ai::Result<Option<T>>
where
    T: Copy + FromStr<Err = ids_ai::IdsError> + std::fmt::Display,
{
    let names: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    loop {
        let prompt = format!("{} ({}) [{}]: ", label, names.join("/"), names[0]);
        let line = match read_trimmed(&prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        if line.is_empty() {
            return Ok(Some(options[0]));
        }
        match line.parse::<T>() {
            Ok(v) => return Ok(Some(v)),
            Err(e) => println!("\x1b[33m{}\x1b[0m", e),
        }
    }
}
