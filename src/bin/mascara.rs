//! mascara CLI - Brazilian input masks from the command line
//!
//! Formats single values or stdin batches, strips formatted values back to
//! their canonical payloads, and computes registration validity dates.

use std::io::{self, BufRead, Write};
use std::process;

use clap::{Parser, Subcommand};

use mascara::{
    validity_date, DriverCategory, JsonArrayWriter, MaskKind, MaskedRecord, NdjsonWriter,
};

#[derive(Parser)]
#[command(name = "mascara")]
#[command(version, about = "Input masks for Brazilian registration data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a mask to a value, or to each line of stdin
    Format {
        /// Value kind (tax_id, plate, national_id, birth_date, generic_date,
        /// phone, postal_code, currency; aliases like cpf, rg, cep work too)
        #[arg(short, long)]
        kind: String,

        /// Value to format; reads stdin line by line when omitted
        value: Option<String>,

        /// Render currency in display form (R$ 0,00 when empty) instead of
        /// the live-typing form
        #[arg(short, long)]
        display: bool,

        /// Emit NDJSON records instead of plain lines
        #[arg(short, long)]
        json: bool,
    },

    /// Strip a masked value back to its canonical payload
    Strip {
        /// Value kind
        #[arg(short, long)]
        kind: String,

        /// Value to strip; reads stdin line by line when omitted
        value: Option<String>,
    },

    /// List supported kinds with a worked example each
    Kinds {
        /// Emit a JSON array instead of a plain listing
        #[arg(short, long)]
        json: bool,
    },

    /// Compute the expiry date of a driver registration
    Validity {
        /// Contract category (terceiro, agregado, frota)
        #[arg(short, long)]
        category: String,

        /// Registration timestamp (RFC 3339, YYYY-MM-DD, or DD/MM/YYYY)
        created_at: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Format {
            kind,
            value,
            display,
            json,
        } => format_values(kind, value, display, json),
        Commands::Strip { kind, value } => strip_values(kind, value),
        Commands::Kinds { json } => list_kinds(json),
        Commands::Validity {
            category,
            created_at,
        } => print_validity(category, created_at),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Format the value under `kind`, honoring the display-currency flag
fn render(kind: MaskKind, input: &str, display: bool) -> String {
    if display && kind == MaskKind::Currency {
        mascara::format_currency_display(input)
    } else {
        kind.apply(input)
    }
}

/// Build the NDJSON record for one value, honoring the display-currency flag
fn masked_record(kind: MaskKind, input: &str, display: bool) -> MaskedRecord {
    if display && kind == MaskKind::Currency {
        MaskedRecord {
            kind,
            raw: kind.strip(input),
            formatted: mascara::format_currency_display(input),
        }
    } else {
        MaskedRecord::new(kind, input)
    }
}

/// Apply a mask to one value or to each stdin line
fn format_values(
    kind: String,
    value: Option<String>,
    display: bool,
    json: bool,
) -> Result<(), String> {
    let kind: MaskKind = kind.parse()?;

    if display && kind != MaskKind::Currency {
        tracing::warn!("--display only affects currency values; formatting {} as usual", kind);
    }

    match value {
        Some(value) => {
            if json {
                let record = masked_record(kind, &value, display);
                let line = serde_json::to_string(&record)
                    .map_err(|e| format!("Failed to serialize record: {}", e))?;
                println!("{}", line);
            } else {
                println!("{}", render(kind, &value, display));
            }
            Ok(())
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();

            if json {
                let mut writer = NdjsonWriter::new(stdout.lock());
                let mut count = 0usize;
                for line in stdin.lock().lines() {
                    let line = line.map_err(|e| format!("Failed to read stdin: {}", e))?;
                    let record = masked_record(kind, &line, display);
                    tracing::debug!(kind = %kind, raw = %record.raw, "masked value");
                    writer
                        .write(&record)
                        .map_err(|e| format!("Failed to write record: {}", e))?;
                    count += 1;
                }
                writer
                    .flush()
                    .map_err(|e| format!("Failed to flush output: {}", e))?;
                tracing::info!("masked {} values as {}", count, kind);
            } else {
                let mut out = stdout.lock();
                for line in stdin.lock().lines() {
                    let line = line.map_err(|e| format!("Failed to read stdin: {}", e))?;
                    writeln!(out, "{}", render(kind, &line, display))
                        .map_err(|e| format!("Failed to write output: {}", e))?;
                }
            }
            Ok(())
        }
    }
}

/// Strip one value or each stdin line to its canonical payload
fn strip_values(kind: String, value: Option<String>) -> Result<(), String> {
    let kind: MaskKind = kind.parse()?;

    match value {
        Some(value) => {
            println!("{}", kind.strip(&value));
            Ok(())
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for line in stdin.lock().lines() {
                let line = line.map_err(|e| format!("Failed to read stdin: {}", e))?;
                writeln!(out, "{}", kind.strip(&line))
                    .map_err(|e| format!("Failed to write output: {}", e))?;
            }
            Ok(())
        }
    }
}

/// List supported kinds with a worked example each
fn list_kinds(json: bool) -> Result<(), String> {
    if json {
        let stdout = io::stdout();
        let mut writer = JsonArrayWriter::new(stdout.lock())
            .map_err(|e| format!("Failed to write kind list: {}", e))?;

        for kind in MaskKind::ALL {
            writer
                .write(&MaskedRecord::new(kind, kind.sample()))
                .map_err(|e| format!("Failed to write kind list: {}", e))?;
        }

        writer
            .finish()
            .map_err(|e| format!("Failed to write kind list: {}", e))?;
        println!();
    } else {
        println!("Supported kinds:");
        for kind in MaskKind::ALL {
            let sample = kind.sample();
            println!("  ✓ {:<13} {} -> {}", kind.name(), sample, kind.apply(sample));
        }
    }

    Ok(())
}

/// Compute the expiry date of a driver registration
fn print_validity(category: String, created_at: String) -> Result<(), String> {
    let category = category
        .parse::<DriverCategory>()
        .map_err(|e| e.to_string())?;

    let expiry = validity_date(&created_at, category).map_err(|e| e.to_string())?;
    println!("{}", expiry);

    Ok(())
}
