//! CLI tool for the card sign-up form engine.
//!
//! # Usage
//!
//! ```bash
//! # Detect the brand from a (partial) card number
//! cardform detect 3782
//!
//! # Format a card number the way the input shows it
//! cardform format 378282246310005
//!
//! # Validate single fields
//! cardform number 4111111111111111
//! cardform expiry 12/30
//! cardform cvv 1234 --brand amex
//! cardform balance 1250.50
//!
//! # Replay a whole form through validation and a dry-run submit
//! cardform signup --form form.json --config config.json
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::collections::BTreeMap;
use std::process::ExitCode;

use async_trait::async_trait;
use card_form::{
    balance, cvv, detect, expiry, format, CardBrand, Field, FormConfig, SignupGateway,
    SignupPayload, SignupSession, SubmitError, SubmitOutcome,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cardform")]
#[command(author, version, about = "Card sign-up form validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect card brand from the leading digits
    Detect {
        /// Card number (or partial number)
        card_number: String,
    },

    /// Format a card number for display
    Format {
        /// Card number to format
        card_number: String,

        /// Separator to use
        #[arg(short, long, default_value = " ")]
        separator: String,
    },

    /// Validate a card number
    Number {
        /// Card number to validate (spaces and dashes allowed)
        card_number: String,
    },

    /// Validate an expiry date
    Expiry {
        /// Expiry date (MM/YY)
        date: String,

        /// Latest year accepted
        #[arg(short, long, default_value_t = expiry::EXPIRY_YEAR_CEILING)]
        max_year: u16,
    },

    /// Validate a CVV for a card brand
    Cvv {
        /// CVV to validate
        cvv: String,

        /// Card brand (affects required length)
        #[arg(short, long, default_value = "visa")]
        brand: BrandArg,
    },

    /// Validate an initial balance
    Balance {
        /// Amount, e.g. 1250.50
        amount: String,

        /// Largest amount accepted
        #[arg(short, long)]
        ceiling: Option<String>,
    },

    /// Validate a whole sign-up form and submit it to a dry-run gateway
    Signup {
        /// JSON file mapping field names to values
        #[arg(short, long)]
        form: String,

        /// JSON file with form configuration
        #[arg(short, long)]
        config: Option<String>,

        /// Make the gateway reject the sign-up with this message
        #[arg(short, long)]
        reject: Option<String>,

        /// Scope the rejection to a field
        #[arg(long, value_parser = parse_field, requires = "reject")]
        reject_field: Option<Field>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BrandArg {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Unknown,
}

impl From<BrandArg> for CardBrand {
    fn from(arg: BrandArg) -> Self {
        match arg {
            BrandArg::Visa => CardBrand::Visa,
            BrandArg::Mastercard => CardBrand::Mastercard,
            BrandArg::Amex => CardBrand::Amex,
            BrandArg::Discover => CardBrand::Discover,
            BrandArg::Unknown => CardBrand::Unknown,
        }
    }
}

fn parse_field(s: &str) -> Result<Field, String> {
    Field::ALL
        .into_iter()
        .find(|f| f.name() == s)
        .ok_or_else(|| format!("unknown field '{}'", s))
}

/// Accepts everything unless told to reject.
struct DryRunGateway {
    reject: Option<SubmitError>,
}

#[async_trait]
impl SignupGateway for DryRunGateway {
    async fn submit(&self, payload: SignupPayload) -> Result<(), SubmitError> {
        tracing::info!(
            card = %payload.card_number().masked(),
            "dry run: sign-up received"
        );
        match &self.reject {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { card_number } => cmd_detect(&card_number),
        Commands::Format {
            card_number,
            separator,
        } => cmd_format(&card_number, &separator),
        Commands::Number { card_number } => cmd_number(&card_number),
        Commands::Expiry { date, max_year } => cmd_expiry(&date, max_year),
        Commands::Cvv { cvv: input, brand } => cmd_cvv(&input, brand.into()),
        Commands::Balance { amount, ceiling } => cmd_balance(&amount, ceiling.as_deref()),
        Commands::Signup {
            form,
            config,
            reject,
            reject_field,
        } => {
            let reject = reject.map(|message| match reject_field {
                Some(field) => SubmitError::for_field(field, message),
                None => SubmitError::general(message),
            });
            cmd_signup(&form, config.as_deref(), reject).await
        }
    }
}

fn cmd_detect(card_number: &str) -> ExitCode {
    let brand = detect::detect_brand_str(card_number);
    println!("Detected Brand: {}", brand);
    println!("Max Digits: {}", brand.max_digits());
    println!("CVV Length: {}", brand.cvv_length());
    ExitCode::SUCCESS
}

fn cmd_format(card_number: &str, separator: &str) -> ExitCode {
    println!("{}", format::format_with_separator(card_number, separator));
    ExitCode::SUCCESS
}

fn cmd_number(card_number: &str) -> ExitCode {
    match card_form::validate_card_number(card_number) {
        Ok(brand) => {
            println!("Valid: yes");
            println!("Brand: {}", brand);
            println!("Masked: {}", card_form::mask_string(card_number));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_expiry(date: &str, max_year: u16) -> ExitCode {
    let today = expiry::YearMonth::current();
    match expiry::validate_expiry_with_ceiling(date, today, max_year) {
        Ok(exp) => {
            println!("Valid: yes");
            println!("Month: {:02}", exp.month());
            println!("Year: {}", exp.year());
            println!("Months Until Expiry: {}", exp.months_until_expiry_at(today));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_cvv(input: &str, brand: CardBrand) -> ExitCode {
    match cvv::validate_cvv(input, brand) {
        Ok(()) => {
            println!("Valid: yes");
            println!("Length: {} digits", brand.cvv_length());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_balance(amount: &str, ceiling: Option<&str>) -> ExitCode {
    let ceiling = match ceiling {
        Some(text) => match text.parse() {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Error: invalid ceiling '{}': {}", text, e);
                return ExitCode::FAILURE;
            }
        },
        None => balance::default_balance_ceiling(),
    };

    match balance::validate_balance(amount, ceiling) {
        Ok(value) => {
            println!("Valid: yes");
            println!("Amount: {}", value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn cmd_signup(form: &str, config: Option<&str>, reject: Option<SubmitError>) -> ExitCode {
    let config = match config {
        Some(path) => match FormConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => FormConfig::default(),
    };

    let values: BTreeMap<Field, String> = match std::fs::read_to_string(form)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
    {
        Ok(values) => values,
        Err(e) => {
            eprintln!("Error: failed to read form {}: {}", form, e);
            return ExitCode::FAILURE;
        }
    };

    let mut session = SignupSession::new(DryRunGateway { reject }, config);
    for (field, value) in &values {
        session.input(*field, value);
    }

    let outcome = session.submit().await;
    let snapshot = session.snapshot();
    let label = match &outcome {
        SubmitOutcome::Invalid(_) => "invalid",
        SubmitOutcome::Accepted => "accepted",
        SubmitOutcome::Rejected(_) => "rejected",
        SubmitOutcome::Busy => "busy",
    };
    let errors: BTreeMap<&str, String> = snapshot
        .errors()
        .iter()
        .map(|(field, error)| (field.name(), error.to_string()))
        .collect();
    let report = serde_json::json!({
        "outcome": label,
        "brand": snapshot.brand(),
        "card_number": snapshot.fields().card_number().masked(),
        "errors": errors,
        "general_error": snapshot.general_error(),
    });

    match serde_json::to_string_pretty(&report) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    match outcome {
        SubmitOutcome::Accepted => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
