use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payplan::application::catalog::CatalogResolver;
use payplan::application::engine::PlanEngine;
use payplan::config::PlanConfig;
use payplan::domain::money::Discount;
use payplan::domain::plan::PlanRequest;
use payplan::error::PlanError;
use payplan::infrastructure::csv_file::CsvFileCatalog;
use payplan::interfaces::csv::plan_writer::PlanWriter;
use payplan::interfaces::report::{self, NO_PLAN_MESSAGE, PlanReport};
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Course catalog CSV file
    catalog: PathBuf,

    /// Course to plan for. Lists open courses when omitted.
    #[arg(long)]
    course: Option<String>,

    /// Date to calculate for (YYYY-MM-DD). Defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Number of monthly installments. Shows the available range when omitted.
    #[arg(long, short = 'n')]
    installments: Option<i32>,

    /// Absolute discount on the tuition price
    #[arg(long, conflicts_with = "discount_percent")]
    discount_amount: Option<Decimal>,

    /// Percentage discount on the tuition price (0-100)
    #[arg(long)]
    discount_percent: Option<Decimal>,

    /// Output format. `csv` prints the schedule only and needs --installments.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// List the courses open for enrollment and exit
    #[arg(long)]
    list: bool,

    /// JSON file overriding fees and limits
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn discount(&self) -> Result<Option<Discount>, PlanError> {
        match (self.discount_amount, self.discount_percent) {
            (Some(amount), _) => Discount::amount(amount).map(Some),
            (None, Some(percent)) => Discount::percent(percent).map(Some),
            (None, None) => Ok(None),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PlanConfig::from_path(path).into_diagnostic()?,
        None => PlanConfig::default(),
    };
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let discount = cli.discount().into_diagnostic()?;

    let resolver = CatalogResolver::new(
        Box::new(CsvFileCatalog::new(&cli.catalog)),
        config.enrollment_grace_days,
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(course) = cli.course.as_deref().filter(|_| !cli.list) else {
        let listed = resolver.open_offerings(today).await.into_diagnostic()?;
        report::write_catalog(&mut out, &listed).into_diagnostic()?;
        return Ok(());
    };

    if cli.format == Format::Csv && cli.installments.is_none() {
        miette::bail!("--format csv writes a payment schedule and requires --installments");
    }

    let offering = resolver.select(today, course).await.into_diagnostic()?;
    let engine = PlanEngine::new(config).into_diagnostic()?;

    let bounds = match engine.installment_bounds(&offering, today) {
        Ok(bounds) => bounds,
        Err(PlanError::NoInstallmentsAvailable) => {
            match cli.format {
                Format::Json => {
                    let no_plan = PlanReport {
                        course: &offering,
                        bounds: None,
                        plan: None,
                        message: Some(NO_PLAN_MESSAGE),
                    };
                    report::write_json(&mut out, &no_plan).into_diagnostic()?;
                }
                Format::Csv => eprintln!("{NO_PLAN_MESSAGE}"),
                Format::Text => {
                    report::write_course_details(&mut out, &offering).into_diagnostic()?;
                    writeln!(out).into_diagnostic()?;
                    writeln!(out, "{NO_PLAN_MESSAGE}").into_diagnostic()?;
                }
            }
            return Ok(());
        }
        Err(e) => return Err(e).into_diagnostic(),
    };

    let plan = match cli.installments {
        Some(count) => {
            let mut request = PlanRequest::new(offering.clone(), today, count);
            request.discount = discount;
            Some(engine.build_plan(&request).into_diagnostic()?)
        }
        None => None,
    };

    match (cli.format, &plan) {
        (Format::Json, _) => {
            let full = PlanReport {
                course: &offering,
                bounds: Some(&bounds),
                plan: plan.as_ref(),
                message: None,
            };
            report::write_json(&mut out, &full).into_diagnostic()?;
        }
        (Format::Csv, Some(plan)) => {
            PlanWriter::new(&mut out).write_plan(plan).into_diagnostic()?;
        }
        (_, plan) => {
            report::write_course_details(&mut out, &offering).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
            report::write_bounds(&mut out, &bounds).into_diagnostic()?;
            if let Some(plan) = plan {
                writeln!(out).into_diagnostic()?;
                report::write_plan(&mut out, plan).into_diagnostic()?;
            }
        }
    }

    Ok(())
}
