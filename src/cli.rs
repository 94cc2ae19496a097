use std::path::PathBuf;

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use salary_engine::api::{AppState, create_router};
use salary_engine::calculation::evaluate_selection;
use salary_engine::config::{AppSettings, ConfigLoader, SettingsError};
use salary_engine::error::EngineError;
use salary_engine::models::SalaryBreakdown;
use salary_engine::presentation::render_payslip;
use salary_engine::telemetry::{self, TelemetryError};
use salary_engine::wizard::NavigationParams;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode breakdown: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "salary-engine",
    about = "Estimate the net salary of public health-sector staff",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the salary breakdown of a selection as JSON
    Compute(SelectionArgs),
    /// Print the payslip of a selection
    Payslip(SelectionArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Override the reference data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SelectionArgs {
    /// Main corps
    #[arg(long)]
    main_corp: String,
    /// Sub-corps
    #[arg(long)]
    sub_corp: String,
    /// Grade
    #[arg(long)]
    grade: String,
    /// Seniority step (echelon, or years of service for contract staff)
    #[arg(long, default_value_t = 0)]
    echelon: u32,
    /// Superior position id
    #[arg(long)]
    poste_sup: Option<u32>,
    /// Contagion-risk tier label
    #[arg(long, default_value = "")]
    contagion_level: String,
    /// Incentive level, 0 to 5
    #[arg(long, default_value_t = 0)]
    interessement_level: u8,
    /// Number of children
    #[arg(long, default_value_t = 0)]
    children: u32,
    /// Number of children older than ten
    #[arg(long, default_value_t = 0)]
    older_children: u32,
    /// The spouse has no income
    #[arg(long)]
    single_income: bool,
    /// Override the reference data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

impl SelectionArgs {
    fn params(&self) -> NavigationParams {
        NavigationParams {
            main_corp: self.main_corp.clone(),
            sub_corp: self.sub_corp.clone(),
            grade: self.grade.clone(),
            echelon: self.echelon.to_string(),
            poste_sup: self
                .poste_sup
                .map(|id| id.to_string())
                .unwrap_or_default(),
            contagion_level: self.contagion_level.clone(),
            interessement_level: self.interessement_level.to_string(),
            children_count: self.children.to_string(),
            older_children_count: self.older_children.to_string(),
            spouse_status: self.single_income.to_string(),
        }
    }

    fn breakdown(&self, settings: &AppSettings) -> Result<SalaryBreakdown, AppError> {
        let data_dir = self.data_dir.as_ref().unwrap_or(&settings.data_dir);
        let loader = ConfigLoader::load(data_dir)?;
        let input = self.params().into_input();
        Ok(evaluate_selection(&input, loader.reference())?)
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = AppSettings::load()?;
    telemetry::init(&settings.log_level)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => serve(settings, args).await,
        Command::Compute(args) => {
            let breakdown = args.breakdown(&settings)?;
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
            Ok(())
        }
        Command::Payslip(args) => {
            let breakdown = args.breakdown(&settings)?;
            print!("{}", render_payslip(&breakdown, Local::now().date_naive()));
            Ok(())
        }
    }
}

async fn serve(mut settings: AppSettings, args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        settings.data_dir = data_dir;
    }

    let loader = ConfigLoader::load(&settings.data_dir)?;
    let app = create_router(AppState::new(loader));

    let addr = settings.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "salary engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_serve() {
        let cli = Cli::try_parse_from(["salary-engine"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_selection_flags_become_params() {
        let cli = Cli::try_parse_from([
            "salary-engine",
            "compute",
            "--main-corp",
            "شبه الطبيين",
            "--sub-corp",
            "الممرضون",
            "--grade",
            "ممرض حاصل على شهادة الدولة",
            "--echelon",
            "5",
            "--children",
            "2",
            "--single-income",
        ])
        .unwrap();
        let Some(Command::Compute(args)) = cli.command else {
            panic!("expected compute");
        };
        let params = args.params();
        assert_eq!(params.echelon, "5");
        assert_eq!(params.poste_sup, "");
        assert_eq!(params.spouse_status, "true");

        let input = params.into_input();
        assert_eq!(input.family.children, 2);
        assert!(!input.family.spouse_employed);
    }
}
