//! Probe binary entry point

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use probe::{
    services::{EnvFileCredentialSource, RealHttpTransport},
    Probe, ProbeConfig, ProbePipeline, ProbeResult, DEFAULT_BASE_URL, DEFAULT_ENV_FILE, DEFAULT_KEY_NAME,
    DEFAULT_MODEL, DEFAULT_PROMPT, DEFAULT_TIMEOUT_SECS,
};
use shared::logging;

/// Check a Gemini API credential stored in a local env file
#[derive(Parser)]
#[command(name = "probe")]
#[command(about = "Diagnose a Gemini API key: list models, test a model endpoint, or verify the key")]
struct Args {
    /// Configuration file holding KEY=VALUE lines
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Name of the credential key in the configuration file
    #[arg(long, default_value = DEFAULT_KEY_NAME)]
    key_name: String,

    /// Root URL of the generative-language API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = logging::DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List models that support content generation
    ListModels {
        /// Show every model, not only generation-capable ones
        #[arg(long)]
        all: bool,
    },
    /// Send a greeting to one model's generateContent endpoint
    TestModel {
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        #[arg(long, default_value = DEFAULT_PROMPT)]
        prompt: String,
    },
    /// Confirm the API key is accepted
    VerifyKey,
}

impl From<Command> for Probe {
    fn from(command: Command) -> Self {
        match command {
            Command::ListModels { all } => Probe::ListModels { include_all: all },
            Command::TestModel { model, prompt } => Probe::TestModel { model, prompt },
            Command::VerifyKey => Probe::VerifyKey,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ProbeResult<ExitCode> {
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));

    let config = ProbeConfig {
        env_file: args.env_file,
        key_name: args.key_name,
        base_url: args.base_url,
        timeout: Duration::from_secs(args.timeout_secs),
    };

    let credentials = EnvFileCredentialSource::new(config.env_file.clone(), config.key_name.clone());
    let transport = RealHttpTransport::new(config.timeout)?;
    let pipeline = ProbePipeline::new(credentials, transport, config.base_url()?);

    let probe = Probe::from(args.command);
    let report = probe.run(&pipeline).await;
    print!("{report}");

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
