//! digital-id - member ID cards and QR payload verification.

use std::io::{self, BufRead, IsTerminal, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use digital_id::adapters::{
    load_roster_file, sample_members, CsvRosterExporter, InMemoryRoster, JsonFileSessionStore,
};
use digital_id::application::{
    CurrentSessionHandler, ExportRosterHandler, GenerateTokenHandler, GenerateTokenQuery,
    ListMembersHandler, LoginCommand, LoginHandler, LogoutHandler, ScanOutcome, ScanSession,
    VerifyTokenCommand, VerifyTokenHandler,
};
use digital_id::config::{AppConfig, LogFormat, LoggingConfig};
use digital_id::domain::auth::{hash_password, AdminAccount};
use digital_id::domain::foundation::MemberId;
use digital_id::domain::member::Member;
use digital_id::domain::verification::{TokenGenerator, TokenVerifier, VerificationResult, VerificationToken};

#[derive(Parser)]
#[command(name = "digital-id", version, about = "Digital member ID cards with verifiable QR payloads")]
struct Cli {
    /// YAML roster file (overrides DIGITAL_ID__ROSTER__PATH).
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Session file (overrides DIGITAL_ID__SESSION__PATH).
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in as a member (username or email) or as the administrator.
    Login {
        /// Username or email.
        login: String,

        /// Password; read from stdin when omitted.
        #[arg(long, env = "DIGITAL_ID_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// End the current session.
    Logout,

    /// Show who is logged in.
    Whoami,

    /// Print the logged-in member's ID card.
    Card,

    /// Print a QR payload (own card, or any member for the administrator).
    Payload {
        #[arg(long)]
        member: Option<String>,
    },

    /// Verify one payload (argument or stdin). Administrator only.
    Verify {
        payload: Option<String>,

        /// Print the full result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Verify a stream of detected payloads, one per stdin line. Administrator only.
    Scan {
        /// Print each result as a JSON line.
        #[arg(long)]
        json: bool,
    },

    /// List active members. Administrator only.
    Members,

    /// Export active members as CSV. Administrator only.
    Export {
        /// Output file; defaults to `members_<date>.csv`.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Hash a password for a roster file or DIGITAL_ID__ADMIN__PASSWORD_HASH.
    HashPassword {
        #[arg(long, env = "DIGITAL_ID_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Needs no secret or roster.
    if let Command::HashPassword { password } = &cli.command {
        init_logging(&LoggingConfig::default());
        let password = read_password(password.clone())?;
        println!("{}", hash_password(&password)?);
        return Ok(());
    }

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if let Some(path) = cli.roster {
        config.roster.path = Some(path);
    }
    if let Some(path) = cli.session {
        config.session.path = path;
    }
    config.validate().context("invalid configuration")?;
    init_logging(&config.logging);

    let app = App::build(&config)?;
    let mut context = app.current_session().handle().await?;

    match cli.command {
        Command::Login { login, password } => {
            let password = read_password(password)?;
            let session = app
                .login()
                .handle(LoginCommand { login, password }, &mut context)
                .await?;
            println!("Logged in as {} ({})", session.principal.display_name(), session.principal.kind());
        }
        Command::Logout => match app.logout().handle(&mut context).await? {
            Some(session) => println!("Logged out {}", session.principal.display_name()),
            None => println!("Not logged in"),
        },
        Command::Whoami => match context.current() {
            Some(session) => println!(
                "{} ({}) since {}",
                session.principal.display_name(),
                session.principal.kind(),
                session.started_at
            ),
            None => println!("Not logged in"),
        },
        Command::Card => {
            let member = context.require_member()?.clone();
            let token = app.token_for(&member.id).await?;
            println!("{}", render_card(&member, &token));
        }
        Command::Payload { member } => {
            let member_id = match member {
                Some(id) => {
                    context.require_admin()?;
                    MemberId::new(id)?
                }
                None => context.require_member()?.id.clone(),
            };
            println!("{}", app.token_for(&member_id).await?.to_payload());
        }
        Command::Verify { payload, json } => {
            context.require_admin()?;
            let payload = match payload {
                Some(p) => p,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let result = app.verifier().handle(VerifyTokenCommand::new(payload)).await;
            print_result(&result, json)?;
            if !result.success {
                std::process::exit(1);
            }
        }
        Command::Scan { json } => {
            context.require_admin()?;
            let scan = ScanSession::new(app.verifier(), config.scan.cooldown());
            tracing::info!(cooldown_ms = config.scan.cooldown_ms, "Scanning started");

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                if line.trim().is_empty() {
                    continue;
                }
                if let ScanOutcome::Verified(result) = scan.on_detection(&line).await {
                    print_result(&result, json)?;
                }
            }

            let (verified, dropped) = scan.counts();
            tracing::info!(verified, dropped, "Scanning stopped");
        }
        Command::Members => {
            for member in app.list_members().handle(&context).await? {
                println!(
                    "{:<12} {:<20} {:<16} {:<6} {}",
                    member.id.as_str(),
                    member.name,
                    member.role,
                    member.batch,
                    member.email
                );
            }
        }
        Command::Export { output } => {
            let export = app.export_roster().handle(&context).await?;
            let path = output.unwrap_or_else(|| PathBuf::from(&export.filename));
            std::fs::write(&path, &export.document.content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported {} members to {}", export.document.rows, path.display());
        }
        // Handled before configuration is loaded.
        Command::HashPassword { .. } => {}
    }

    Ok(())
}

/// Wired adapters and handlers for one invocation.
struct App {
    roster: Arc<InMemoryRoster>,
    sessions: Arc<JsonFileSessionStore>,
    generator: Arc<TokenGenerator>,
    verifier: TokenVerifier,
    admin: Option<AdminAccount>,
}

impl App {
    fn build(config: &AppConfig) -> anyhow::Result<Self> {
        let mut roster = match &config.roster.path {
            Some(path) => load_roster_file(path)?,
            None => InMemoryRoster::from_members(sample_members())?,
        };
        if let Some(password) = &config.roster.demo_password {
            tracing::warn!("Demo password applied to members without credentials");
            roster = roster.with_shared_password(password)?;
        }

        let generator = Arc::new(config.verification.generator()?);
        let verifier = config
            .verification
            .configure_verifier(TokenVerifier::new(generator.clone()));

        Ok(Self {
            roster: Arc::new(roster),
            sessions: Arc::new(JsonFileSessionStore::new(&config.session.path)),
            generator,
            verifier,
            admin: config.admin.account(),
        })
    }

    fn current_session(&self) -> CurrentSessionHandler {
        let handler = CurrentSessionHandler::new(self.sessions.clone(), self.roster.clone());
        match &self.admin {
            Some(admin) => handler.with_admin(admin.clone()),
            None => handler,
        }
    }

    fn login(&self) -> LoginHandler {
        let handler = LoginHandler::new(self.roster.clone(), self.roster.clone(), self.sessions.clone());
        match &self.admin {
            Some(admin) => handler.with_admin(admin.clone()),
            None => handler,
        }
    }

    fn logout(&self) -> LogoutHandler {
        LogoutHandler::new(self.sessions.clone())
    }

    fn verifier(&self) -> VerifyTokenHandler {
        VerifyTokenHandler::new(self.roster.clone(), self.verifier.clone())
    }

    fn list_members(&self) -> ListMembersHandler {
        ListMembersHandler::new(self.roster.clone())
    }

    fn export_roster(&self) -> ExportRosterHandler {
        ExportRosterHandler::new(self.roster.clone(), Arc::new(CsvRosterExporter::new()))
    }

    async fn token_for(&self, member_id: &MemberId) -> anyhow::Result<VerificationToken> {
        let handler = GenerateTokenHandler::new(self.roster.clone(), self.generator.clone());
        Ok(handler
            .handle(GenerateTokenQuery {
                member_id: member_id.clone(),
            })
            .await?)
    }
}

/// Initializes the tracing subscriber. Logs go to stderr; stdout carries
/// payloads and results.
fn init_logging(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let use_json = match config.format {
        LogFormat::Json => true,
        LogFormat::Text => false,
        LogFormat::Auto => !io::stderr().is_terminal(),
    };

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn read_password(password: Option<String>) -> anyhow::Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    if io::stdin().is_terminal() {
        eprint!("Password: ");
    }
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("empty password");
    }
    Ok(password)
}

fn print_result(result: &VerificationResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
        return Ok(());
    }

    match result.member() {
        Some(member) => println!(
            "VALID   {} - {} ({}, batch {})",
            member.id, member.name, member.role, member.batch
        ),
        None => println!(
            "INVALID {} [{}]",
            result.message,
            result.error_code().map(|c| c.to_string()).unwrap_or_default()
        ),
    }
    Ok(())
}

fn render_card(member: &Member, token: &VerificationToken) -> String {
    let rows = [
        ("Name", member.name.clone()),
        ("ID", member.id.to_string()),
        ("Role", member.role.clone()),
        ("Batch", member.batch.clone()),
        ("Department", member.department.clone()),
        ("Email", member.email.clone()),
        ("Phone", member.phone.clone()),
        ("Joined", member.join_date_display()),
        ("Status", member.status_label().to_string()),
        ("Hash", format!("{}...", token.short_hash())),
    ];

    let mut card = String::from("+---------------- DIGITAL ID ----------------+\n");
    for (label, value) in rows {
        card.push_str(&format!("| {:<11} {:<30} |\n", label, value));
    }
    card.push_str("+--------------------------------------------+\n");
    card.push_str("QR payload:\n");
    card.push_str(&token.to_payload());
    card
}
