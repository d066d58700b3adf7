use clap::{Parser, ValueEnum};
use db_infra::config::db::{DbKind, RuntimeEnv};
use db_infra::infra::db::orchestrate_migration;
use migration::MigrationCommand;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser, Debug)]
#[command(name = "migration-cli")]
#[command(about = "Backoffice database migration tool")]
struct Args {
    /// Migration command: up | down | fresh | reset | refresh | status
    command: String,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,

    /// Database type
    #[arg(
        short,
        long,
        value_enum,
        default_value = "postgres",
        help = "Database type: postgres, sqlite-file"
    )]
    db: Db,
}

impl From<Env> for RuntimeEnv {
    fn from(env: Env) -> Self {
        match env {
            Env::Prod => RuntimeEnv::Prod,
            Env::Test => RuntimeEnv::Test,
        }
    }
}

impl From<Db> for DbKind {
    fn from(db: Db) -> Self {
        match db {
            Db::Postgres => DbKind::Postgres,
            Db::SqliteFile => DbKind::SqliteFile,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,db_infra=info,sqlx=warn")
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.to_string().contains("invalid value") && e.to_string().contains("--db") {
                eprintln!("❌ Unsupported database type provided.");
                eprintln!();
                eprintln!("In-memory SQLite is not available from the CLI: every invocation would");
                eprintln!("migrate a fresh database that disappears when the command exits.");
                eprintln!();
                eprintln!("Supported database types:");
                eprintln!("  • postgres    - PostgreSQL database");
                eprintln!("  • sqlite-file - SQLite file database");
                std::process::exit(1);
            }
            // clap renders --help / --version through the error path too
            e.exit();
        }
    };

    let Some(command) = MigrationCommand::parse(&args.command) else {
        eprintln!(
            "Unknown command: {}. Use: up | down | fresh | reset | refresh | status",
            args.command
        );
        std::process::exit(2);
    };

    if let Err(e) = orchestrate_migration(args.env.into(), args.db.into(), command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
