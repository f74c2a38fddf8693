use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopdesk::api;
use shopdesk::cli::{
    AttendanceCommands, Cli, Commands, EmployeeCommands, LabelCommands, RoutineCommands,
    TaskCommands,
};
use shopdesk::client::{ApiClient, Navigator, Screen, TokenStore};
use shopdesk::config;
use shopdesk::models::attendance::{AttendanceFilter, MarkAttendance};
use shopdesk::models::employee::EmployeeCreate;
use shopdesk::models::task::{TaskCreate, TaskFilter};
use shopdesk::models::user::LoginRequest;
use shopdesk::session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "shopdesk=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load()?;
    let args = Cli::parse();

    // Tokens live only for this process; every invocation starts on the
    // login screen and authenticates from scratch.
    let tokens = TokenStore::new();
    let navigator = Navigator::new(Screen::Login);
    let client = Arc::new(ApiClient::new(&cfg, tokens, navigator)?);
    let session = Session::new(client.clone());

    let username = args
        .username
        .context("missing username: pass --username or set SHOPDESK_USERNAME")?;
    let password = args
        .password
        .context("missing password: pass --password or set SHOPDESK_PASSWORD")?;

    session
        .login(&LoginRequest { username, password })
        .await
        .context("login failed")?;

    let result = run_command(args.command, &client, &session).await;

    // Best-effort server-side invalidation before the process exits.
    session.logout().await;

    result
}

async fn run_command(
    command: Commands,
    client: &ApiClient,
    session: &Session,
) -> anyhow::Result<()> {
    match command {
        Commands::Whoami => {
            let user = session.current_user().context("not authenticated")?;
            print_json(&user)
        }
        Commands::Stats => print_json(&api::dashboard::stats(client).await?),

        Commands::Employee { command } => match command {
            EmployeeCommands::List => print_json(&api::employees::list(client).await?),
            EmployeeCommands::Get { id } => print_json(&api::employees::get(client, id).await?),
            EmployeeCommands::Create {
                name,
                phone,
                label_ids,
            } => {
                let create = EmployeeCreate {
                    name,
                    phone,
                    telegram_user_id: None,
                    telegram_username: None,
                    is_active: None,
                    label_ids,
                };
                print_json(&api::employees::create(client, &create).await?)
            }
            EmployeeCommands::Tasks { id } => print_json(&api::employees::tasks(client, id).await?),
        },

        Commands::Label { command } => match command {
            LabelCommands::List => print_json(&api::labels::list(client).await?),
        },

        Commands::Task { command } => match command {
            TaskCommands::List {
                status,
                employee_id,
                priority,
                date,
            } => {
                let filter = TaskFilter {
                    status,
                    employee_id,
                    priority,
                    date,
                };
                print_json(&api::tasks::list(client, &filter).await?)
            }
            TaskCommands::Get { id } => print_json(&api::tasks::get(client, id).await?),
            TaskCommands::Create {
                title,
                description,
                priority,
                due_date,
                due_time,
                assigned_to,
                label_ids,
            } => {
                let create = TaskCreate {
                    title,
                    description,
                    task_type: None,
                    priority,
                    due_date,
                    due_time,
                    assigned_to,
                    label_ids,
                    parent_task_id: None,
                };
                print_json(&api::tasks::create(client, &create).await?)
            }
            TaskCommands::Assign { id, employee_id } => {
                print_json(&api::tasks::assign(client, id, employee_id).await?)
            }
            TaskCommands::Complete { id } => print_json(&api::tasks::complete(client, id).await?),
            TaskCommands::Overdue => print_json(&api::tasks::overdue(client).await?),
        },

        Commands::Routine { command } => match command {
            RoutineCommands::List => print_json(&api::routines::list(client).await?),
            RoutineCommands::Get { id } => print_json(&api::routines::get(client, id).await?),
            RoutineCommands::Generate { id } => {
                api::routines::generate(client, id).await?;
                tracing::info!(%id, "routine tasks generated");
                Ok(())
            }
        },

        Commands::Attendance { command } => match command {
            AttendanceCommands::Today => print_json(&api::attendance::today(client).await?),
            AttendanceCommands::History {
                start_date,
                end_date,
                employee_id,
            } => {
                let filter = AttendanceFilter {
                    start_date,
                    end_date,
                    employee_id,
                };
                print_json(&api::attendance::history(client, &filter).await?)
            }
            AttendanceCommands::Mark {
                employee_id,
                status,
                date,
            } => {
                let mark = MarkAttendance {
                    employee_id,
                    status,
                    date,
                };
                print_json(&api::attendance::mark(client, &mark).await?)
            }
            AttendanceCommands::Report {
                start_date,
                end_date,
                employee_id,
            } => {
                let filter = AttendanceFilter {
                    start_date: Some(start_date),
                    end_date: Some(end_date),
                    employee_id,
                };
                print_json(&api::attendance::report(client, &filter).await?)
            }
        },
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
