use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::models::attendance::AttendanceStatus;
use crate::models::task::{TaskPriority, TaskStatus};

/// ShopDesk — terminal client for the ShopDesk task & attendance API
#[derive(Parser)]
#[command(name = "shopdesk", version, about)]
pub struct Cli {
    /// Username to authenticate with
    #[arg(long, env = "SHOPDESK_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password to authenticate with
    #[arg(long, env = "SHOPDESK_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify credentials and print the authenticated user
    Whoami,

    /// Dashboard overview statistics
    Stats,

    /// Employee roster
    Employee {
        #[command(subcommand)]
        command: EmployeeCommands,
    },

    /// Employee labels
    Label {
        #[command(subcommand)]
        command: LabelCommands,
    },

    /// Task board
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },

    /// Recurring-task configuration
    Routine {
        #[command(subcommand)]
        command: RoutineCommands,
    },

    /// Attendance summaries and marking
    Attendance {
        #[command(subcommand)]
        command: AttendanceCommands,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// List all employees
    List,
    /// Show one employee
    Get { id: Uuid },
    /// Add an employee to the roster
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, value_delimiter = ',')]
        label_ids: Option<Vec<Uuid>>,
    },
    /// Tasks currently assigned to an employee
    Tasks { id: Uuid },
}

#[derive(Subcommand)]
pub enum LabelCommands {
    /// List all labels
    List,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks, optionally filtered
    List {
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(long)]
        employee_id: Option<Uuid>,
        #[arg(long)]
        priority: Option<TaskPriority>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show one task with its subtasks and comments
    Get { id: Uuid },
    /// Create a one-time task
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<TaskPriority>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: NaiveDate,
        /// Due time (HH:MM:SS)
        #[arg(long)]
        due_time: Option<NaiveTime>,
        #[arg(long)]
        assigned_to: Option<Uuid>,
        #[arg(long, value_delimiter = ',')]
        label_ids: Option<Vec<Uuid>>,
    },
    /// Assign a task to an employee
    Assign {
        id: Uuid,
        #[arg(long)]
        employee_id: Uuid,
    },
    /// Mark a task completed
    Complete { id: Uuid },
    /// List overdue tasks
    Overdue,
}

#[derive(Subcommand)]
pub enum RoutineCommands {
    /// List all routines
    List,
    /// Show one routine
    Get { id: Uuid },
    /// Generate today's tasks from a routine now
    Generate { id: Uuid },
}

#[derive(Subcommand)]
pub enum AttendanceCommands {
    /// Today's attendance summary
    Today,
    /// Attendance history
    History {
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long)]
        end_date: Option<NaiveDate>,
        #[arg(long)]
        employee_id: Option<Uuid>,
    },
    /// Mark attendance for an employee
    Mark {
        #[arg(long)]
        employee_id: Uuid,
        /// present, absent, half_day, or on_leave
        #[arg(long)]
        status: AttendanceStatus,
        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Attendance report over a date range
    Report {
        #[arg(long)]
        start_date: NaiveDate,
        #[arg(long)]
        end_date: NaiveDate,
        #[arg(long)]
        employee_id: Option<Uuid>,
    },
}
