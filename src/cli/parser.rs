use crate::core::derive::AssignmentFilter;
use crate::export::{ExportFormat, ExportTarget};
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for studydesk
/// Local student planner backed by SQLite
#[derive(Parser)]
#[command(
    name = "studydesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A local student planner: classes, assignments, exams, a daily dashboard and a GPA calculator",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Record who is using the planner
    Signin {
        #[arg(long, help = "Display name (required)")]
        name: String,

        #[arg(long, help = "School or university (required)")]
        school: String,

        #[arg(long, help = "Contact email (required)")]
        email: String,
    },

    /// Forget the recorded identity
    Signout,

    /// Show or edit the profile
    Profile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        school: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Manage classes and their weekly schedule
    Class {
        #[command(subcommand)]
        action: ClassAction,
    },

    /// Manage assignments
    Assignment {
        #[command(subcommand)]
        action: AssignmentAction,
    },

    /// Manage exams
    Exam {
        #[command(subcommand)]
        action: ExamAction,
    },

    /// Today's classes, assignments due soon and upcoming exams
    Dashboard,

    /// GPA calculator (5-point scale)
    Gpa {
        #[command(subcommand)]
        action: GpaAction,
    },

    /// Show or toggle the light/dark theme
    Theme {
        #[arg(long, help = "Switch between light and dark")]
        toggle: bool,
    },

    /// Show, list or choose the accent color
    Accent {
        #[arg(long, value_name = "KEY", help = "Accent color key (violet, ocean, teal, rose, amber)")]
        set: Option<String>,

        #[arg(long, help = "List the available accent colors")]
        list: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup into a .zip archive")]
        compress: bool,

        #[arg(long, help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export one collection to CSV or JSON
    Export {
        #[arg(long, value_enum)]
        what: ExportTarget,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ClassAction {
    /// Add a class
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        teacher: String,

        #[arg(long, default_value = "")]
        room: String,

        /// Weekly slot, e.g. "Monday 09:00-10:30" (repeatable)
        #[arg(long = "slot", value_name = "SLOT")]
        slots: Vec<String>,
    },

    /// List classes
    List,

    /// Update a class; given slots replace the whole schedule
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        teacher: Option<String>,

        #[arg(long)]
        room: Option<String>,

        #[arg(long = "slot", value_name = "SLOT")]
        slots: Vec<String>,

        #[arg(long = "clear-schedule", conflicts_with = "slots")]
        clear_schedule: bool,
    },

    /// Delete a class
    Del { id: String },
}

#[derive(Subcommand)]
pub enum AssignmentAction {
    /// Add an assignment (always starts as Pending)
    Add {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long = "class", value_name = "CLASS_ID")]
        class: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        due: String,

        #[arg(long, default_value = "medium", help = "low, medium or high")]
        priority: String,
    },

    /// List assignments, pending first
    List {
        #[arg(long, value_enum, default_value = "all")]
        filter: ListFilter,
    },

    /// Update an assignment
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Class id; an empty value detaches the assignment
        #[arg(long = "class", value_name = "CLASS_ID")]
        class: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        due: Option<String>,

        #[arg(long)]
        priority: Option<String>,
    },

    /// Flip an assignment between Pending and Completed
    Toggle { id: String },

    /// Delete an assignment
    Del { id: String },
}

#[derive(Subcommand)]
pub enum ExamAction {
    /// Add an exam
    Add {
        #[arg(long)]
        title: String,

        #[arg(long = "class", value_name = "CLASS_ID")]
        class: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: String,

        #[arg(long, value_name = "HH:MM")]
        time: String,

        #[arg(long, default_value = "")]
        topics: String,

        #[arg(long, default_value = "final", help = "quiz, midterm, final or presentation")]
        kind: String,
    },

    /// List exams by date
    List,

    /// Delete an exam
    Del { id: String },
}

#[derive(Subcommand)]
pub enum GpaAction {
    /// Show every semester, its GPA and the CGPA
    Show,

    /// Manage semesters
    Semester {
        #[command(subcommand)]
        action: SemesterAction,
    },

    /// Manage the courses of a semester
    Course {
        #[command(subcommand)]
        action: CourseAction,
    },
}

#[derive(Subcommand)]
pub enum SemesterAction {
    /// Append a new semester with one blank course
    Add,

    /// Remove a semester (the last one cannot be removed)
    Del { id: String },

    /// Rename a semester
    Rename { id: String, name: String },
}

#[derive(Subcommand)]
pub enum CourseAction {
    /// Append a blank course to a semester
    Add { semester: String },

    /// Remove a course (a semester keeps at least one)
    Del { semester: String, course: String },

    /// Edit a course row
    Set {
        semester: String,
        course: String,

        #[arg(long)]
        name: Option<String>,

        /// Credit units; blank or non-numeric leaves the course unweighted
        #[arg(long, allow_hyphen_values = true)]
        units: Option<String>,

        #[arg(long, help = "Letter grade A-F")]
        grade: Option<String>,
    },
}

/// `--filter` values for `assignment list`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFilter {
    All,
    Pending,
    Completed,
}

impl From<ListFilter> for AssignmentFilter {
    fn from(f: ListFilter) -> Self {
        match f {
            ListFilter::All => AssignmentFilter::All,
            ListFilter::Pending => AssignmentFilter::Pending,
            ListFilter::Completed => AssignmentFilter::Completed,
        }
    }
}
