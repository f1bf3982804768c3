use clap::{Parser, Subcommand};

/// Command-line interface definition for barberbook
#[derive(Parser)]
#[command(
    name = "barberbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Barbershop booking: services, professionals, business hours and appointment slots on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Act as this user (overrides `user.email` from the configuration)
    #[arg(global = true, long = "user", value_name = "EMAIL")]
    pub user: Option<String>,

    /// Role of the --user identity: admin or customer
    #[arg(global = true, long = "role", requires = "user", value_name = "ROLE")]
    pub role: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the confirmation emails queued for delivery
    Outbox,

    /// Show or change the weekly business hours (changes require admin)
    Hours {
        /// Day to change: 0-6 (0 = Sunday) or a day name
        #[arg(long = "day")]
        day: Option<String>,

        #[arg(long = "open", value_name = "HH:MM", requires = "day")]
        open: Option<String>,

        #[arg(long = "close", value_name = "HH:MM", requires = "day")]
        close: Option<String>,

        /// Break window, e.g. 13:00-14:00
        #[arg(long = "break", value_name = "HH:MM-HH:MM", requires = "day")]
        break_window: Option<String>,

        #[arg(long = "no-break", conflicts_with = "break_window", requires = "day")]
        no_break: bool,

        #[arg(long = "closed", conflicts_with = "opened", requires = "day")]
        closed: bool,

        #[arg(long = "opened", requires = "day")]
        opened: bool,

        /// Restore the default week (Mon-Sat 09:00-20:00, Sunday closed)
        #[arg(long = "reset", conflicts_with = "day")]
        reset: bool,
    },

    /// Manage services
    Service {
        #[command(subcommand)]
        action: ServiceAction,
    },

    /// Manage professionals
    Pro {
        #[command(subcommand)]
        action: ProAction,
    },

    /// List the dates open for booking
    Dates,

    /// List available time slots for a date and professional
    Slots {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "pro", value_name = "ID")]
        pro: i64,

        #[arg(long)]
        json: bool,
    },

    /// Book an appointment
    Book {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM), one of the available slots
        time: String,

        #[arg(long = "service", value_name = "ID")]
        service: i64,

        #[arg(long = "pro", value_name = "ID")]
        pro: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List appointments (own appointments for customers, all for admins)
    Appointments {
        /// Only the current user's appointments, grouped as upcoming/past/cancelled
        #[arg(long)]
        mine: bool,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long = "pro", value_name = "ID")]
        pro: Option<i64>,

        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Cancel one of your appointments
    Cancel {
        id: i64,
    },

    /// Change an appointment status (admin): confirmed, completed or cancelled
    Status {
        id: i64,
        status: String,
    },

    /// Record the payment state of an appointment (admin)
    Pay {
        id: i64,

        #[arg(long, default_value = "paid")]
        status: String,
    },

    /// Admin dashboard figures
    Dashboard {
        #[arg(long)]
        json: bool,
    },

    /// Clients derived from appointments (admin)
    Clients {
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ServiceAction {
    /// Add a service
    Add {
        name: String,

        #[arg(long, default_value_t = 0)]
        price: i64,

        /// Duration in minutes
        #[arg(long, default_value_t = 30)]
        duration: u32,

        /// corte, color, barba, peinado, tratamiento, combo
        #[arg(long, default_value = "corte")]
        category: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// List services (active only unless --all)
    List {
        #[arg(long)]
        all: bool,
    },

    /// Change fields of a service
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<i64>,

        #[arg(long)]
        duration: Option<u32>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a service
    Del {
        id: i64,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ProAction {
    /// Add a professional
    Add {
        name: String,

        #[arg(long)]
        specialty: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// List professionals (active only unless --all)
    List {
        #[arg(long)]
        all: bool,
    },

    /// Change fields of a professional
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        specialty: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a professional
    Del {
        id: i64,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
