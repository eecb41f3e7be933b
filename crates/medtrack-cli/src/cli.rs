//! CLI argument definitions for MedTrack.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use medtrack_model::{Frequency, MedicationDraft, RecordId, VisitDraft};

#[derive(Parser)]
#[command(
    name = "medtrack",
    version,
    about = "MedTrack - track medications and doctor visits",
    long_about = "Track medications, doses and stock, and upcoming doctor visits.\n\n\
                  All data stays on this machine as JSON files in the data directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Folder holding medications, visits and the subscription record.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Settings file (default: platform config folder).
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include medication and doctor names in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show counts, low-stock alerts and the next visits.
    Dashboard,

    /// Manage medications.
    #[command(subcommand)]
    Med(MedCommand),

    /// Manage doctor visits.
    #[command(subcommand)]
    Visit(VisitCommand),

    /// Show or change the subscription plan.
    #[command(subcommand)]
    Plan(PlanCommand),

    /// Delete all medications and visits.
    Reset {
        /// Confirm that the data should be deleted. This cannot be undone.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum MedCommand {
    /// List all medications.
    List,
    /// Add a medication.
    Add(MedicationFields),
    /// Change fields of an existing medication.
    Edit {
        id: RecordId,
        #[command(flatten)]
        fields: MedicationFields,
    },
    /// Remove a medication.
    Remove { id: RecordId },
    /// Record one dose taken.
    Take { id: RecordId },
}

#[derive(Subcommand)]
pub enum VisitCommand {
    /// List all visits, earliest first.
    List,
    /// Schedule a visit.
    Add(VisitFields),
    /// Change fields of an existing visit.
    Edit {
        id: RecordId,
        #[command(flatten)]
        fields: VisitFields,
    },
    /// Cancel (remove) a visit.
    Remove { id: RecordId },
}

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Show the current plan and trial days left.
    Status,
    /// Upgrade to Premium.
    Upgrade,
    /// Cancel the Premium plan.
    Cancel {
        /// Confirm the cancellation.
        #[arg(long)]
        yes: bool,
    },
}

/// Medication form. Unset fields keep their current (or default) value.
#[derive(Args, Default)]
pub struct MedicationFields {
    /// Medication name, e.g. Amoxicillin.
    #[arg(long)]
    pub name: Option<String>,
    /// Dosage, e.g. 500mg.
    #[arg(long)]
    pub dosage: Option<String>,
    /// Daily, twice-daily, weekly or as-needed.
    #[arg(long)]
    pub frequency: Option<Frequency>,
    /// Dose time as HH:MM.
    #[arg(long)]
    pub time: Option<String>,
    /// Doses on hand.
    #[arg(long)]
    pub stock: Option<u32>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl MedicationFields {
    pub fn apply(self, mut draft: MedicationDraft) -> MedicationDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(dosage) = self.dosage {
            draft.dosage = dosage;
        }
        if let Some(frequency) = self.frequency {
            draft.frequency = frequency;
        }
        if let Some(time) = self.time {
            draft.time = time;
        }
        if let Some(stock) = self.stock {
            draft.stock = stock;
        }
        if let Some(notes) = self.notes {
            draft.notes = notes;
        }
        draft
    }
}

/// Visit form. Unset fields keep their current (or empty) value.
#[derive(Args, Default)]
pub struct VisitFields {
    /// Doctor's name, e.g. "Dr. Smith".
    #[arg(long = "doctor")]
    pub doctor_name: Option<String>,
    #[arg(long)]
    pub specialty: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// Visit date as YYYY-MM-DD.
    #[arg(long)]
    pub date: Option<String>,
    /// Visit time as HH:MM.
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub reason: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl VisitFields {
    pub fn apply(self, mut draft: VisitDraft) -> VisitDraft {
        if let Some(doctor_name) = self.doctor_name {
            draft.doctor_name = doctor_name;
        }
        if let Some(specialty) = self.specialty {
            draft.specialty = specialty;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(time) = self.time {
            draft.time = time;
        }
        if let Some(reason) = self.reason {
            draft.reason = reason;
        }
        if let Some(notes) = self.notes {
            draft.notes = notes;
        }
        draft
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
