// server/src/cli/commands.rs

// Command-line arguments and subcommands for the hospital registry CLI.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hospital_store::config::StorageEngineType;
use models::{HospitalUpdate, NewHospital};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "hospital-cli", version, about = "Register and manage hospital records")]
pub struct CliArgs {
    /// Path to the storage config YAML.
    #[arg(long, short = 'c', global = true, env = "HOSPITAL_CONFIG")]
    pub config: Option<PathBuf>,
    /// Overrides the engine named in the config file.
    #[arg(long, global = true, value_parser = parse_engine_type)]
    pub engine: Option<StorageEngineType>,
    #[command(subcommand)]
    pub command: HospitalCommand,
}

fn parse_engine_type(s: &str) -> Result<StorageEngineType, String> {
    s.parse::<StorageEngineType>().map_err(|e| e.to_string())
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum HospitalCommand {
    /// Register a new hospital.
    Register(RegisterArgs),
    /// Print one hospital as JSON.
    Show {
        id: Uuid,
        /// Print labelled fields instead of JSON.
        #[arg(long)]
        labels: bool,
    },
    /// Print the hospital registered under a phone number as JSON.
    FindByPhone {
        phone: String,
    },
    /// List all hospitals ordered by name.
    List,
    /// Change the given fields of a hospital.
    Update {
        id: Uuid,
        #[command(flatten)]
        fields: UpdateArgs,
    },
    /// Delete a hospital and free its phone number.
    Delete {
        id: Uuid,
    },
    /// Print the number of registered hospitals.
    Count,
}

#[derive(Debug, Args, PartialEq)]
pub struct RegisterArgs {
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub latitude: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub longitude: f64,
    /// Emergency care is available.
    #[arg(long)]
    pub emergency: bool,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub general_beds: i32,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub icu_beds: i32,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub private_beds: i32,
}

impl From<RegisterArgs> for NewHospital {
    fn from(args: RegisterArgs) -> Self {
        NewHospital {
            hospital_name: args.name.unwrap_or_default(),
            latitude: args.latitude,
            longitude: args.longitude,
            phone_number: args.phone,
            emergency: args.emergency,
            general_beds: args.general_beds,
            icu_beds: args.icu_beds,
            private_beds: args.private_beds,
        }
    }
}

#[derive(Debug, Args, PartialEq, Default)]
pub struct UpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,
    #[arg(long)]
    pub emergency: Option<bool>,
    #[arg(long, allow_negative_numbers = true)]
    pub general_beds: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    pub icu_beds: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    pub private_beds: Option<i32>,
}

impl From<UpdateArgs> for HospitalUpdate {
    fn from(args: UpdateArgs) -> Self {
        HospitalUpdate {
            hospital_name: args.name,
            latitude: args.latitude,
            longitude: args.longitude,
            phone_number: args.phone,
            emergency: args.emergency,
            general_beds: args.general_beds,
            icu_beds: args.icu_beds,
            private_beds: args.private_beds,
        }
    }
}
