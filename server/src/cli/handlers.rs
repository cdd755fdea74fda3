// server/src/cli/handlers.rs

use std::io::Write;

use anyhow::{anyhow, bail, Context, Result};
use hospital_store::storage_engine::HospitalStorageEngine;
use log::debug;
use models::{Hospital, HospitalUpdate};
use serde_json::Value;

use crate::cli::commands::HospitalCommand;

/// Runs one command against `storage`, writing human-facing output to `out`.
pub async fn handle_command<W: Write + Send>(
    storage: &dyn HospitalStorageEngine,
    command: HospitalCommand,
    out: &mut W,
) -> Result<()> {
    debug!("Handling command {:?} with {} storage", command, storage.get_type());
    match command {
        HospitalCommand::Register(args) => {
            let hospital = storage
                .create_hospital(args.into())
                .await
                .context("Failed to register hospital")?;
            writeln!(out, "Registered hospital {}: {}", hospital.id(), hospital)?;
        }
        HospitalCommand::Show { id, labels } => {
            let hospital = storage
                .get_hospital(&id)
                .await?
                .ok_or_else(|| anyhow!("No hospital with id {}", id))?;
            if labels {
                print_labelled(&hospital, out)?;
            } else {
                print_json(&hospital, out)?;
            }
        }
        HospitalCommand::FindByPhone { phone } => {
            let hospital = storage
                .get_hospital_by_phone(&phone)
                .await?
                .ok_or_else(|| anyhow!("No hospital with phone number {}", phone))?;
            print_json(&hospital, out)?;
        }
        HospitalCommand::List => {
            let hospitals = storage.get_all_hospitals().await?;
            if hospitals.is_empty() {
                writeln!(out, "No hospitals registered.")?;
            }
            for hospital in hospitals {
                writeln!(
                    out,
                    "{}  {}  {}  beds={}  emergency={}",
                    hospital.id(),
                    hospital,
                    hospital.phone_number,
                    hospital.total_beds(),
                    if hospital.emergency { "yes" } else { "no" },
                )?;
            }
        }
        HospitalCommand::Update { id, fields } => {
            let update: HospitalUpdate = fields.into();
            if update.is_empty() {
                bail!("No fields given to update for hospital {}", id);
            }
            let hospital = storage
                .update_hospital(&id, update)
                .await
                .with_context(|| format!("Failed to update hospital {}", id))?;
            writeln!(out, "Updated hospital {}: {}", id, hospital)?;
        }
        HospitalCommand::Delete { id } => {
            if storage.delete_hospital(&id).await? {
                writeln!(out, "Deleted hospital {}", id)?;
            } else {
                writeln!(out, "No hospital with id {}", id)?;
            }
        }
        HospitalCommand::Count => {
            writeln!(out, "{}", storage.count().await?)?;
        }
    }
    Ok(())
}

fn print_json<W: Write>(hospital: &Hospital, out: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(hospital).context("Failed to serialize hospital")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn print_labelled<W: Write>(hospital: &Hospital, out: &mut W) -> Result<()> {
    let value = serde_json::to_value(hospital).context("Failed to serialize hospital")?;
    for (field, label) in Hospital::FIELD_LABELS {
        let rendered = match value.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        writeln!(out, "{}: {}", label, rendered)?;
    }
    Ok(())
}
