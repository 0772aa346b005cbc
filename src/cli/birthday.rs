//! Birthday CLI commands
//!
//! Runs the requested operations against the birthday file, then prints the
//! full list. A `-config` switches the file for everything after it.

use chrono::NaiveDateTime;

use super::args::{Invocation, Operation};
use crate::config::BdPaths;
use crate::display::format_birthday_list;
use crate::error::BdResult;
use crate::services::BirthdayService;
use crate::storage::Storage;

/// Handle a single add or remove
pub fn handle_operation(storage: &Storage, op: &Operation, now: NaiveDateTime) -> BdResult<()> {
    let service = BirthdayService::new(storage);

    match op {
        Operation::Config { .. } => {}
        Operation::Add { date, name } => {
            let (birth, name) = service.add(date, name, now)?;
            println!("Added: {} {}", birth, name);
        }
        Operation::Remove { name } => {
            let removed = service.remove(name)?;
            println!("Removed: {} {}", removed.birth, removed.name);
        }
    }

    Ok(())
}

/// Run every operation in order, stopping at the first error, then list
/// the file in effect at the end
pub fn handle_invocation(invocation: &Invocation, now: NaiveDateTime) -> BdResult<()> {
    let mut config = invocation.config.as_str();

    for op in &invocation.operations {
        match op {
            Operation::Config { path } => config = path.as_str(),
            _ => {
                let storage = Storage::new(BdPaths::new(config)?);
                handle_operation(&storage, op, now)?;
            }
        }
    }

    let storage = Storage::new(BdPaths::new(invocation.final_config())?);
    let list = BirthdayService::new(&storage).list(now)?;
    print!("{}", format_birthday_list(&list));

    Ok(())
}
