use crate::cli::parser::EmployeeAction;
use crate::config::Config;
use crate::db::SurveyStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success, warning};

use super::{open_store, render_view};

fn print_employees(store: &SurveyStore) {
    let view = store.employee_view();
    if view.is_empty() {
        info("No employees.");
    } else {
        print!("{}", render_view(view));
    }
}

pub fn handle(action: &EmployeeAction, cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;

    match action {
        EmployeeAction::Add { name } => {
            let id = store.add_employee(name)?;
            success(format!("Employee '{}' added with id {}.", name.trim(), id));

            store.refresh_employee_view()?;
            print_employees(&store);
        }

        EmployeeAction::List { json } => {
            if *json {
                let employees = store.employees()?;
                let out = serde_json::to_string_pretty(&employees)
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{}", out);
            } else {
                print_employees(&store);
            }
        }

        EmployeeAction::Rename { employee, new_name } => {
            let id = store.resolve_employee(employee)?;
            let changed = store.edit_employee(id, new_name)?;

            if changed == 0 {
                warning(format!("No employee matched '{}'.", employee));
            } else {
                success(format!("Employee '{}' renamed to '{}'.", employee, new_name.trim()));
            }

            store.refresh_employee_view()?;
            print_employees(&store);
        }

        EmployeeAction::Del { employee } => {
            let id = store.resolve_employee(employee)?;
            let view = store.employee_view();
            let name = view
                .position_of(id)
                .and_then(|row| view.name_at(row))
                .map(str::to_string)
                .ok_or_else(|| AppError::EmployeeNotFound(employee.clone()))?;

            if cfg.confirm_deletes
                && !confirm(format!(
                    "Delete employee '{}' (id {}) and ALL of their surveys? This action is irreversible.",
                    name, id
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let surveys = store.remove_employee(id)?;
            success(format!(
                "Employee '{}' deleted ({} survey(s) removed).",
                name, surveys
            ));

            store.refresh_employee_view()?;
            print_employees(&store);
        }
    }

    Ok(())
}
