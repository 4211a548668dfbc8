use crate::cli::parser::{SurveyAction, SurveyArgs};
use crate::config::Config;
use crate::db::SurveyStore;
use crate::errors::{AppError, AppResult};
use crate::models::survey::Survey;
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::date::format_display;

use super::{open_store, parse_answer, parse_date_or_today, render_view};

fn build_survey(store: &SurveyStore, args: &SurveyArgs) -> AppResult<Survey> {
    let employee_id = store.resolve_employee(&args.employee)?;
    if employee_id < 0 {
        return Err(AppError::InvalidEmployeeId(employee_id));
    }

    Ok(Survey::new(
        parse_date_or_today(&args.date)?,
        employee_id,
        parse_answer(&args.q1)?,
        parse_answer(&args.q2)?,
        parse_answer(&args.q3)?,
        args.temperature,
    ))
}

/// Point the store at `employee_id`, reload and print its surveys.
fn show_surveys(store: &mut SurveyStore, employee_id: i64) -> AppResult<()> {
    store.set_current_employee_id(employee_id);
    store.refresh_survey_view()?;

    let view = store.survey_view();
    if view.is_empty() {
        info(format!("No surveys for employee {}.", view.employee_id()));
    } else {
        print!("{}", render_view(view));
    }
    Ok(())
}

pub fn handle(action: &SurveyAction, cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;

    match action {
        SurveyAction::Add { answers } => {
            let survey = build_survey(&store, answers)?;
            store.add_survey(&survey)?;
            success(format!(
                "Survey recorded for employee {} on {}.",
                survey.employee_id,
                survey.survey_date.map(format_display).unwrap_or_default()
            ));
            show_surveys(&mut store, survey.employee_id)?;
        }

        SurveyAction::Edit { answers } => {
            let survey = build_survey(&store, answers)?;
            let changed = store.edit_survey(&survey)?;
            if changed == 0 {
                warning("No survey exists for that employee and date; nothing changed.");
            } else {
                success("Survey updated.");
            }
            show_surveys(&mut store, survey.employee_id)?;
        }

        SurveyAction::Del { employee, date } => {
            let employee_id = store.resolve_employee(employee)?;
            let d = parse_date_or_today(date)?;

            if cfg.confirm_deletes
                && !confirm(format!(
                    "Delete the survey of employee {} on {}? This action is irreversible.",
                    employee_id,
                    format_display(d)
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            if store.remove_survey(d, employee_id)? == 0 {
                warning("No survey exists for that employee and date; nothing deleted.");
            } else {
                success("Survey deleted.");
            }
            show_surveys(&mut store, employee_id)?;
        }

        SurveyAction::List { employee, json } => {
            let employee_id = store.resolve_employee(employee)?;
            if *json {
                let surveys = store.surveys(employee_id)?;
                let out = serde_json::to_string_pretty(&surveys)
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{}", out);
            } else {
                show_surveys(&mut store, employee_id)?;
            }
        }
    }

    Ok(())
}
