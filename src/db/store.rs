//! [`SurveyStore`]: the only owner of the survey database.
//!
//! Every public operation opens a connection, runs and closes it again; no
//! connection survives between calls. The two views are refreshed on
//! [`SurveyStore::open`] and whenever the caller asks for it, never
//! implicitly after a mutation.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::db::schema;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::survey::Survey;
use crate::view::{EmployeeView, SurveyView};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, error, warn};

/// Current-employee value meaning "nobody selected".
pub const NO_EMPLOYEE: i64 = -1;

/// Default database file name, placed next to the executable.
pub const DEFAULT_DB_FILE: &str = "survey.data";

#[derive(Debug)]
pub struct SurveyStore {
    pool: DbPool,
    current_employee_id: i64,
    survey_view: SurveyView,
    employee_view: EmployeeView,
}

/// Log a failed operation once, at the store boundary.
fn logged<T>(operation: &str, result: AppResult<T>) -> AppResult<T> {
    if let Err(e) = &result {
        if e.is_storage() {
            error!(operation, "(DB) {e}");
        } else {
            warn!(operation, "rejected: {e}");
        }
    }
    result
}

impl SurveyStore {
    /// Open the database at `path`, creating file and schema if missing, and
    /// load both views.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let mut store = Self {
            pool: DbPool::new(path),
            current_employee_id: NO_EMPLOYEE,
            survey_view: SurveyView::default(),
            employee_view: EmployeeView::default(),
        };

        logged("open", store.ensure_schema())?;
        store.refresh_employee_view()?;
        store.refresh_survey_view()?;
        Ok(store)
    }

    fn ensure_schema(&self) -> AppResult<()> {
        let existed = self.pool.exists();
        self.pool.with_conn(|conn| {
            if existed && schema::schema_present(conn)? {
                return Ok(());
            }
            debug!(path = %self.pool.path().display(), "creating survey schema");
            schema::create_schema(conn)
        })
    }

    pub fn path(&self) -> &Path {
        self.pool.path()
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    // ---------------------------
    // Views
    // ---------------------------

    pub fn survey_view(&self) -> &SurveyView {
        &self.survey_view
    }

    pub fn employee_view(&self) -> &EmployeeView {
        &self.employee_view
    }

    /// Surveys of `employee_id`, independent of the current-employee filter.
    pub fn query_survey_view(&self, employee_id: i64) -> AppResult<SurveyView> {
        let rows = logged(
            "query_survey_view",
            self.pool
                .with_conn(|conn| Ok(queries::load_survey_rows(conn, employee_id)?)),
        )?;
        Ok(SurveyView::new(employee_id, rows))
    }

    pub fn refresh_survey_view(&mut self) -> AppResult<()> {
        self.survey_view = self.query_survey_view(self.current_employee_id)?;
        Ok(())
    }

    pub fn refresh_employee_view(&mut self) -> AppResult<()> {
        let rows = logged(
            "refresh_employee_view",
            self.pool
                .with_conn(|conn| Ok(queries::load_employee_rows(conn)?)),
        )?;
        self.employee_view = EmployeeView::new(rows);
        Ok(())
    }

    // ---------------------------
    // Current employee
    // ---------------------------

    pub fn current_employee_id(&self) -> i64 {
        self.current_employee_id
    }

    /// Ids below -1 are ignored.
    pub fn set_current_employee_id(&mut self, id: i64) {
        if id >= NO_EMPLOYEE {
            self.current_employee_id = id;
        }
    }

    // ---------------------------
    // Employees
    // ---------------------------

    pub fn employee_exists(&self, name: &str) -> AppResult<bool> {
        logged(
            "employee_exists",
            self.pool
                .with_conn(|conn| Ok(queries::employee_exists(conn, name.trim())?)),
        )
    }

    pub fn employees(&self) -> AppResult<Vec<Employee>> {
        logged(
            "employees",
            self.pool.with_conn(|conn| Ok(queries::load_employees(conn)?)),
        )
    }

    /// Insert a new employee and return its id. Names are unique regardless
    /// of case.
    pub fn add_employee(&self, name: &str) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return logged("add_employee", Err(AppError::EmptyName));
        }
        let result = self.pool.with_conn(|conn| {
            if queries::employee_exists(conn, name)? {
                return Err(AppError::DuplicateEmployee(name.to_string()));
            }
            let id = queries::insert_employee(conn, name)?;
            debug!(id, name, "employee added");
            Ok(id)
        });
        logged("add_employee", result)
    }

    /// Delete an employee together with all of their surveys, atomically.
    /// Returns the number of surveys removed.
    pub fn remove_employee(&self, id: i64) -> AppResult<usize> {
        let result = self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let surveys = queries::delete_surveys_of(&tx, id)?;
            let employees = queries::delete_employee(&tx, id)?;
            tx.commit()?;
            debug!(id, surveys, employees, "employee removed");
            Ok(surveys)
        });
        logged("remove_employee", result)
    }

    /// Rename by id. Returns the number of rows changed.
    pub fn edit_employee(&self, id: i64, new_name: &str) -> AppResult<usize> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return logged("edit_employee", Err(AppError::EmptyName));
        }
        let result = self
            .pool
            .with_conn(|conn| Ok(queries::rename_employee_by_id(conn, id, new_name)?));
        logged("edit_employee", result)
    }

    /// Rename the employee whose name is exactly `current_name`.
    pub fn edit_employee_by_name(&self, current_name: &str, new_name: &str) -> AppResult<usize> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return logged("edit_employee_by_name", Err(AppError::EmptyName));
        }
        let result = self.pool.with_conn(|conn| {
            Ok(queries::rename_employee_by_name(conn, current_name, new_name)?)
        });
        logged("edit_employee_by_name", result)
    }

    /// Resolve an employee given an exact name or an id. A name match wins,
    /// so an employee called "7" is found by name before id 7 is assumed.
    pub fn resolve_employee(&self, id_or_name: &str) -> AppResult<i64> {
        let result = self.pool.with_conn(|conn| {
            if let Some(id) = queries::find_employee_id(conn, id_or_name.trim())? {
                return Ok(id);
            }
            id_or_name
                .trim()
                .parse::<i64>()
                .map_err(|_| AppError::EmployeeNotFound(id_or_name.to_string()))
        });
        logged("resolve_employee", result)
    }

    // ---------------------------
    // Surveys
    // ---------------------------

    /// `(date, timestamp, employee_id)` of a valid survey.
    fn key_of(survey: &Survey) -> AppResult<(NaiveDate, i64, i64)> {
        let (date, employee_id) = survey.key().ok_or(AppError::InvalidSurvey)?;
        Ok((date, queries::survey_key(date)?, employee_id))
    }

    /// Insert a survey. At most one survey per employee and day.
    pub fn add_survey(&self, survey: &Survey) -> AppResult<()> {
        let result = Self::key_of(survey).and_then(|(date, ts, employee_id)| {
            self.pool.with_conn(|conn| {
                if queries::survey_exists(conn, ts, employee_id)? {
                    return Err(AppError::DuplicateSurvey { date, employee_id });
                }
                queries::insert_survey(conn, ts, survey)?;
                debug!(employee_id, ts, "survey added");
                Ok(())
            })
        });
        logged("add_survey", result)
    }

    /// Delete the survey at `(date, employee_id)`. A key matching nothing is
    /// not an error; the returned count is 0.
    pub fn remove_survey(&self, date: NaiveDate, employee_id: i64) -> AppResult<usize> {
        let result = queries::survey_key(date).and_then(|ts| {
            self.pool.with_conn(|conn| {
                let n = queries::delete_survey(conn, ts, employee_id)?;
                debug!(employee_id, ts, rows = n, "survey removed");
                Ok(n)
            })
        });
        logged("remove_survey", result)
    }

    /// Overwrite answers and temperature of the survey at the same key. The
    /// key itself never changes; a key matching nothing returns 0.
    pub fn edit_survey(&self, survey: &Survey) -> AppResult<usize> {
        let result = Self::key_of(survey).and_then(|(_, ts, employee_id)| {
            self.pool.with_conn(|conn| {
                let n = queries::update_survey(conn, ts, survey)?;
                debug!(employee_id, ts, rows = n, "survey edited");
                Ok(n)
            })
        });
        logged("edit_survey", result)
    }

    pub fn surveys(&self, employee_id: i64) -> AppResult<Vec<Survey>> {
        logged(
            "surveys",
            self.pool
                .with_conn(|conn| Ok(queries::load_surveys(conn, employee_id)?)),
        )
    }
}
