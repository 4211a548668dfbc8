use chrono::NaiveDate;
use serde::Serialize;

/// One employee's answers for one calendar day.
///
/// `(survey_date, employee_id)` identifies a survey. The `Default` value is a
/// placeholder (no date, `employee_id = -1`) meant to be filled in before it
/// is handed to the store; the store refuses to persist it as is.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Survey {
    pub survey_date: Option<NaiveDate>,
    pub employee_id: i64,
    pub question_one: bool,
    pub question_two: bool,
    pub question_three: bool,
    /// Degrees Celsius.
    pub temperature: f64,
}

impl Default for Survey {
    fn default() -> Self {
        Self {
            survey_date: None,
            employee_id: -1,
            question_one: false,
            question_two: false,
            question_three: false,
            temperature: 0.0,
        }
    }
}

impl Survey {
    pub fn new(
        date: NaiveDate,
        employee_id: i64,
        question_one: bool,
        question_two: bool,
        question_three: bool,
        temperature: f64,
    ) -> Self {
        Self {
            survey_date: Some(date),
            employee_id,
            question_one,
            question_two,
            question_three,
            temperature,
        }
    }

    /// A survey can be persisted only once it belongs to an employee and a
    /// day, and carries a finite temperature.
    pub fn is_valid(&self) -> bool {
        self.employee_id >= 0 && self.survey_date.is_some() && self.temperature.is_finite()
    }

    /// The composite key, if the survey is valid.
    pub fn key(&self) -> Option<(NaiveDate, i64)> {
        if self.is_valid() {
            self.survey_date.map(|d| (d, self.employee_id))
        } else {
            None
        }
    }
}
