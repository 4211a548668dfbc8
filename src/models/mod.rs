pub mod answer;
pub mod employee;
pub mod survey;
