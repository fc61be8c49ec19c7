mod form;
mod report_model;

pub use form::WageForm;
pub use report_model::ReportModel;
