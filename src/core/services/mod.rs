pub mod record_service;
pub mod report_service;

pub use record_service::RecordService;
pub use report_service::ReportService;
