pub mod logo;
pub mod registration;
pub mod spreadsheet_service;
pub use spreadsheet_service::SpreadsheetService;
