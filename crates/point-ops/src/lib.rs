pub mod batch;
pub mod config;
pub mod export;
pub mod import;
pub mod types;

pub use batch::{split, BatchPlan};
pub use config::{BatchConfig, ExportConfig, ImportConfig, RemainderPolicy, EXPORT_FILE_NAME};
pub use export::{export_surface_points, ExportReport, ExportRequest};
pub use import::{import_csv_points, ImportReport, ImportRequest};
pub use types::OpError;
