/// Analysis modules — grouping files by extension and reporting on them.

pub mod extensions;
pub mod report;

pub use extensions::{extension_keys, ExtensionAggregator, ALL_FILES_KEY, NO_EXTENSION_KEY};
pub use report::{Report, ReportRow};
