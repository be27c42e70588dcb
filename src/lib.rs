pub mod args;
pub mod counter;
pub mod error;
pub mod observer;
pub mod record;
pub mod stats;
pub mod utils;

pub use args::{Args, OutputFormat};
pub use counter::{most_active_cookies, most_active_lines, scan_file, scan_lines, scan_reader, FrequencyTable};
pub use error::ScanError;
pub use observer::{NoopObserver, ScanObserver, TracingObserver};
pub use record::{parse_line, CookieRecord};
pub use stats::{MostActive, ScanSummary};
