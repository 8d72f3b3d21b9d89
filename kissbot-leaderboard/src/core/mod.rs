pub mod category;
pub mod metric;
pub mod record;

pub use category::Category;
pub use metric::Metric;
pub use record::{CategoryRecord, DisplayContext, Record, StringFormat};
