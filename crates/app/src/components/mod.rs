mod form;
mod header;
mod info;
mod results;


pub use form::CauseListForm;
pub use header::{Header, OfflineBanner};
pub use info::{DataSources, Features, Footer};
pub use results::ResultPanel;
