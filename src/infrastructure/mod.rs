pub mod logging;
pub mod repositories;
