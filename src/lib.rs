pub mod error;

pub use twirl_app as app;
pub use twirl_domain as domain;
pub use twirl_infra as infra;
pub use twirl_ui as ui;
