// Resume upload handler.
// A pure submission core (form, response, render) wired to the outside world
// through thin adapters (transport, page). The CLI in main.rs is one such wiring.

pub mod config;
pub mod error;
pub mod form;
pub mod handler;
pub mod page;
pub mod render;
pub mod request;
pub mod response;
pub mod transport;

pub use form::{on_submit, Effect, FileSelection, SelectedFile};
pub use handler::{SubmitReport, UploadHandler};
pub use response::{interpret, Outcome};
