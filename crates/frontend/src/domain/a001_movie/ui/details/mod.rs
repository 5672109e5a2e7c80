//! Movie details UI module
//!
//! - model.rs: form draft and its validation (pure)
//! - view_model.rs: ViewModel with the save command
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use model::MovieDraft;
pub use view::MovieForm;
pub use view_model::MovieDetailsViewModel;
