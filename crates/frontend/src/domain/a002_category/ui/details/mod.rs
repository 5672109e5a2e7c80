//! Category details UI module: draft model, ViewModel and form view

mod model;
mod view;
mod view_model;

pub use model::CategoryDraft;
pub use view::CategoryForm;
pub use view_model::CategoryDetailsViewModel;
