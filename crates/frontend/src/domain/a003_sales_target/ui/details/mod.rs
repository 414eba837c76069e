mod view;
mod view_model;

pub use view::SalesTargetDialog;
pub use view_model::SalesTargetDialogViewModel;
