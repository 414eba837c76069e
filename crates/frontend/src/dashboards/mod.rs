pub mod landing;
pub mod redirect;

pub use landing::{AdminDashboard, ManagerDashboard, WorkView};
pub use redirect::RoleRedirector;
