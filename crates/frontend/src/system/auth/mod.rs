pub mod api;
pub mod context;
pub mod guard;
pub mod storage;

pub use context::{use_session, SessionContext, SessionProvider, SessionState};
pub use guard::RequireAuth;
