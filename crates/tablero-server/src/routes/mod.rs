mod health_check;
pub use health_check::*;

mod projects;
pub use projects::*;
