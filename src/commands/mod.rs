pub mod check;
pub mod ci;
pub(crate) mod context;
pub mod init;
pub mod names;

pub use check::{run_check, run_check_impl};
pub use ci::{run_ci, run_ci_impl};
pub use init::{run_init, run_init_impl};
pub use names::{run_names, run_names_impl};
