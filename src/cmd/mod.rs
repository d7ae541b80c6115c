//! CLI command implementations.
//!
//! | Module      | Commands handled |
//! |-------------|------------------|
//! | `install`   | `Install` (default) |
//! | `status`    | `Status`         |
//! | `uninstall` | `Uninstall`      |

pub mod install;
pub mod status;
pub mod uninstall;

pub use install::cmd_install;
pub use status::cmd_status;
pub use uninstall::cmd_uninstall;
