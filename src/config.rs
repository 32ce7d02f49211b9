pub mod user;

pub const APPLICATION_NAME: &str = "org.tickprogress.demo";

/// Directory name under the user and system config dirs.
pub const CONFIG_DIR_NAME: &str = "tickprogress";
