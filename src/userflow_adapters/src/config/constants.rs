pub mod env {
    pub const APPLICATION_ADDRESS_ENV_VAR: &str = "APPLICATION__ADDRESS";
    pub const BASIC_AUTH_USERNAME_ENV_VAR: &str = "BASIC_AUTH__USERNAME";
    pub const BASIC_AUTH_PASSWORD_ENV_VAR: &str = "BASIC_AUTH__PASSWORD";
}

/// Separator between nesting levels in environment variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Realm announced in the `WWW-Authenticate` challenge.
pub const BASIC_AUTH_REALM: &str = "B2C";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
