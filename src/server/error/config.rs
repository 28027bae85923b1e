use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be interpreted.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Variable name
        name: String,
        /// The rejected value
        value: String,
    },

    /// None of `JWT_JWK_SET_URI`, `JWT_ISSUER_URI` or `JWT_HMAC_SECRET` is set.
    #[error("No JWT key source configured; set JWT_JWK_SET_URI, JWT_ISSUER_URI or JWT_HMAC_SECRET")]
    MissingKeySource,

    /// The OpenID discovery document did not name a `jwks_uri`.
    #[error("OpenID configuration at {0} has no jwks_uri")]
    MissingJwksUri(String),
}
