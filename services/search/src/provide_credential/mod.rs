mod env;
pub use env::EnvCredentialProvider;

mod r#static;
pub use r#static::StaticCredentialProvider;

mod default;
pub use default::DefaultCredentialProvider;
