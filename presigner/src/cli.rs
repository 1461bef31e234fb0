use clap::{builder::NonEmptyStringValueParser, Parser};
use s3_connection::ConnectionArgs;

/// Endpoint used when `S3_ENDPOINT` is not set
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3900";

/// Generate a presigned GET URL, valid for one hour, for an object in an S3-compatible store
#[derive(Parser)]
#[command(name = "generate-signed-url", version)]
pub struct Cli {
    /// Bucket containing the object
    #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
    pub bucket: String,

    /// Key of the object
    #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
    pub key: String,

    /// Endpoint, region and credentials
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["generate-signed-url", "media", "photos/cat.jpg"]).unwrap();

        assert_eq!(cli.bucket, "media");
        assert_eq!(cli.key, "photos/cat.jpg");
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let err = Cli::try_parse_from(["generate-signed-url", "media"])
            .err()
            .unwrap();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_empty_bucket_is_rejected() {
        let err = Cli::try_parse_from(["generate-signed-url", "", "photos/cat.jpg"])
            .err()
            .unwrap();

        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_hyphen_prefixed_key() {
        let cli = Cli::try_parse_from(["generate-signed-url", "media", "-backup.tar"]).unwrap();
        assert_eq!(cli.key, "-backup.tar");

        let cli = Cli::try_parse_from(["generate-signed-url", "media", "--region"]).unwrap();
        assert_eq!(cli.key, "--region");
        assert_eq!(cli.connection.region, None);
    }

    #[test]
    fn test_flags_before_positionals() {
        let cli = Cli::try_parse_from([
            "generate-signed-url",
            "--region",
            "dc1",
            "media",
            "photos/cat.jpg",
        ])
        .unwrap();

        assert_eq!(cli.connection.region.as_deref(), Some("dc1"));
        assert_eq!(cli.bucket, "media");
    }

    #[test]
    fn test_extra_argument_is_rejected() {
        let err = Cli::try_parse_from(["generate-signed-url", "media", "cat.jpg", "extra"])
            .err()
            .unwrap();

        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
