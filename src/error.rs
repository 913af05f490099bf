use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --sample-json: {source}")]
    ParseSampleJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseCmdInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not initialise logging: {0}")]
    InitLogging(String),

    #[error("Unknown algorithm '{0}': expected 1-9 or a name such as 'density'")]
    UnknownAlgorithm(String),

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide --algo with values, --sample-json, --input or --summary")]
    MissingInputData,

    #[cfg(feature = "cli")]
    #[error("Missing algorithm: provide --algo or include 'algorithm' in the input document")]
    MissingAlgorithm,
}
