use thiserror::Error;

/// Invalid slider configuration, reported when the widget is attached
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// `navigatorFrom` (range mode) and `step` (step mode) were both supplied
    #[error("navigatorFrom and step can not be used together")]
    MutuallyExclusiveOptions,

    #[error("navigatorFrom: {from} must be lower than navigatorTo: {to}")]
    InvalidRange { from: i64, to: i64 },

    #[error("attribute {attribute} is not a number: {value:?}")]
    InvalidNumber { attribute: String, value: String },

    /// The step count overflows or exceeds the supported number of markers
    #[error("slider can not have more than {max} steps")]
    TooManySteps { max: i64 },

    /// The markup has no descendant with the required class
    #[error("no element with class {class:?} inside the slider markup")]
    MissingElement { class: String },
}
