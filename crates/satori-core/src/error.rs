pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("<{tag}> is missing required attribute `{attribute}`")]
    MissingAttribute { tag: String, attribute: String },

    #[error("<{tag}> has invalid value for attribute `{attribute}`: {value}")]
    InvalidAttribute {
        tag: String,
        attribute: String,
        value: String,
    },
}
