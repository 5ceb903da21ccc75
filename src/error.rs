#[derive(Debug)]
pub enum Error {
    /// The registration call failed or returned something unusable.
    Registration(String),
    /// The registration id does not end in two digits.
    Parse(String),
    /// The webhook rejected the submission or could not be reached.
    Submission { status: Option<u16>, message: String },
    Client(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Registration(msg) => write!(f, "Registration Error: {msg}"),
            Error::Parse(msg) => write!(f, "Parse Error: {msg}"),
            Error::Submission {
                status: Some(code),
                message,
            } => write!(f, "Submission Error: status {code}: {message}"),
            Error::Submission {
                status: None,
                message,
            } => write!(f, "Submission Error: {message}"),
            Error::Client(msg) => write!(f, "HTTP Client Error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
