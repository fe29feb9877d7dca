use thiserror::Error;

/// Error raised while compiling a script into properties.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("Function '{0}' is not supported by the legacy parser")]
    UnsupportedFunction(String),

    #[error("nonlinear constraints are not supported")]
    Nonlinear,

    /// A variable that is neither an input nor an output survived
    /// simplification.
    #[error("unexpected variable type: '{0}' is neither an input nor an output")]
    UnexpectedVariable(String),

    #[error("'{function}' expects {expected} arguments, {given} given")]
    Arity {
        function: String,
        expected: usize,
        given: usize
    },

    #[error("'{0}' expects arithmetic terms as arguments")]
    ExpectedExpression(String),

    #[error("'{0}' expects constraints as arguments")]
    ExpectedConstraint(String),

    #[error("assertion is not a constraint")]
    NotAConstraint,

    #[error("'{inner}' cannot be nested under '{outer}'")]
    UnsupportedNesting {
        inner: &'static str,
        outer: &'static str
    },

    #[error("string constant \"{0}\" in a constraint")]
    StringConstant(String),

    #[error("constraint `{0}` mixes input and output variables")]
    MixedConstraint(String),

    #[error("constraint `{0}` bounds more than one input variable")]
    MultipleInputs(String),

    #[error("variable index {index} is out of range (size {size})")]
    IndexOutOfRange {
        index: usize,
        size: usize
    }
}

pub type Result<T> = std::result::Result<T, Error>;
