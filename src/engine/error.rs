use std::{error::Error, fmt};

/// Everything that can stop a turn's decision. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    /// The phase line names no known phase.
    UnknownPhase(String),

    /// A card line names no known card location.
    UnknownCardLocation(String),

    /// A desk index outside the board.
    UnknownDesk(i64),

    /// A token that could not be read as the expected value.
    Malformed { what: &'static str, token: String },

    /// Input ended in the middle of a snapshot.
    UnexpectedEof { what: &'static str },

    /// A strategy picked an action the environment did not offer.
    /// Means our model of the rules diverged from the referee's.
    IllegalAction { attempted: String, legal: Vec<String> },
}

impl fmt::Display for DecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DecisionError::*;
        match self {
            UnknownPhase(tag) => write!(f, "unknown game phase '{tag}'"),
            UnknownCardLocation(tag) => write!(f, "unknown card location '{tag}'"),
            UnknownDesk(index) => write!(f, "no desk with index {index}"),
            Malformed { what, token } => write!(f, "could not read {what} from '{token}'"),
            UnexpectedEof { what } => write!(f, "input ended while reading {what}"),
            IllegalAction { attempted, legal } => write!(
                f,
                "action '{attempted}' is not legal this turn, legal actions are: [{}]",
                legal.join(", ")
            ),
        }
    }
}

impl Error for DecisionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_action_names_attempt_and_legal_set() {
        let error = DecisionError::IllegalAction {
            attempted: "MOVE 3".into(),
            legal: vec!["RANDOM".into(), "MOVE 4".into()],
        };
        let message = error.to_string();
        assert!(message.contains("'MOVE 3'"));
        assert!(message.contains("[RANDOM, MOVE 4]"));
    }

    #[test]
    fn protocol_errors_name_the_offending_token() {
        assert_eq!(DecisionError::UnknownPhase("LUNCH".into()).to_string(), "unknown game phase 'LUNCH'");
        assert_eq!(
            DecisionError::UnexpectedEof { what: "phase" }.to_string(),
            "input ended while reading phase"
        );
    }
}
