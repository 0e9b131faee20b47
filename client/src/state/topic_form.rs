//! Topic entry form state and client-side validation.

#[cfg(test)]
#[path = "topic_form_test.rs"]
mod topic_form_test;

/// Shown when the user submits a blank topic.
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter an AI technology topic";
/// Shown when a submit fails without a message.
pub const SUBMIT_FAILED_MESSAGE: &str = "An error occurred while processing your request";

/// Form state for the topic entry view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicFormState {
    pub topic: String,
    pub loading: bool,
    pub error: String,
}

/// Check a topic before it is sent. Blank input never reaches the network.
///
/// The topic is returned untrimmed; only the emptiness check ignores
/// surrounding whitespace.
///
/// # Errors
///
/// Returns [`EMPTY_TOPIC_MESSAGE`] for blank input.
pub fn validate_topic(input: &str) -> Result<String, &'static str> {
    if input.trim().is_empty() {
        return Err(EMPTY_TOPIC_MESSAGE);
    }
    Ok(input.to_owned())
}

impl TopicFormState {
    /// Validate the current topic and, when valid, enter the loading state.
    /// Returns the topic to submit, or `None` if nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        match validate_topic(&self.topic) {
            Ok(topic) => {
                self.error.clear();
                self.loading = true;
                Some(topic)
            }
            Err(msg) => {
                self.error = msg.to_owned();
                None
            }
        }
    }

    /// Leave the loading state, adopting the error of a failed submit.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.loading = false;
        if let Err(msg) = outcome {
            self.error = if msg.trim().is_empty() { SUBMIT_FAILED_MESSAGE.to_owned() } else { msg };
        }
    }
}
