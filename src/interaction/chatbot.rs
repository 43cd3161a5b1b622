//! Plain keyword classification of chatbot messages.

use tracing::{info, instrument};

use crate::{
    base::types::{ChatbotResponse, ClassifyError},
    classify::Classifier,
};

/// Classify a chatbot message with no side effects.
#[instrument(skip_all)]
pub fn handle_chatbot(classifier: &Classifier, query: &str) -> Result<ChatbotResponse, ClassifyError> {
    let response = classifier.classify(query)?;

    info!("Answered chatbot query.");

    Ok(ChatbotResponse::new(response))
}
