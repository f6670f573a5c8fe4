use crate::clients::groq::types::Message;

/// Medical context for the chatbot, sent as the first turn of every
/// conversation.
pub const MEDICAL_CONTEXT: &str = r#"
You are a helpful medical assistant. You can:
1. Provide general health information
2. Suggest common remedies for minor issues
3. Offer wellness tips
4. Explain medical terms in simple language

IMPORTANT DISCLAIMERS:
- This is for informational purposes only
- Always consult a real doctor for medical advice
- In emergencies, call emergency services immediately
- Do not use for serious symptoms or conditions
"#;

/// One system turn plus the user's message; no history is carried between
/// requests.
pub fn build_conversation(user_message: &str) -> Vec<Message> {
    vec![
        Message::system(MEDICAL_CONTEXT),
        Message::user(user_message),
    ]
}
