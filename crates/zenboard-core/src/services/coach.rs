//! Coach session - a conversation with the ZenBoard Coach persona.
//!
//! Remote failures never reach the caller as errors: the session appends a
//! reassuring fallback reply instead, so the conversation always advances.

use std::sync::Arc;

use tracing::{debug, warn};

use super::CoachError;
use crate::domain::chat::{ChatMessage, MessageRole};
use crate::ports::TextGenerator;

/// Persona and formatting rules for the coach.
pub const COACH_SYSTEM_PROMPT: &str = "You are ZenBoard Coach, an empathetic and supportive mentor for Grade 10 students facing board exams.
Your goal is to help them manage exam anxiety, reduce mistakes caused by panic, and build emotional resilience.

CRITICAL FORMATTING RULES:
1. Use Markdown for structure. Use '###' for section headers and '**' for emphasis.
2. Use bullet points or numbered lists for steps and strategies to make them easy to read.
3. Use short paragraphs. Avoid walls of text.
4. Focus on:
   - Cognitive Reframing: Turning \"What if I fail\" into \"I can handle one question at a time\".
   - Practical Advice: Strategies for time management, \"stuck\" moments, and pre-exam jitters.
   - Emotional Validation: Acknowledge their fear as normal but manageable.

Keep your responses encouraging, structured, and geared towards a 15-year-old student.";

/// First message of every session.
pub const COACH_GREETING: &str = "Hey there! I'm ZenBoard Coach. Board exams can feel like a lot, but I'm here to help you stay calm and focused.\n\nWhat's on your mind? Fear of a certain subject? Running out of time?";

/// Reply used when the service answers with nothing.
pub const EMPTY_REPLY_FALLBACK: &str = "I'm listening. Tell me more.";

/// Reply used when the service cannot be reached.
pub const CONNECTION_FALLBACK: &str = "I'm having a little trouble connecting, but remember: exams are just a measure of one day's performance. Take a deep breath and keep going!";

/// One conversation with the coach.
pub struct CoachSession {
    generator: Arc<dyn TextGenerator>,
    messages: Vec<ChatMessage>,
}

impl CoachSession {
    /// Start a session; the transcript opens with the coach greeting.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            messages: vec![ChatMessage::model(COACH_GREETING)],
        }
    }

    /// Full transcript, greeting included.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send a student message and append the coach's reply.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::EmptyInput`] for blank input. Remote failures are
    /// absorbed into a fallback reply.
    pub async fn send(&mut self, input: &str) -> Result<&ChatMessage, CoachError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CoachError::EmptyInput);
        }

        self.messages.push(ChatMessage::user(input));

        // The greeting is local copy, not part of the remote conversation.
        let history = &self.messages[1..];
        debug!(turns = history.len(), "Sending coach conversation");

        let reply = match self.generator.chat(COACH_SYSTEM_PROMPT, history).await {
            Ok(text) if text.trim().is_empty() => EMPTY_REPLY_FALLBACK.to_string(),
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Coach reply failed, using fallback");
                CONNECTION_FALLBACK.to_string()
            }
        };

        self.messages.push(ChatMessage::model(reply));
        Ok(self.last_reply())
    }

    fn last_reply(&self) -> &ChatMessage {
        // `send` always pushes before calling this.
        let last = self.messages.len() - 1;
        &self.messages[last]
    }

    /// Number of student turns so far.
    pub fn turns(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RemoteServiceError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replies with a canned result and records what it was sent.
    struct ScriptedGenerator {
        reply: Result<String, RemoteServiceError>,
        seen: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl ScriptedGenerator {
        fn new(reply: Result<String, RemoteServiceError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn chat(
            &self,
            system_prompt: &str,
            history: &[ChatMessage],
        ) -> Result<String, RemoteServiceError> {
            assert_eq!(system_prompt, COACH_SYSTEM_PROMPT);
            self.seen.lock().unwrap().push(history.to_vec());
            self.reply.clone()
        }

        async fn generate(&self, _: &str, _: f32) -> Result<String, RemoteServiceError> {
            unreachable!("coach only chats")
        }
    }

    #[test]
    fn session_opens_with_greeting() {
        let session = CoachSession::new(ScriptedGenerator::new(Ok(String::new())));
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, MessageRole::Model);
        assert_eq!(session.messages()[0].text, COACH_GREETING);
        assert_eq!(session.turns(), 0);
    }

    #[tokio::test]
    async fn blank_input_is_rejected() {
        let generator = ScriptedGenerator::new(Ok("hi".into()));
        let mut session = CoachSession::new(generator.clone());

        assert!(matches!(session.send("   ").await, Err(CoachError::EmptyInput)));
        assert_eq!(session.messages().len(), 1);
        assert!(generator.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn history_excludes_greeting() {
        let generator = ScriptedGenerator::new(Ok("Breathe first.".into()));
        let mut session = CoachSession::new(generator.clone());

        let reply = session.send("I'm scared of maths").await.unwrap();
        assert_eq!(reply.text, "Breathe first.");

        session.send("Still scared").await.unwrap();

        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen[0].len(), 1);
        assert_eq!(seen[0][0].text, "I'm scared of maths");
        assert_eq!(seen[1].len(), 3);
        assert_eq!(seen[1][1].role, MessageRole::Model);
        assert_eq!(session.turns(), 2);
    }

    #[tokio::test]
    async fn empty_reply_uses_listening_fallback() {
        let mut session = CoachSession::new(ScriptedGenerator::new(Ok("  ".into())));
        let reply = session.send("hello").await.unwrap();
        assert_eq!(reply.text, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn failure_uses_connection_fallback() {
        let mut session =
            CoachSession::new(ScriptedGenerator::new(Err(RemoteServiceError::Timeout)));
        let reply = session.send("hello").await.unwrap();
        assert_eq!(reply.role, MessageRole::Model);
        assert_eq!(reply.text, CONNECTION_FALLBACK);
        assert_eq!(session.messages().len(), 3);
    }
}
