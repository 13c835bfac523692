//! Inbound message classification and fixed command replies.
//!
//! Every message is decided once into a closed set of variants; handlers never
//! re-inspect the raw text. Matching is case-sensitive on the first
//! whitespace-delimited token, so `/start anything` is still `/start` while
//! `/Start` is not.

/// What an inbound text message turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// `/start`: clear history and greet.
    Start,
    /// `/help`: list commands, history untouched.
    Help,
    /// `/clear`: clear history and acknowledge.
    Clear,
    /// Any other `/`-prefixed text. Dropped without a reply.
    Unknown,
    /// Plain chat text, routed to the orchestrator.
    Chat(String),
}

impl Inbound {
    pub fn parse(text: &str) -> Self {
        let token = text.split_whitespace().next().unwrap_or("");
        match token {
            "/start" => Inbound::Start,
            "/help" => Inbound::Help,
            "/clear" => Inbound::Clear,
            _ if token.starts_with('/') => Inbound::Unknown,
            _ => Inbound::Chat(text.to_string()),
        }
    }
}

pub const WELCOME_TEXT: &str = "Hey! 👋\n\n\
    I'm Joey, an AI assistant created by Izhan. \
    I can help you with anything - just ask away! 😊";

pub const HELP_TEXT: &str = "Available commands:\n\
    /start - Start fresh\n\
    /clear - Clear chat history\n\
    /help - Show commands\n\n\
    Feel free to ask me anything! 😊";

pub const CLEAR_TEXT: &str = "Chat history cleared! What's on your mind? 😊";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognised_commands() {
        assert_eq!(Inbound::parse("/start"), Inbound::Start);
        assert_eq!(Inbound::parse("/help"), Inbound::Help);
        assert_eq!(Inbound::parse("/clear"), Inbound::Clear);
    }

    #[test]
    fn command_with_trailing_text_still_matches() {
        assert_eq!(Inbound::parse("/start please"), Inbound::Start);
        assert_eq!(Inbound::parse("/clear  now"), Inbound::Clear);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Inbound::parse("/Start"), Inbound::Unknown);
        assert_eq!(Inbound::parse("/HELP"), Inbound::Unknown);
    }

    #[test]
    fn unknown_slash_commands() {
        assert_eq!(Inbound::parse("/foobar"), Inbound::Unknown);
        assert_eq!(Inbound::parse("/start2"), Inbound::Unknown);
    }

    #[test]
    fn plain_text_is_chat() {
        assert_eq!(
            Inbound::parse("what is rust?"),
            Inbound::Chat("what is rust?".to_string())
        );
        // a slash later in the message does not make it a command
        assert_eq!(
            Inbound::parse("tell me about /etc"),
            Inbound::Chat("tell me about /etc".to_string())
        );
    }

    #[test]
    fn whitespace_only_is_chat() {
        assert_eq!(Inbound::parse("   "), Inbound::Chat("   ".to_string()));
    }
}
