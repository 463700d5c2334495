//! Localization port — pure, synchronous message formatting.

use crate::messages::MessageDescriptor;

/// Maps a message descriptor to display text.
pub trait Localizer {
    fn format(&self, message: &MessageDescriptor) -> String;
}

impl<T: Localizer + ?Sized> Localizer for std::sync::Arc<T> {
    fn format(&self, message: &MessageDescriptor) -> String {
        (**self).format(message)
    }
}

/// Localizer that always returns the default text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl Localizer for DefaultMessages {
    fn format(&self, message: &MessageDescriptor) -> String {
        message.default_message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;

    #[test]
    fn should_return_default_text() {
        assert_eq!(
            DefaultMessages.format(&messages::RUN_STARTS),
            "When a run starts"
        );
    }
}
