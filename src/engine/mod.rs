//! Request dispatch.
//!
//! The dispatcher sits between the CLI and the backends: it validates the
//! text, builds the request from the selectors, and performs the single
//! blocking synthesis call.

mod dispatch;

pub use dispatch::{DispatchError, SpeechDispatcher};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, MockBackend};
    use crate::voice::{Language, Speaker};

    // ===========================================
    // SpeechDispatcher tests
    // ===========================================

    #[test]
    fn test_dispatch_returns_backend_bytes_unmodified() {
        let mut mock = MockBackend::new();
        let wav = b"RIFF\x24\x00\x00\x00WAVEfmt data".to_vec();
        let expected = wav.clone();

        mock.expect_synthesize().times(1).returning(move |_| Ok(wav.clone()));

        let dispatcher = SpeechDispatcher::new(mock);
        let result = dispatcher
            .synthesize("Moien", Speaker::Judith, Language::Luxembourgish)
            .unwrap();

        assert_eq!(result, expected);
    }

    #[test]
    fn test_empty_text_never_reaches_backend() {
        // No expectation set: any backend call would panic the mock.
        let mock = MockBackend::new();
        let dispatcher = SpeechDispatcher::new(mock);

        let result = dispatcher.synthesize("", Speaker::Judith, Language::Luxembourgish);
        assert!(matches!(result.unwrap_err(), DispatchError::EmptyText));
    }

    #[test]
    fn test_whitespace_only_text_is_rejected() {
        let mock = MockBackend::new();
        let dispatcher = SpeechDispatcher::new(mock);

        let result = dispatcher.synthesize("   \n\t", Speaker::Guy, Language::English);
        assert!(matches!(result.unwrap_err(), DispatchError::EmptyText));
    }

    #[test]
    fn test_empty_text_message_asks_for_text() {
        let err = DispatchError::EmptyText;
        assert_eq!(err.to_string(), "Please enter some text to convert to speech");
    }

    #[test]
    fn test_dispatch_trims_text_before_sending() {
        let mut mock = MockBackend::new();

        mock.expect_synthesize()
            .withf(|req| req.text == "Bonjour, comment ça va?")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let dispatcher = SpeechDispatcher::new(mock);
        let result =
            dispatcher.synthesize("  Bonjour, comment ça va?  ", Speaker::Kerstin, Language::French);

        assert!(result.is_ok());
    }

    #[test]
    fn test_dispatch_propagates_backend_errors() {
        let mut mock = MockBackend::new();

        mock.expect_synthesize()
            .times(1)
            .returning(|_| Err(BackendError::InvalidToken));

        let dispatcher = SpeechDispatcher::new(mock);
        let result = dispatcher.synthesize("Hello", Speaker::Guy, Language::English);

        match result.unwrap_err() {
            DispatchError::Backend(BackendError::InvalidToken) => {}
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_accepts_every_speaker() {
        for speaker in Speaker::ALL {
            let mut mock = MockBackend::new();
            mock.expect_synthesize()
                .withf(move |req| req.speaker == speaker)
                .times(1)
                .returning(|_| Ok(Vec::new()));

            let dispatcher = SpeechDispatcher::new(mock);
            assert!(
                dispatcher
                    .synthesize("test", speaker, Language::Luxembourgish)
                    .is_ok()
            );
        }
    }
}
