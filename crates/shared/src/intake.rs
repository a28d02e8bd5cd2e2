//! Image replacement pipeline for a plant card.
//!
//! A selection moves through
//! `Idle -> FileChosen -> Validating -> Reading -> Success | ReadError`, or stops at
//! `ValidationRejected` when the file is not an image. Every run starts from `Idle`,
//! so nothing carries over between selections.

use std::fmt;
use std::future::Future;

use crate::data_url::{encode_data_url, is_image_mime};
use crate::error::ImageIntakeError;
use crate::i18n::Translate;
use crate::notify::{Notifier, Toast};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeState {
    #[default]
    Idle,
    FileChosen,
    Validating,
    Reading,
    Success,
    ReadError,
    ValidationRejected,
}

impl IntakeState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::ReadError | Self::ValidationRejected)
    }

    pub fn can_advance_to(self, next: IntakeState) -> bool {
        use IntakeState::*;
        matches!(
            (self, next),
            (Idle, FileChosen)
                | (FileChosen, Validating)
                | (Validating, Reading)
                | (Validating, ValidationRejected)
                | (Reading, Success)
                | (Reading, ReadError)
        )
    }
}

/// A file chosen from the picker, with a deferred read of its contents.
///
/// The reader is only invoked once the declared MIME type has been accepted.
pub struct PickedFile<R> {
    name: String,
    mime: Option<String>,
    reader: R,
}

impl<R, Fut, E> PickedFile<R>
where
    R: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<u8>, E>>,
    E: fmt::Display,
{
    pub fn new(name: impl Into<String>, mime: Option<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            mime,
            reader,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    pub fn validate(&self) -> Result<(), ImageIntakeError> {
        if is_image_mime(self.mime()) {
            Ok(())
        } else {
            Err(ImageIntakeError::InvalidFileType {
                mime: self.mime.clone(),
            })
        }
    }

    /// Read the whole file and encode it as a `data:` URL.
    pub async fn read_data_url(self) -> Result<String, ImageIntakeError> {
        let bytes = (self.reader)()
            .await
            .map_err(|e| ImageIntakeError::FileRead {
                reason: e.to_string(),
            })?;
        Ok(encode_data_url(self.mime.as_deref().unwrap_or_default(), &bytes))
    }
}

/// Drives one selection through the intake states.
#[derive(Debug, Default)]
pub struct IntakeMachine {
    state: IntakeState,
    history: Vec<IntakeState>,
    last_error: Option<ImageIntakeError>,
}

impl IntakeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> IntakeState {
        self.state
    }

    /// States entered during the last run, excluding the initial `Idle`.
    pub fn history(&self) -> &[IntakeState] {
        &self.history
    }

    pub fn last_error(&self) -> Option<&ImageIntakeError> {
        self.last_error.as_ref()
    }

    fn reset(&mut self) {
        self.state = IntakeState::Idle;
        self.history.clear();
        self.last_error = None;
    }

    fn advance(&mut self, next: IntakeState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal intake transition {:?} -> {:?}",
            self.state,
            next
        );
        self.state = next;
        self.history.push(next);
    }

    fn fail<N, T>(&mut self, err: ImageIntakeError, next: IntakeState, notifier: &N, tr: &T)
    where
        N: Notifier + ?Sized,
        T: Translate + ?Sized,
    {
        notifier.notify(Toast::from_intake_error(&err, tr));
        self.last_error = Some(err);
        self.advance(next);
    }

    /// Run one selection to completion.
    ///
    /// `None` means the picker was dismissed and leaves the machine in `Idle`.
    /// On success `on_image_change` is called exactly once with the plant id and
    /// the data URL; on failure exactly one destructive toast is raised instead.
    pub async fn run<R, Fut, E, N, T, F>(
        &mut self,
        id: &str,
        selection: Option<PickedFile<R>>,
        notifier: &N,
        tr: &T,
        on_image_change: F,
    ) -> IntakeState
    where
        R: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<u8>, E>>,
        E: fmt::Display,
        N: Notifier + ?Sized,
        T: Translate + ?Sized,
        F: FnOnce(&str, String),
    {
        self.reset();
        let Some(file) = selection else {
            return self.state;
        };

        self.advance(IntakeState::FileChosen);
        self.advance(IntakeState::Validating);
        if let Err(err) = file.validate() {
            self.fail(err, IntakeState::ValidationRejected, notifier, tr);
            return self.state;
        }

        self.advance(IntakeState::Reading);
        match file.read_data_url().await {
            Ok(data_url) => {
                on_image_change(id, data_url);
                self.advance(IntakeState::Success);
            }
            Err(err) => self.fail(err, IntakeState::ReadError, notifier, tr),
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::future::{ready, Ready};

    use super::*;
    use crate::i18n::{keys, Language};
    use crate::notify::ToastVariant;

    #[derive(Default)]
    struct RecordingNotifier {
        toasts: RefCell<Vec<Toast>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }
    }

    /// Echoes keys back so assertions can name them directly.
    struct KeyEcho;

    impl Translate for KeyEcho {
        fn t(&self, key: &str) -> String {
            key.to_string()
        }
    }

    type Reader = Box<dyn FnOnce() -> Ready<Result<Vec<u8>, String>>>;

    fn file(name: &str, mime: Option<&str>, contents: Result<&[u8], &str>) -> PickedFile<Reader> {
        let contents = contents.map(<[u8]>::to_vec).map_err(str::to_string);
        PickedFile::new(name, mime.map(str::to_string), Box::new(move || ready(contents)) as Reader)
    }

    async fn select(
        id: &str,
        selection: Option<PickedFile<Reader>>,
        notifier: &RecordingNotifier,
    ) -> (IntakeMachine, Vec<(String, String)>) {
        let mut machine = IntakeMachine::new();
        let mut calls = Vec::new();
        machine
            .run(id, selection, notifier, &KeyEcho, |id, url| {
                calls.push((id.to_string(), url))
            })
            .await;
        (machine, calls)
    }

    #[tokio::test]
    async fn valid_png_invokes_callback_once() {
        let notifier = RecordingNotifier::default();
        let selection = file("photo.png", Some("image/png"), Ok(&[0x89, b'P', b'N', b'G'][..]));

        let (machine, calls) = select("plant-1", Some(selection), &notifier).await;

        assert_eq!(machine.state(), IntakeState::Success);
        assert_eq!(
            calls,
            vec![("plant-1".to_string(), "data:image/png;base64,iVBORw==".to_string())]
        );
        assert!(notifier.toasts.borrow().is_empty());
        assert_eq!(
            machine.history(),
            &[
                IntakeState::FileChosen,
                IntakeState::Validating,
                IntakeState::Reading,
                IntakeState::Success
            ]
        );
    }

    #[tokio::test]
    async fn text_file_is_rejected_without_reading() {
        let notifier = RecordingNotifier::default();
        let read_attempted = std::rc::Rc::new(std::cell::Cell::new(false));
        let flag = read_attempted.clone();
        let selection: PickedFile<Reader> = PickedFile::new(
            "notes.txt",
            Some("text/plain".to_string()),
            Box::new(move || {
                flag.set(true);
                ready(Ok(b"hello".to_vec()))
            }) as Reader,
        );

        let (machine, calls) = select("plant-1", Some(selection), &notifier).await;

        assert_eq!(machine.state(), IntakeState::ValidationRejected);
        assert!(calls.is_empty());
        assert!(!read_attempted.get());
        let toasts = notifier.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, keys::INVALID_FILE_TYPE_TITLE);
        assert_eq!(toasts[0].variant, ToastVariant::Destructive);
        assert!(matches!(
            machine.last_error(),
            Some(ImageIntakeError::InvalidFileType { mime: Some(m) }) if m == "text/plain"
        ));
    }

    #[tokio::test]
    async fn non_image_types_never_reach_the_callback() {
        for mime in [Some("application/pdf"), Some("video/mp4"), Some(""), None] {
            let notifier = RecordingNotifier::default();
            let (machine, calls) =
                select("plant-1", Some(file("x", mime, Ok(&b"data"[..]))), &notifier).await;
            assert_eq!(machine.state(), IntakeState::ValidationRejected, "{mime:?}");
            assert!(calls.is_empty());
            assert_eq!(notifier.toasts.borrow().len(), 1);
        }
    }

    #[tokio::test]
    async fn read_failure_notifies_once_and_skips_callback() {
        let notifier = RecordingNotifier::default();
        let selection = file("photo.jpg", Some("image/jpeg"), Err("permission denied"));

        let (machine, calls) = select("plant-1", Some(selection), &notifier).await;

        assert_eq!(machine.state(), IntakeState::ReadError);
        assert!(calls.is_empty());
        let toasts = notifier.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, keys::ERROR_READING_FILE_TITLE);
        assert_eq!(
            toasts[0].description.as_deref(),
            Some(keys::ERROR_READING_FILE_DESCRIPTION)
        );
        assert_eq!(
            machine.last_error(),
            Some(&ImageIntakeError::FileRead {
                reason: "permission denied".to_string()
            })
        );
    }

    #[tokio::test]
    async fn dismissed_picker_has_no_side_effects() {
        let notifier = RecordingNotifier::default();
        let (machine, calls) = select("plant-1", None, &notifier).await;

        assert_eq!(machine.state(), IntakeState::Idle);
        assert!(machine.history().is_empty());
        assert!(calls.is_empty());
        assert!(notifier.toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn repeated_selections_are_independent() {
        let notifier = RecordingNotifier::default();
        let mut machine = IntakeMachine::new();
        let mut calls = Vec::new();

        for _ in 0..3 {
            let selection = file("photo.png", Some("image/png"), Ok(&b"png"[..]));
            let state = machine
                .run("plant-1", Some(selection), &notifier, &KeyEcho, |id, url| {
                    calls.push((id.to_string(), url))
                })
                .await;
            assert_eq!(state, IntakeState::Success);
            assert_eq!(machine.history().len(), 4);
        }

        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|c| c == &calls[0]));
        assert!(notifier.toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn failure_does_not_leak_into_next_run() {
        let notifier = RecordingNotifier::default();
        let mut machine = IntakeMachine::new();

        machine
            .run("plant-1", Some(file("a", Some("image/png"), Err("boom"))), &notifier, &Language::En, |_, _| {})
            .await;
        assert!(machine.last_error().is_some());

        let state = machine
            .run("plant-1", Some(file("b", Some("image/png"), Ok(&b"ok"[..]))), &notifier, &Language::En, |_, _| {})
            .await;
        assert_eq!(state, IntakeState::Success);
        assert!(machine.last_error().is_none());
        assert_eq!(notifier.toasts.borrow().len(), 1);
        assert_eq!(notifier.toasts.borrow()[0].title, "Error Reading File");
    }

    #[test]
    fn only_forward_transitions_are_legal() {
        use IntakeState::*;
        assert!(Idle.can_advance_to(FileChosen));
        assert!(Validating.can_advance_to(ValidationRejected));
        assert!(!Idle.can_advance_to(Reading));
        assert!(!Success.can_advance_to(Idle));
        assert!(!Reading.can_advance_to(ValidationRejected));
        assert!([Success, ReadError, ValidationRejected].iter().all(|s| s.is_terminal()));
        assert!(!Reading.is_terminal());
    }
}
