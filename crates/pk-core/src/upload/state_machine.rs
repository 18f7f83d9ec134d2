//! Upload widget state machine.
//!
//! Pure transition function `(state, event) -> (state, actions)`; all side
//! effects are described by [`UploadAction`] and executed by the caller.

use tracing::debug;

use super::action::UploadAction;
use super::error::UploadError;
use super::event::{DragPhase, UploadEvent};
use super::file::CandidateFile;
use super::policy::UploadPolicy;
use super::size::format_file_size;
use super::state::{FilePreview, PreviewState, UploadState};

/// Pure upload state machine.
///
/// 纯状态机：不包含副作用。
pub struct UploadStateMachine;

impl UploadStateMachine {
    pub fn transition(state: UploadState, event: UploadEvent) -> (UploadState, Vec<UploadAction>) {
        match event {
            UploadEvent::Drag(phase) => {
                let highlighted = matches!(phase, DragPhase::Enter | DragPhase::Over);
                let mut actions = vec![UploadAction::SuppressDefault];
                if state.highlighted != highlighted {
                    actions.push(UploadAction::SetHighlight(highlighted));
                }
                (
                    UploadState {
                        highlighted,
                        ..state
                    },
                    actions,
                )
            }
            UploadEvent::Dropped { files } => {
                let mut actions = vec![UploadAction::SuppressDefault];
                if state.highlighted {
                    actions.push(UploadAction::SetHighlight(false));
                }
                let state = UploadState {
                    highlighted: false,
                    ..state
                };
                let (next, selection_actions) = Self::select(state, files);
                actions.extend(selection_actions);
                (next, actions)
            }
            UploadEvent::FilesSelected { files, .. } => Self::select(state, files),
            UploadEvent::ReadSucceeded { token, data_url } => {
                if state.pending != Some(token) {
                    debug!(%token, pending = ?state.pending, "discarding stale read completion");
                    return (state, Vec::new());
                }
                let preview = match state.selected.as_ref() {
                    Some(file) => FilePreview {
                        image_src: data_url,
                        file_name: file.name.clone(),
                        size_label: format_file_size(file.size_bytes),
                    },
                    None => return (state, Vec::new()),
                };
                (
                    UploadState {
                        phase: PreviewState::Active,
                        preview: Some(preview.clone()),
                        pending: None,
                        last_error: None,
                        ..state
                    },
                    vec![UploadAction::ShowPreview(preview)],
                )
            }
            UploadEvent::ReadFailed { token, reason } => {
                if state.pending != Some(token) {
                    debug!(%token, pending = ?state.pending, "discarding stale read failure");
                    return (state, Vec::new());
                }

                let error = UploadError::ReadFailure { reason };
                (
                    UploadState {
                        phase: PreviewState::Errored,
                        selected: None,
                        preview: None,
                        pending: None,
                        last_error: Some(error.clone()),
                        ..state
                    },
                    vec![UploadAction::ResetPreview, UploadAction::ReportError(error)],
                )
            }
            UploadEvent::Clear => (
                UploadState {
                    phase: PreviewState::Empty,
                    selected: None,
                    preview: None,
                    pending: None,
                    last_error: None,
                    ..state
                },
                vec![UploadAction::ResetPreview],
            ),
        }
    }

    /// Selection path shared by the picker and drops. Rejections leave the
    /// state untouched; acceptance issues a fresh read token.
    fn select(state: UploadState, files: Vec<CandidateFile>) -> (UploadState, Vec<UploadAction>) {
        let Some(file) = files.into_iter().next() else {
            return (state, Vec::new());
        };

        if let Err(error) = UploadPolicy::check(&file) {
            debug!(name = %file.name, %error, "upload candidate rejected");
            return (state, vec![UploadAction::ReportError(error)]);
        }

        let token = state.last_issued.next();
        (
            UploadState {
                phase: PreviewState::Loading,
                selected: Some(file.descriptor()),
                pending: Some(token),
                last_issued: token,
                last_error: None,
                ..state
            },
            vec![UploadAction::StartRead { token, file }],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::{DataUrl, MimeType, ReadToken, SelectionSource};

    fn png(name: &str, size: usize) -> CandidateFile {
        CandidateFile::in_memory(name, MimeType::image_png(), vec![0u8; size])
    }

    fn pick(file: CandidateFile) -> UploadEvent {
        UploadEvent::FilesSelected {
            files: vec![file],
            source: SelectionSource::Picker,
        }
    }

    fn started_token(actions: &[UploadAction]) -> ReadToken {
        actions
            .iter()
            .find_map(|action| match action {
                UploadAction::StartRead { token, .. } => Some(*token),
                _ => None,
            })
            .expect("start read action")
    }

    #[test]
    fn upload_state_machine_accepted_file_enters_loading() {
        let (next, actions) = UploadStateMachine::transition(UploadState::new(), pick(png("a.png", 1024)));

        assert_eq!(next.phase(), PreviewState::Loading);
        assert_eq!(next.selected().map(|f| f.name.as_str()), Some("a.png"));
        assert_eq!(actions.len(), 1);
        assert_eq!(next.pending_read(), Some(started_token(&actions)));
    }

    #[test]
    fn upload_state_machine_rejected_type_leaves_state_unchanged() {
        let bmp = CandidateFile::in_memory("a.bmp", MimeType::from("image/bmp"), vec![0u8; 10]);
        let state = UploadState::new();
        let (next, actions) = UploadStateMachine::transition(state.clone(), pick(bmp));

        assert_eq!(next, state);
        assert_eq!(
            actions,
            vec![UploadAction::ReportError(UploadError::RejectedType {
                mime_type: MimeType::from("image/bmp")
            })]
        );
    }

    #[test]
    fn upload_state_machine_rejected_size_keeps_active_preview() {
        let (loading, actions) = UploadStateMachine::transition(UploadState::new(), pick(png("a.png", 10)));
        let token = started_token(&actions);
        let (active, _) = UploadStateMachine::transition(
            loading,
            UploadEvent::ReadSucceeded {
                token,
                data_url: DataUrl::new("data:image/png;base64,AA=="),
            },
        );

        let big = CandidateFile {
            size_bytes: 6 * 1024 * 1024,
            ..png("big.png", 0)
        };
        let (next, actions) = UploadStateMachine::transition(active.clone(), pick(big));

        assert_eq!(next, active);
        assert!(matches!(
            actions.as_slice(),
            [UploadAction::ReportError(UploadError::RejectedSize { .. })]
        ));
    }

    #[test]
    fn upload_state_machine_only_first_file_of_batch_is_used() {
        let event = UploadEvent::FilesSelected {
            files: vec![png("first.png", 1), png("second.png", 1)],
            source: SelectionSource::Picker,
        };
        let (next, actions) = UploadStateMachine::transition(UploadState::new(), event);

        assert_eq!(next.selected().map(|f| f.name.as_str()), Some("first.png"));
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn upload_state_machine_empty_batch_is_ignored() {
        let event = UploadEvent::FilesSelected {
            files: Vec::new(),
            source: SelectionSource::Picker,
        };
        let (next, actions) = UploadStateMachine::transition(UploadState::new(), event);
        assert_eq!(next, UploadState::new());
        assert!(actions.is_empty());
    }

    #[test]
    fn upload_state_machine_read_success_populates_preview() {
        let (loading, actions) = UploadStateMachine::transition(UploadState::new(), pick(png("a.png", 1536)));
        let token = started_token(&actions);
        let (next, actions) = UploadStateMachine::transition(
            loading,
            UploadEvent::ReadSucceeded {
                token,
                data_url: DataUrl::new("data:image/png;base64,AA=="),
            },
        );

        let expected = FilePreview {
            image_src: DataUrl::new("data:image/png;base64,AA=="),
            file_name: "a.png".to_string(),
            size_label: "1.5 KB".to_string(),
        };
        assert_eq!(next.phase(), PreviewState::Active);
        assert!(next.has_file());
        assert_eq!(next.preview(), Some(&expected));
        assert_eq!(next.pending_read(), None);
        assert_eq!(actions, vec![UploadAction::ShowPreview(expected)]);
    }

    #[test]
    fn upload_state_machine_read_failure_is_recoverable() {
        let (loading, actions) = UploadStateMachine::transition(UploadState::new(), pick(png("a.png", 1)));
        let token = started_token(&actions);
        let (errored, actions) = UploadStateMachine::transition(
            loading,
            UploadEvent::ReadFailed {
                token,
                reason: "disk gone".to_string(),
            },
        );

        assert_eq!(errored.phase(), PreviewState::Errored);
        assert_eq!(errored.selected(), None);
        assert!(matches!(
            actions.as_slice(),
            [UploadAction::ResetPreview, UploadAction::ReportError(UploadError::ReadFailure { .. })]
        ));

        let (next, _) = UploadStateMachine::transition(errored, pick(png("b.png", 1)));
        assert_eq!(next.phase(), PreviewState::Loading);
        assert_eq!(next.last_error(), None);
    }

    #[test]
    fn upload_state_machine_stale_completion_is_discarded() {
        let (first, actions) = UploadStateMachine::transition(UploadState::new(), pick(png("slow.png", 1)));
        let slow = started_token(&actions);
        let (second, actions) = UploadStateMachine::transition(first, pick(png("fast.png", 1)));
        let fast = started_token(&actions);
        assert!(fast > slow);

        let (active, _) = UploadStateMachine::transition(
            second,
            UploadEvent::ReadSucceeded {
                token: fast,
                data_url: DataUrl::new("data:fast"),
            },
        );
        let (after_stale, actions) = UploadStateMachine::transition(
            active.clone(),
            UploadEvent::ReadSucceeded {
                token: slow,
                data_url: DataUrl::new("data:slow"),
            },
        );

        assert_eq!(after_stale, active);
        assert!(actions.is_empty());
        assert_eq!(
            after_stale.preview().map(|p| p.file_name.as_str()),
            Some("fast.png")
        );
    }

    #[test]
    fn upload_state_machine_clear_resets_everything() {
        let (loading, actions) = UploadStateMachine::transition(UploadState::new(), pick(png("a.png", 1)));
        let token = started_token(&actions);
        let (active, _) = UploadStateMachine::transition(
            loading,
            UploadEvent::ReadSucceeded {
                token,
                data_url: DataUrl::new("data:a"),
            },
        );

        let (cleared, actions) = UploadStateMachine::transition(active, UploadEvent::Clear);
        assert_eq!(cleared.phase(), PreviewState::Empty);
        assert_eq!(cleared.preview(), None);
        assert_eq!(cleared.selected(), None);
        assert_eq!(actions, vec![UploadAction::ResetPreview]);
    }

    #[test]
    fn upload_state_machine_read_landing_after_clear_is_ignored() {
        let (loading, actions) = UploadStateMachine::transition(UploadState::new(), pick(png("a.png", 1)));
        let token = started_token(&actions);
        let (cleared, _) = UploadStateMachine::transition(loading, UploadEvent::Clear);
        let (next, actions) = UploadStateMachine::transition(
            cleared.clone(),
            UploadEvent::ReadSucceeded {
                token,
                data_url: DataUrl::new("data:a"),
            },
        );

        assert_eq!(next, cleared);
        assert!(actions.is_empty());
    }

    #[test]
    fn upload_state_machine_drag_toggles_highlight_and_suppresses_default() {
        let (over, actions) =
            UploadStateMachine::transition(UploadState::new(), UploadEvent::Drag(DragPhase::Enter));
        assert!(over.is_highlighted());
        assert_eq!(
            actions,
            vec![UploadAction::SuppressDefault, UploadAction::SetHighlight(true)]
        );

        let (still_over, actions) =
            UploadStateMachine::transition(over, UploadEvent::Drag(DragPhase::Over));
        assert!(still_over.is_highlighted());
        assert_eq!(actions, vec![UploadAction::SuppressDefault]);

        let (left, actions) =
            UploadStateMachine::transition(still_over, UploadEvent::Drag(DragPhase::Leave));
        assert!(!left.is_highlighted());
        assert_eq!(
            actions,
            vec![UploadAction::SuppressDefault, UploadAction::SetHighlight(false)]
        );
    }

    #[test]
    fn upload_state_machine_drop_selects_like_picker() {
        let (over, _) =
            UploadStateMachine::transition(UploadState::new(), UploadEvent::Drag(DragPhase::Over));
        let (next, actions) = UploadStateMachine::transition(
            over,
            UploadEvent::Dropped {
                files: vec![png("dropped.png", 1)],
            },
        );

        assert!(!next.is_highlighted());
        assert_eq!(next.phase(), PreviewState::Loading);
        assert_eq!(actions[0], UploadAction::SuppressDefault);
        assert_eq!(actions[1], UploadAction::SetHighlight(false));
        assert!(matches!(actions[2], UploadAction::StartRead { .. }));
    }
}
