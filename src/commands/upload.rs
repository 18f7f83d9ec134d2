use std::path::PathBuf;

use anyhow::Result;
use pk_core::ports::{NotifierPort, UploadViewPatch};
use pk_core::upload::{CandidateFile, DragPhase, PreviewState, SelectionSource, UploadEvent};
use pk_core::{Notice, PageConfig};
use pk_infra::{candidate_from_path, ToastEvent, UploadViewSnapshot};
use tokio::sync::mpsc;
use tracing::{info_span, warn, Instrument};

use crate::bootstrap::{wire_upload, UploadWiring};

pub async fn run(config: &PageConfig, paths: Vec<PathBuf>, drop: bool, clear: bool) -> Result<()> {
    let mut wiring = wire_upload(config);

    for path in paths {
        let span = info_span!("command.upload", path = %path.display(), drop);
        let file = match candidate_from_path(&path).instrument(span.clone()).await {
            Ok(file) => file,
            Err(err) => {
                warn!(parent: &span, error = %err, "skipping file");
                eprintln!("skipping {}: {err:#}", path.display());
                continue;
            }
        };

        deliver(&wiring, config, file, drop).instrument(span).await?;

        let phase = wiring.controller.state().await.phase();
        print_toasts(&mut wiring.toasts);
        print_view(&path.display().to_string(), phase, &wiring.view.snapshot());
    }

    if clear {
        let outcome = wiring.controller.clear().await?;
        print_view("clear", outcome.state, &wiring.view.snapshot());
    }
    Ok(())
}

/// Hands one file to the widget and waits for its preview. Returns the file
/// name when this delivery put a new preview on screen; a success notice is
/// shown in that case only.
async fn deliver(
    wiring: &UploadWiring,
    config: &PageConfig,
    file: CandidateFile,
    drop: bool,
) -> Result<Option<String>> {
    let controller = &wiring.controller;
    let previews_before = preview_count(wiring);

    if drop {
        controller.dispatch(UploadEvent::Drag(DragPhase::Enter)).await?;
        controller.dispatch(UploadEvent::Dropped { files: vec![file] }).await?;
    } else {
        controller
            .dispatch(UploadEvent::FilesSelected {
                files: vec![file],
                source: SelectionSource::Picker,
            })
            .await?;
    }
    controller.wait_for_reads().await;

    if preview_count(wiring) == previews_before {
        return Ok(None);
    }
    let state = controller.state().await;
    let Some(preview) = state.preview() else {
        return Ok(None);
    };

    let message = config.messages.preview_ready_for(&preview.file_name);
    let notice = Notice::success(message).with_ttl(config.notices.success_ttl());
    wiring.notifier.notify(notice).await?;
    Ok(Some(preview.file_name.clone()))
}

fn preview_count(wiring: &UploadWiring) -> usize {
    wiring
        .view
        .patches()
        .iter()
        .filter(|patch| matches!(patch, UploadViewPatch::Preview { .. }))
        .count()
}

fn print_toasts(toasts: &mut mpsc::UnboundedReceiver<ToastEvent>) {
    while let Ok(event) = toasts.try_recv() {
        if let ToastEvent::Shown(notice) = event {
            eprintln!("[{:?}] {}", notice.level, notice.message);
        }
    }
}

fn print_view(label: &str, phase: PreviewState, view: &UploadViewSnapshot) {
    println!("{label}: {phase:?}");
    println!("  status: {}", view.status_text);
    println!("  button: {}", view.button_label);
    if view.preview_visible {
        println!("  file:   {} ({})", view.file_name, view.size_label);
        println!("  image:  {} chars of data URL", view.image_src.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pk_core::NoticeLevel;
    use tempfile::tempdir;

    fn shown(toasts: &mut mpsc::UnboundedReceiver<ToastEvent>) -> Vec<(NoticeLevel, String)> {
        let mut notices = Vec::new();
        while let Ok(event) = toasts.try_recv() {
            if let ToastEvent::Shown(notice) = event {
                notices.push((notice.level, notice.message));
            }
        }
        notices
    }

    #[tokio::test]
    async fn test_rejected_file_after_preview_is_not_announced() {
        let dir = tempdir().unwrap();
        let keep = dir.path().join("keep.png");
        let notes = dir.path().join("notes.txt");
        std::fs::write(&keep, [0u8; 16]).unwrap();
        std::fs::write(&notes, b"hello").unwrap();

        let config = PageConfig::default();
        let mut wiring = wire_upload(&config);

        let file = candidate_from_path(&keep).await.unwrap();
        let announced = deliver(&wiring, &config, file, false).await.unwrap();
        assert_eq!(announced.as_deref(), Some("keep.png"));
        assert_eq!(
            shown(&mut wiring.toasts),
            vec![(NoticeLevel::Success, "keep.png is ready.".to_string())]
        );

        let file = candidate_from_path(&notes).await.unwrap();
        let announced = deliver(&wiring, &config, file, false).await.unwrap();
        assert_eq!(announced, None);
        assert_eq!(
            shown(&mut wiring.toasts),
            vec![(NoticeLevel::Error, config.messages.rejected_type.clone())]
        );
        assert_eq!(wiring.controller.state().await.phase(), PreviewState::Active);
    }

    #[tokio::test]
    async fn test_same_file_twice_is_announced_twice() {
        let dir = tempdir().unwrap();
        let keep = dir.path().join("keep.png");
        std::fs::write(&keep, [0u8; 16]).unwrap();

        let config = PageConfig::default();
        let wiring = wire_upload(&config);

        for _ in 0..2 {
            let file = candidate_from_path(&keep).await.unwrap();
            let announced = deliver(&wiring, &config, file, true).await.unwrap();
            assert_eq!(announced.as_deref(), Some("keep.png"));
        }
    }
}
