//! Export of the rendered template as an image

use crate::{dom_to_image, download};
use designer_ui::ExportStatus;
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error("Failed to rasterize template: {0}")]
    Capture(String),
    #[error("Failed to save image: {0}")]
    Save(String),
}

/// Where an export reads the template from and writes the image to
#[allow(async_fn_in_trait)]
pub trait Capture {
    type Node;
    type Image;

    /// The node with the given DOM id, if mounted
    fn locate(&self, anchor_id: &str) -> Option<Self::Node>;

    async fn rasterize(&self, node: &Self::Node) -> Result<Self::Image, ExportError>;

    fn save(&self, image: &Self::Image, file_name: &str) -> Result<(), ExportError>;
}

/// Claim the export slot before starting a capture.
///
/// Returns false while another export is in flight. Must run in the click
/// handler itself, before the capture task is spawned.
pub fn try_begin(status: &mut ExportStatus) -> bool {
    if status.is_in_flight() {
        return false;
    }
    *status = ExportStatus::InFlight;
    true
}

/// Capture the anchor node and save it as `file_name`, after [`try_begin`].
///
/// Reports exactly one final status: `Done`, `Failed`, or `Idle` when the
/// anchor is not mounted (a silent skip).
pub async fn run_export<C: Capture>(
    capture: &C,
    anchor_id: &str,
    file_name: &str,
    mut on_status: impl FnMut(ExportStatus),
) {
    let Some(node) = capture.locate(anchor_id) else {
        debug!(anchor_id, "Nothing to export, anchor not mounted");
        on_status(ExportStatus::Idle);
        return;
    };

    let result = match capture.rasterize(&node).await {
        Ok(image) => capture.save(&image, file_name),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            info!(file_name, "Exported template image");
            on_status(ExportStatus::Done);
        }
        Err(e) => {
            error!("{e}");
            on_status(ExportStatus::Failed(e.to_string()));
        }
    }
}

/// Capture from the live document through dom-to-image
pub struct BrowserCapture;

impl Capture for BrowserCapture {
    type Node = web_sys::Element;
    type Image = web_sys::Blob;

    fn locate(&self, anchor_id: &str) -> Option<web_sys::Element> {
        web_sys::window()?
            .document()?
            .get_element_by_id(anchor_id)
    }

    async fn rasterize(&self, node: &web_sys::Element) -> Result<web_sys::Blob, ExportError> {
        dom_to_image::to_blob(node)
            .await
            .map_err(|e| ExportError::Capture(format!("{e:?}")))
    }

    fn save(&self, image: &web_sys::Blob, file_name: &str) -> Result<(), ExportError> {
        download::save_blob(image, file_name).map_err(ExportError::Save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeCapture {
        mounted: Vec<&'static str>,
        fail_rasterize: bool,
        saved: RefCell<Vec<(String, String)>>,
    }

    impl Capture for FakeCapture {
        type Node = String;
        type Image = String;

        fn locate(&self, anchor_id: &str) -> Option<String> {
            self.mounted
                .iter()
                .find(|id| **id == anchor_id)
                .map(|id| id.to_string())
        }

        async fn rasterize(&self, node: &String) -> Result<String, ExportError> {
            if self.fail_rasterize {
                return Err(ExportError::Capture("tainted canvas".to_string()));
            }
            Ok(format!("png of {node}"))
        }

        fn save(&self, image: &String, file_name: &str) -> Result<(), ExportError> {
            self.saved
                .borrow_mut()
                .push((image.clone(), file_name.to_string()));
            Ok(())
        }
    }

    const ANCHOR: &str = "asset-design-template-id";

    #[test]
    fn second_click_is_refused_while_in_flight() {
        let mut status = ExportStatus::Idle;

        assert!(try_begin(&mut status));
        assert_eq!(status, ExportStatus::InFlight);
        assert!(!try_begin(&mut status));
        assert_eq!(status, ExportStatus::InFlight);
    }

    #[test]
    fn finished_export_can_start_again() {
        let mut done = ExportStatus::Done;
        assert!(try_begin(&mut done));

        let mut failed = ExportStatus::Failed("tainted canvas".to_string());
        assert!(try_begin(&mut failed));
        assert_eq!(failed, ExportStatus::InFlight);
    }

    #[tokio::test]
    async fn missing_anchor_returns_to_idle() {
        let capture = FakeCapture::default();
        let mut status = ExportStatus::Idle;
        assert!(try_begin(&mut status));

        run_export(&capture, ANCHOR, "design.png", |s| status = s).await;

        assert_eq!(status, ExportStatus::Idle);
        assert!(capture.saved.borrow().is_empty());
    }

    #[tokio::test]
    async fn export_saves_rasterized_anchor() {
        let capture = FakeCapture {
            mounted: vec![ANCHOR],
            ..Default::default()
        };
        let mut statuses = Vec::new();

        run_export(&capture, ANCHOR, "design.png", |s| statuses.push(s)).await;

        assert_eq!(statuses, vec![ExportStatus::Done]);
        assert_eq!(
            *capture.saved.borrow(),
            vec![(format!("png of {ANCHOR}"), "design.png".to_string())]
        );
    }

    #[tokio::test]
    async fn rasterize_failure_is_reported() {
        let capture = FakeCapture {
            mounted: vec![ANCHOR],
            fail_rasterize: true,
            ..Default::default()
        };
        let mut statuses = Vec::new();

        run_export(&capture, ANCHOR, "design.png", |s| statuses.push(s)).await;

        assert_eq!(
            statuses,
            vec![ExportStatus::Failed(
                "Failed to rasterize template: tainted canvas".to_string()
            )]
        );
        assert!(capture.saved.borrow().is_empty());
    }
}
