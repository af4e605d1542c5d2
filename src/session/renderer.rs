use crate::core::{stack_layout, CardTransform, GestureFrame, VisualIntent};
use crate::models::{DisplayName, Match, Tally};

/// Presentation collaborator driven by a [`SwipeSession`](super::SwipeSession)
///
/// Only `render` is required; the other hooks default to no-ops so a
/// renderer can ignore animation detail.
pub trait Renderer<T>: Send + 'static {
    /// Visible window, front card first, or the terminal state
    fn render(&mut self, window: &[T], exhausted: bool);

    fn render_drag(&mut self, _frame: &GestureFrame) {}

    /// Cancelled release: animate the front card back to rest
    fn render_snap_back(&mut self) {}

    fn render_fly_out(&mut self, _transform: &CardTransform) {}

    fn render_tally(&mut self, _tally: Tally) {}

    fn reveal_match(&mut self, _matched: &Match<T>) {}
}

/// Renderer that writes every call to the log
#[derive(Debug, Default)]
pub struct TracingRenderer;

impl<T: DisplayName + Send + 'static> Renderer<T> for TracingRenderer {
    fn render(&mut self, window: &[T], exhausted: bool) {
        if exhausted {
            tracing::info!("No more cards");
            return;
        }
        for (card, placement) in window.iter().zip(stack_layout(window.len())) {
            tracing::info!(
                "  [z={}] {} (scale {:.2}, y +{}px)",
                placement.z_index,
                card.display_name(),
                placement.scale,
                placement.translate_y
            );
        }
    }

    fn render_drag(&mut self, frame: &GestureFrame) {
        let badge = match frame.intent {
            VisualIntent::Like => "LIKE",
            VisualIntent::Dislike => "NOPE",
            VisualIntent::None => "-",
        };
        tracing::debug!("Drag dx={} dy={} badge={}", frame.dx, frame.dy, badge);
    }

    fn render_snap_back(&mut self) {
        tracing::info!("Card returned to rest");
    }

    fn render_fly_out(&mut self, transform: &CardTransform) {
        tracing::debug!("Fly out: {}", transform.to_css());
    }

    fn render_tally(&mut self, tally: Tally) {
        tracing::info!("Likes: {}  Nopes: {}", tally.likes, tally.dislikes);
    }

    fn reveal_match(&mut self, matched: &Match<T>) {
        tracing::info!("It's a match with {}!", matched.entity.display_name());
    }
}
