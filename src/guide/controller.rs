use std::sync::atomic::{AtomicU8, Ordering};

use bevy::prelude::*;
use bevy::window::RequestRedraw;

use super::layout;
use super::mode::CompositionMode;
use super::primitives::{Primitive, SurfaceSize};
use super::spiral::SpiralPolicy;

/// Anything that can ask the drawing surface for a new frame.
pub trait RedrawSignal {
    fn request_redraw(&mut self);
}

impl RedrawSignal for MessageWriter<'_, RequestRedraw> {
    fn request_redraw(&mut self) {
        self.write(RequestRedraw);
    }
}

/// Holds the active guide mode and turns surface sizes into primitives.
///
/// The mode lives in an atomic so mode changes and renders can come from
/// different threads; the last write wins.
#[derive(Resource, Debug)]
pub struct OverlayController {
    mode: AtomicU8,
    spiral: SpiralPolicy,
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new(SpiralPolicy::default())
    }
}

impl OverlayController {
    pub fn new(spiral: SpiralPolicy) -> Self {
        Self {
            mode: AtomicU8::new(CompositionMode::Central.to_u8()),
            spiral,
        }
    }

    pub fn mode(&self) -> CompositionMode {
        CompositionMode::from_u8(self.mode.load(Ordering::Acquire))
    }

    /// Switches the guide and requests exactly one redraw, even when the mode
    /// is unchanged.
    pub fn set_mode(&self, mode: CompositionMode, redraw: &mut impl RedrawSignal) {
        let previous = CompositionMode::from_u8(self.mode.swap(mode.to_u8(), Ordering::AcqRel));
        debug!("Guide mode {:?} -> {:?}", previous, mode);
        redraw.request_redraw();
    }

    pub fn spiral_policy(&self) -> &SpiralPolicy {
        &self.spiral
    }

    /// Replaces the spiral policy, requesting a redraw only if it changed.
    pub fn set_spiral_policy(&mut self, policy: SpiralPolicy, redraw: &mut impl RedrawSignal) {
        if self.spiral == policy {
            return;
        }
        debug!("Spiral policy {:?} -> {:?}", self.spiral, policy);
        self.spiral = policy;
        redraw.request_redraw();
    }

    /// Primitives for the current mode on a surface of `size`.
    pub fn render(&self, size: SurfaceSize) -> Vec<Primitive> {
        layout::compute(size, self.mode(), &self.spiral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingRedraw {
        requests: usize,
    }

    impl RedrawSignal for CountingRedraw {
        fn request_redraw(&mut self) {
            self.requests += 1;
        }
    }

    fn size() -> SurfaceSize {
        SurfaceSize::new(640.0, 480.0)
    }

    #[test]
    fn test_starts_central() {
        let controller = OverlayController::default();
        assert_eq!(controller.mode(), CompositionMode::Central);
        assert_eq!(
            controller.render(size()),
            layout::compute(size(), CompositionMode::Central, &SpiralPolicy::default())
        );
    }

    #[test]
    fn test_set_mode_requests_one_redraw() {
        let controller = OverlayController::default();
        let mut redraw = CountingRedraw::default();

        controller.set_mode(CompositionMode::Diagonal, &mut redraw);
        assert_eq!(redraw.requests, 1);
        assert_eq!(controller.mode(), CompositionMode::Diagonal);
    }

    #[test]
    fn test_self_transition_still_requests_redraw() {
        let controller = OverlayController::default();
        let mut redraw = CountingRedraw::default();

        controller.set_mode(CompositionMode::Central, &mut redraw);
        controller.set_mode(CompositionMode::Central, &mut redraw);
        assert_eq!(redraw.requests, 2);
        assert_eq!(controller.mode(), CompositionMode::Central);
    }

    #[test]
    fn test_render_reflects_latest_mode() {
        let controller = OverlayController::default();
        let mut redraw = CountingRedraw::default();

        for mode in CompositionMode::all() {
            for other in CompositionMode::all() {
                controller.set_mode(*other, &mut redraw);
            }
            controller.set_mode(*mode, &mut redraw);
            assert_eq!(
                controller.render(size()),
                layout::compute(size(), *mode, &SpiralPolicy::default())
            );
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let controller = OverlayController::default();
        let mut redraw = CountingRedraw::default();
        controller.set_mode(CompositionMode::GoldenRatio, &mut redraw);

        assert_eq!(controller.render(size()), controller.render(size()));
        assert_eq!(redraw.requests, 1);
    }

    #[test]
    fn test_set_spiral_policy_redraws_only_on_change() {
        let mut controller = OverlayController::default();
        let mut redraw = CountingRedraw::default();

        controller.set_spiral_policy(SpiralPolicy::default(), &mut redraw);
        assert_eq!(redraw.requests, 0);

        let policy = SpiralPolicy {
            show_labels: false,
            ..default()
        };
        controller.set_spiral_policy(policy, &mut redraw);
        assert_eq!(redraw.requests, 1);
        assert_eq!(*controller.spiral_policy(), policy);
    }

    #[test]
    fn test_spiral_policy_flows_into_render() {
        let mut controller = OverlayController::default();
        let mut redraw = CountingRedraw::default();
        controller.set_mode(CompositionMode::GoldenRatio, &mut redraw);

        let with_labels = controller.render(size());
        controller.set_spiral_policy(
            SpiralPolicy {
                show_labels: false,
                ..default()
            },
            &mut redraw,
        );
        let without_labels = controller.render(size());

        assert!(with_labels.iter().any(Primitive::is_label));
        assert!(!without_labels.iter().any(Primitive::is_label));
    }

    #[test]
    fn test_concurrent_renders_see_a_single_mode() {
        let controller = OverlayController::default();
        let expected: Vec<Vec<Primitive>> = CompositionMode::all()
            .iter()
            .map(|mode| layout::compute(size(), *mode, &SpiralPolicy::default()))
            .collect();

        std::thread::scope(|scope| {
            scope.spawn(|| {
                let mut redraw = CountingRedraw::default();
                for _ in 0..200 {
                    for mode in CompositionMode::all() {
                        controller.set_mode(*mode, &mut redraw);
                    }
                }
            });

            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..200 {
                        let rendered = controller.render(size());
                        assert!(expected.contains(&rendered));
                    }
                });
            }
        });

        controller.set_mode(CompositionMode::RuleOfThirds, &mut CountingRedraw::default());
        assert_eq!(controller.mode(), CompositionMode::RuleOfThirds);
    }
}
