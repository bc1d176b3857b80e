//! Frame scheduling
//!
//! [`FrameScheduler::run_frame`] is called once per display refresh. Each call
//! first asks the host for the next refresh, so the loop keeps itself going
//! without spinning, then:
//!
//! 1. lets the camera rig consume accumulated input
//! 2. ticks the animation clock
//! 3. applies the motion policy to every entity, in scene order
//! 4. advances spinning groups
//! 5. hands the scene to the renderer
//!
//! The camera, renderer, and redraw request are collaborators behind the traits
//! below, so the scheduler can be driven headless in tests.

use crate::{AnimationClock, MotionPolicy, Scene};

/// Host hook that schedules the next frame callback
pub trait FrameRequester {
    fn request_next_frame(&self);
}

/// Camera plus whatever input controller drives it
pub trait CameraRig {
    /// Apply input accumulated since the previous frame
    fn update(&mut self);
    /// Viewport width / height changed
    fn set_aspect(&mut self, aspect: f32);
}

/// Draws the scene from a camera
pub trait FrameRenderer<C> {
    type Error;

    fn render(&mut self, scene: &Scene, camera: &C) -> Result<(), Self::Error>;
    fn resize(&mut self, width: u32, height: u32);
}

/// Owns the scene, clock, and motion policy for the session
pub struct FrameScheduler {
    scene: Scene,
    clock: AnimationClock,
    policy: MotionPolicy,
}

impl FrameScheduler {
    pub fn new(scene: Scene, clock: AnimationClock, policy: MotionPolicy) -> Self {
        Self { scene, clock, policy }
    }

    /// Run one frame
    ///
    /// A renderer error is returned as-is; the frame loop is not expected to
    /// survive it.
    pub fn run_frame<Q, C, R>(
        &mut self,
        requester: &Q,
        camera: &mut C,
        renderer: &mut R,
    ) -> Result<(), R::Error>
    where
        Q: FrameRequester + ?Sized,
        C: CameraRig,
        R: FrameRenderer<C>,
    {
        requester.request_next_frame();
        camera.update();
        self.advance();
        renderer.render(&self.scene, camera)
    }

    /// Tick the clock and move every entity and group by one frame
    ///
    /// Returns the clock value the motion was evaluated at.
    pub fn advance(&mut self) -> f32 {
        let clock = self.clock.tick();

        for entity in self.scene.entities_mut() {
            self.policy.apply(entity, clock);
        }
        for group in self.scene.groups_mut() {
            group.advance();
        }

        log::trace!("frame {} clock={:.3}", self.clock.ticks(), clock);
        clock
    }

    /// Viewport size changed
    ///
    /// A zero dimension (minimized window) leaves the camera aspect alone.
    pub fn on_resize<C, R>(&mut self, width: u32, height: u32, camera: &mut C, renderer: &mut R)
    where
        C: CameraRig,
        R: FrameRenderer<C>,
    {
        if width > 0 && height > 0 {
            camera.set_aspect(width as f32 / height as f32);
        }
        renderer.resize(width, height);
        log::debug!("viewport resized to {}x{}", width, height);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn policy(&self) -> &MotionPolicy {
        &self.policy
    }
}
