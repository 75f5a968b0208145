//! The rover context and its cooperative main loop.

use embassy_time::{Duration, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripDriver;
use crate::actuator::{ALL_NEUTRAL, ActuatorTimer, Actuators};
use crate::color::{Rgb, rgb, solid};
use crate::dispatch::{Action, Keymap};
use crate::event::{EventSlot, RemoteDecoder, ShutdownSignal};
use crate::matrix::{FrameCycler, MatrixSink};
use crate::sequence::SequencePlayer;
use crate::time::{Clock, Ticks};

/// Default loop period
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(10);

/// Rover configuration
#[derive(Debug, Clone, Copy)]
pub struct RoverConfig {
    /// Time between two loop iterations
    pub tick_period: Duration,
    /// Color the strip fades to on startup
    pub startup_color: Rgb,
    /// Duration of the startup fade
    pub startup_fade: Duration,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            startup_color: rgb(0, 30, 0),
            startup_fade: Duration::from_millis(1000),
        }
    }
}

/// Result of a loop iteration
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// When the next iteration is due
    pub next_deadline: Ticks,
    /// How long to wait until then (zero if behind schedule)
    pub sleep_duration: Duration,
}

/// Rover - owns every output and every animation session.
///
/// All session state is mutated from [`Rover::tick`] and
/// [`Rover::handle_code`], both called from the loop's own context.
pub struct Rover<S, M, A, D, const N: usize> {
    // Outputs and input
    strip: S,
    matrix: M,
    motors: A,
    decoder: Option<D>,

    // Configuration
    keymap: Keymap<N>,
    config: RoverConfig,

    // Sessions
    lights: SequencePlayer<N>,
    frames: FrameCycler,
    motor_timer: ActuatorTimer,
    next_tick: Ticks,
}

impl<S, M, A, D, const N: usize> Rover<S, M, A, D, N>
where
    S: StripDriver<N>,
    M: MatrixSink,
    A: Actuators,
    D: RemoteDecoder,
{
    pub fn new(
        strip: S,
        matrix: M,
        motors: A,
        decoder: D,
        keymap: Keymap<N>,
        config: RoverConfig,
    ) -> Self {
        Self {
            strip,
            matrix,
            motors,
            decoder: Some(decoder),
            keymap,
            config,
            lights: SequencePlayer::new(),
            frames: FrameCycler::new(),
            motor_timer: ActuatorTimer::new(),
            next_tick: Ticks::ZERO,
        }
    }

    /// Bring the outputs up: matrix on and cleared, startup fade started
    pub fn startup(&mut self, now: Ticks) {
        self.matrix.init();
        self.matrix.clear();
        self.lights.fade_to(
            &self.strip,
            solid(self.config.startup_color),
            self.config.startup_fade,
            now,
        );
        self.next_tick = now;
    }

    /// Dispatch a raw remote code and apply the resulting action
    pub fn handle_code(&mut self, code: i32, now: Ticks) -> Action<N> {
        let action = self.keymap.dispatch(code);
        #[cfg(feature = "esp32-log")]
        if action != Action::NoOp {
            println!("[Rover] code {} -> {:?}", code, action);
        }
        self.apply(action, now);
        action
    }

    /// Apply one action; preempts whatever session it targets
    pub fn apply(&mut self, action: Action<N>, now: Ticks) {
        match action {
            Action::Drive { wheels, duration } => {
                self.motors.drive(wheels);
                self.motor_timer.schedule(duration, now);
            }
            Action::RgbStart { sequence, looping } => {
                if let Err(_err) = self.lights.play(&self.strip, sequence, looping, now) {
                    #[cfg(feature = "esp32-log")]
                    println!("[Rover] sequence rejected: {}", _err);
                }
            }
            Action::RgbStop => self.lights.stop(&mut self.strip),
            Action::MatrixStart { frames, delay } => {
                if let Err(_err) = self.frames.play(&mut self.matrix, frames, delay, now) {
                    #[cfg(feature = "esp32-log")]
                    println!("[Rover] animation rejected: {}", _err);
                }
            }
            Action::MatrixShowStatic(frame) => self.frames.show_static(&mut self.matrix, &frame),
            Action::MatrixStop => self.frames.stop(),
            Action::NoOp => {}
        }
    }

    /// Advance every session by one step.
    ///
    /// Order: light strip, matrix, motor auto-stop. Returns pacing info; the
    /// caller sleeps for `sleep_duration` before the next call.
    pub fn tick(&mut self, now: Ticks) -> TickResult {
        self.lights.tick(&mut self.strip, now);
        self.frames.tick(&mut self.matrix, now);
        if self.motor_timer.tick(now) {
            self.motors.drive(ALL_NEUTRAL);
        }

        // Drift correction: skip the backlog after a long stall
        let period = self.config.tick_period;
        let max_drift = Duration::from_millis(period.as_millis() * 2);
        if now.elapsed_since(self.next_tick) > max_drift {
            self.next_tick = now;
        }
        self.next_tick = self.next_tick.wrapping_add(period);

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration: self.next_tick.elapsed_since(now),
        }
    }

    /// Drain the pending remote event, if any, then tick
    pub fn poll(&mut self, events: &EventSlot, now: Ticks) -> TickResult {
        if let Some(event) = events.take() {
            self.handle_code(event.code, now);
        }
        self.tick(now)
    }

    /// Stop everything.
    ///
    /// Safe to call any number of times, in any state: wheels neutral, strip
    /// off, matrix cleared, decoder released.
    pub fn shutdown(&mut self) {
        self.motors.drive(ALL_NEUTRAL);
        self.motor_timer.cancel();
        self.lights.stop(&mut self.strip);
        self.frames.stop();
        self.matrix.clear();
        if let Some(mut decoder) = self.decoder.take() {
            decoder.close();
        }
        #[cfg(feature = "esp32-log")]
        println!("[Rover] shut down");
    }

    /// Run the loop until `shutdown` is requested, then shut down
    pub async fn run<C: Clock>(&mut self, clock: &C, events: &EventSlot, shutdown: &ShutdownSignal) {
        self.startup(clock.now());
        while !shutdown.is_requested() {
            let result = self.poll(events, clock.now());
            Timer::after(result.sleep_duration).await;
        }
        self.shutdown();
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    pub fn motors(&self) -> &A {
        &self.motors
    }

    pub fn lights(&self) -> &SequencePlayer<N> {
        &self.lights
    }

    pub fn frames(&self) -> &FrameCycler {
        &self.frames
    }

    pub fn motor_timer(&self) -> &ActuatorTimer {
        &self.motor_timer
    }

    /// Check if the decoder is still held
    pub fn has_decoder(&self) -> bool {
        self.decoder.is_some()
    }

    pub fn config(&self) -> &RoverConfig {
        &self.config
    }
}
