//! Aurora renders a slowly shifting gradient background frame by frame and
//! runs a handful of decorative page behaviours against an in-memory page.
//!
//! - [`GradientAnimator`] draws the background onto a [`DrawSurface`]
//! - [`PageEffects`] ties the background, a [`Document`] and a tween
//!   [`Timeline`] together behind the [`PageHost`] callbacks
//! - [`HeadlessHost`] drives a page at a fixed frame rate into a [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod background;
pub(crate) mod behaviors;
pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod effects;
/// Frame sinks: memory, PNG sequences and ffmpeg.
pub mod encode;
pub(crate) mod host;
pub(crate) mod page;
/// Render surfaces.
pub mod render;

mod pipeline;

pub use crate::foundation::core::{Fps, FrameIndex, FrameRange, Point, Rect, Viewport};
pub use crate::foundation::error::{AuroraError, AuroraResult};
pub use crate::foundation::math::Rng64;

pub use crate::animation::clock::AnimationClock;
pub use crate::animation::ease::Ease;
pub use crate::animation::timeline::{Timeline, TweenHandle};
pub use crate::animation::tween::{Property, PropertyStore, Repeat, Target, Track, Tween, Value};
pub use crate::background::animator::{GradientAnimator, RenderState};
pub use crate::background::geometry::{FrameGeometry, Oscillator, Wave};
pub use crate::behaviors::{
    AnchorScroll, Behavior, FocusVisible, GlowCycle, PageCtx, ParallaxTilt, Preloader,
    ScrollReveal, TimerAction, Timers,
};
pub use crate::color::{Rgb8, Rgba, hsl_to_rgb, parse_hex};
pub use crate::config::{
    AnchorConfig, AuroraConfig, BehaviorConfig, FocusConfig, GlowConfig, GradientConfig,
    HighlightStop, ParallaxConfig, PreloaderConfig, RevealConfig,
};
pub use crate::effects::PageEffects;
pub use crate::encode::ffmpeg::FfmpegSink;
pub use crate::encode::png::{PngSequenceSink, save_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::host::events::{EventScript, HostEvent, ScriptedEvent};
pub use crate::host::headless::{HeadlessHost, PageHost};
pub use crate::page::document::{Document, DocumentSnapshot, Element, ElementId, Style};
pub use crate::page::selector::SelectorList;
pub use crate::page::spec::{ElementSpec, PageSpec, RectSpec};
pub use crate::pipeline::{RenderStats, render_frame, render_range, simulate};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::recording::{DrawCall, RecordingSurface};
pub use crate::render::{ColorStop, DrawSurface, FrameRGBA, LinearGradient, RadialGradient};
