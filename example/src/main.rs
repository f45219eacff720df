//! Animates three progress views on a background clock and logs every frame.
//!
//! Run with `RUST_LOG=info,jprogress_components=debug` for lifecycle logs.

mod trace_canvas;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use jprogress_components::progress_view::{AnimationState, ProgressView, ViewHost, attr};
use jprogress_platform::{RedrawQueue, ThreadedClock};
use jprogress_ui::{
    AttrValue, AttributeSet, Color, Constraint, DimensionValue, Padding, Px, View, dp,
};
use tracing::{info, warn};

use trace_canvas::TraceCanvas;

const FRAME_TIMEOUT: Duration = Duration::from_millis(250);
const RUN_LIMIT: Duration = Duration::from_secs(10);

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,example=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn circle_attributes() -> AttributeSet {
    AttributeSet::new()
        .with(attr::SHAPE, AttrValue::Integer(1))
        .with(attr::PROGRESS, AttrValue::Integer(75))
        .with(attr::TEXT_VISIBLE, AttrValue::Boolean(true))
        .with(attr::INDICATOR_COLOR, AttrValue::Color(Color::from_rgb(0.2, 0.6, 0.9)))
        .with(attr::ANIMATION_DURATION, AttrValue::Integer(1200))
}

fn bar_attributes() -> AttributeSet {
    AttributeSet::new()
        .with(attr::SHAPE, AttrValue::Integer(0))
        .with(attr::PROGRESS, AttrValue::Integer(60))
        .with(attr::TEXT_VISIBLE, AttrValue::Boolean(true))
        .with(attr::TEXT_ALIGN, AttrValue::Integer(0))
        .with(attr::LABEL_TEXT, AttrValue::String("Uploading".into()))
        .with(attr::ANIMATION_DURATION, AttrValue::Integer(1500))
}

fn pill_attributes() -> AttributeSet {
    AttributeSet::new()
        .with(attr::SHAPE, AttrValue::Integer(2))
        .with(attr::PROGRESS, AttrValue::Integer(40))
        .with(attr::MAX_PROGRESS, AttrValue::Integer(50))
        .with(attr::TRACK_COLOR, AttrValue::Integer(0xFF_EE_EE_EE_u32 as i32))
        .with(attr::ANIMATION_DURATION, AttrValue::Integer(800))
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    dp::set_scale_factor(2.0);

    let queue = Arc::new(RedrawQueue::new());
    let host = ViewHost::new(Arc::new(ThreadedClock::new()), queue.clone());

    let bar_width = Constraint::new(
        DimensionValue::Fill {
            min: None,
            max: Some(Px(320)),
        },
        DimensionValue::Fixed(Px(32)),
    );
    let mut views = vec![
        (
            "circle",
            ProgressView::new(&host, Some(&circle_attributes())),
            Constraint::fixed(Px(160), Px(160)),
        ),
        (
            "bar",
            ProgressView::new(&host, Some(&bar_attributes())),
            bar_width,
        ),
        (
            "pill",
            ProgressView::new(&host, Some(&pill_attributes())),
            bar_width,
        ),
    ];

    for (name, view, constraint) in &mut views {
        view.set_padding(Padding::all(Px(4)));
        let size = view.measure(constraint)?;
        info!(view = *name, ?size, "measured");
    }
    if let Some((_, pill, _)) = views.last_mut() {
        pill.set_reverse(true);
    }
    for (_, view, _) in &mut views {
        view.start_animation();
    }

    let started = Instant::now();
    let mut frames = 0usize;
    loop {
        let dirty = queue.wait_dirty(FRAME_TIMEOUT);
        if dirty {
            frames += 1;
            for (name, view, _) in &mut views {
                view.draw(&mut TraceCanvas::new(name));
            }
        }

        let running = views
            .iter()
            .any(|(_, view, _)| view.animation_state() == AnimationState::Running);
        if !running && !dirty {
            break;
        }
        if started.elapsed() > RUN_LIMIT {
            warn!("animations still running after {RUN_LIMIT:?}, ending them");
            for (_, view, _) in &mut views {
                view.stop_animation();
            }
        }
    }

    for (name, view, _) in &views {
        info!(
            view = *name,
            progress = view.progress(),
            text = %view.display_text(),
            "final state"
        );
    }
    let stats = queue.stats();
    info!(
        frames,
        direct = stats.direct,
        deferred = stats.deferred,
        "done"
    );
    Ok(())
}
