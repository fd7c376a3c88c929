//! Command-line driver for the viewroll controller.

use std::path::PathBuf;

use glam::{EulerRot, Vec2};
use viewroll::camera::{Region, SceneCamera, ViewPerspective, Viewport};
use viewroll::input::InputEvent;
use viewroll::options::Options;
use viewroll::{OperatorStatus, ViewRollCommand, ViewRollEngine, ViewRollError};

const USAGE: &str = "Usage: viewroll [--options FILE] [--camera | --free] [--size WxH] \
                     --from X,Y [--to X,Y]... [--cancel]";

/// A drag to replay through the engine.
struct Replay {
    options_path: Option<PathBuf>,
    camera: bool,
    size: Vec2,
    from: Vec2,
    path: Vec<Vec2>,
    cancel: bool,
}

fn parse_pair(value: &str, separator: char) -> Result<Vec2, String> {
    let (a, b) = value
        .split_once(separator)
        .ok_or_else(|| format!("expected two numbers separated by '{separator}': {value}"))?;
    let a = a.trim().parse::<f32>().map_err(|e| format!("{value}: {e}"))?;
    let b = b.trim().parse::<f32>().map_err(|e| format!("{value}: {e}"))?;
    Ok(Vec2::new(a, b))
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Replay, String> {
    let mut replay = Replay {
        options_path: None,
        camera: false,
        size: Vec2::new(1280.0, 720.0),
        from: Vec2::ZERO,
        path: Vec::new(),
        cancel: false,
    };
    let mut from = None;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--options" => replay.options_path = Some(PathBuf::from(value()?)),
            "--camera" => replay.camera = true,
            "--free" => replay.camera = false,
            "--size" => replay.size = parse_pair(&value()?, 'x')?,
            "--from" => from = Some(parse_pair(&value()?, ',')?),
            "--to" => replay.path.push(parse_pair(&value()?, ',')?),
            "--cancel" => replay.cancel = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    replay.from = from.ok_or("--from is required")?;
    Ok(replay)
}

fn run(replay: &Replay) -> Result<OperatorStatus, ViewRollError> {
    let options = match &replay.options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let mut viewport = Viewport::new(Region::new(replay.size.x, replay.size.y));
    if replay.camera {
        viewport.perspective = ViewPerspective::Camera;
        viewport.scene_camera = Some(SceneCamera::default());
    }
    let mut engine = ViewRollEngine::new(viewport, options);

    let _ = engine.handle_input(InputEvent::CursorMoved {
        x: replay.from.x,
        y: replay.from.y,
    })?;
    let mut status = engine.execute(ViewRollCommand::BeginRotation {
        pointer: replay.from,
    })?;
    if let Some(session) = engine.session() {
        log::info!("pivot: {}", session.pivot());
    }

    for point in &replay.path {
        status = engine.handle_input(InputEvent::CursorMoved {
            x: point.x,
            y: point.y,
        })?;
        if let Some(session) = engine.session() {
            log::debug!("angle: {:.1}°", session.angle().to_degrees());
        }
    }

    let end = if replay.cancel {
        ViewRollCommand::Cancel
    } else {
        ViewRollCommand::Release {
            button: engine.options().trigger.button,
        }
    };
    status = engine.execute(end)?.or(status);

    let rotation = engine
        .viewport()
        .active_camera()
        .map_or(engine.viewport().free_view.rotation, |camera| {
            camera.transform.rotation
        });
    let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
    log::info!(
        "rotation (XYZ degrees): {:.2}, {:.2}, {:.2}",
        x.to_degrees(),
        y.to_degrees(),
        z.to_degrees()
    );
    Ok(status.unwrap_or(OperatorStatus::Cancelled))
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let replay = match parse_args(std::env::args().skip(1)) {
        Ok(replay) => replay,
        Err(e) => {
            log::error!("{e}");
            log::error!("{USAGE}");
            std::process::exit(2);
        }
    };

    match run(&replay) {
        Ok(status) => log::info!("finished with {status:?}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
