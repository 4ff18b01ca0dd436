//! Immediate-mode drawing sequences for sectors, rings and circles.
//!
//! Commands follow the HTML canvas / Cairo model: angles in radians measured
//! from the positive x axis with y pointing down, arcs append a connecting
//! line from the current point, and `Save`/`Restore` scope transforms.

use std::f64::consts::PI;

use smallvec::SmallVec;

use crate::core::{Point, Sector, rotated};
use crate::error::SectorResult;
use crate::render::ShapeStrategy;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RasterCommand {
    Save,
    Scale {
        x: f64,
        y: f64,
    },
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    Restore,
    FillStroke,
}

pub type RasterCommands = SmallVec<[RasterCommand; 12]>;

/// Drawing surface able to replay [`RasterCommand`]s.
///
/// `fill_stroke` paints the current path with whatever style the context
/// carries.
pub trait RasterContext {
    fn save(&mut self) -> SectorResult<()>;
    fn restore(&mut self) -> SectorResult<()>;
    fn scale(&mut self, x: f64, y: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    );
    fn fill_stroke(&mut self) -> SectorResult<()>;
}

/// Builds the drawing sequence for `sector`; empty sectors draw nothing.
#[must_use]
pub fn synthesize_raster_commands(sector: &Sector) -> RasterCommands {
    match ShapeStrategy::select(sector) {
        ShapeStrategy::BaseCircle => base_circle_commands(sector),
        ShapeStrategy::Sector => sector_commands(sector),
    }
}

/// Plain circle (or ellipse) drawing sequence.
#[must_use]
pub fn base_circle_commands(sector: &Sector) -> RasterCommands {
    let mut commands = RasterCommands::new();
    if sector.is_empty() {
        return commands;
    }

    let scale = sector.vertical_scale();
    let center = scaled_center(sector.center, scale);
    let scoped = push_scale(&mut commands, scale);
    commands.push(RasterCommand::BeginPath);
    commands.push(RasterCommand::Arc {
        center,
        radius: sector.radius,
        start_angle: 0.0,
        end_angle: 2.0 * PI,
        anticlockwise: false,
    });
    if scoped {
        commands.push(RasterCommand::Restore);
    }
    commands.push(RasterCommand::FillStroke);
    commands
}

fn sector_commands(sector: &Sector) -> RasterCommands {
    let mut commands = RasterCommands::new();
    if sector.is_empty() {
        return commands;
    }

    let scale = sector.vertical_scale();
    let center = scaled_center(sector.center, scale);
    let radius = sector.radius;
    let inner_radius = sector.inner_radius;
    let start_angle = sector.canonical_start();
    let mut stop_angle = sector.canonical_stop();

    let full_sweep = stop_angle - start_angle == 0.0;
    if full_sweep {
        stop_angle = start_angle + 2.0 * PI;
    }

    let scoped = push_scale(&mut commands, scale);
    commands.push(RasterCommand::BeginPath);
    commands.push(RasterCommand::MoveTo(center));
    if inner_radius > 0.0 {
        commands.push(RasterCommand::MoveTo(rotated(center, start_angle, inner_radius)));
    }
    if full_sweep {
        commands.push(RasterCommand::MoveTo(rotated(center, start_angle, radius)));
    }

    commands.push(RasterCommand::Arc {
        center,
        radius,
        start_angle,
        end_angle: stop_angle,
        anticlockwise: false,
    });

    if inner_radius > 0.0 {
        if full_sweep {
            commands.push(RasterCommand::MoveTo(rotated(center, stop_angle, inner_radius)));
        }
        commands.push(RasterCommand::Arc {
            center,
            radius: inner_radius,
            start_angle: stop_angle,
            end_angle: start_angle,
            anticlockwise: true,
        });
    } else {
        commands.push(RasterCommand::LineTo(center));
    }

    if scoped {
        commands.push(RasterCommand::Restore);
    }
    commands.push(RasterCommand::FillStroke);
    commands
}

/// Under a `(1, scale)` transform the center must be pre-divided so the
/// drawing lands on the projected point.
fn scaled_center(center: Point, scale: f64) -> Point {
    if scale == 1.0 || scale == 0.0 || !scale.is_finite() {
        center
    } else {
        Point::new(center.x, center.y / scale)
    }
}

fn push_scale(commands: &mut RasterCommands, scale: f64) -> bool {
    if scale == 1.0 || scale == 0.0 || !scale.is_finite() {
        return false;
    }
    commands.push(RasterCommand::Save);
    commands.push(RasterCommand::Scale { x: 1.0, y: scale });
    true
}

/// Replays `commands` on `context`.
///
/// Every `Save` issued here is matched by a `Restore` before returning, even
/// when a command fails; the first error wins.
pub fn execute_raster_commands<C: RasterContext + ?Sized>(
    context: &mut C,
    commands: &[RasterCommand],
) -> SectorResult<()> {
    let mut depth = 0_usize;
    let mut outcome = Ok(());

    for command in commands {
        if let Err(err) = apply(context, *command, &mut depth) {
            outcome = Err(err);
            break;
        }
    }

    while depth > 0 {
        depth -= 1;
        let restored = context.restore();
        if outcome.is_ok() {
            outcome = restored;
        }
    }

    outcome
}

fn apply<C: RasterContext + ?Sized>(
    context: &mut C,
    command: RasterCommand,
    depth: &mut usize,
) -> SectorResult<()> {
    match command {
        RasterCommand::Save => {
            context.save()?;
            *depth += 1;
        }
        RasterCommand::Restore => {
            if *depth > 0 {
                *depth -= 1;
                context.restore()?;
            }
        }
        RasterCommand::Scale { x, y } => context.scale(x, y),
        RasterCommand::BeginPath => context.begin_path(),
        RasterCommand::MoveTo(point) => context.move_to(point),
        RasterCommand::LineTo(point) => context.line_to(point),
        RasterCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        } => context.arc(center, radius, start_angle, end_angle, anticlockwise),
        RasterCommand::FillStroke => context.fill_stroke()?,
    }
    Ok(())
}
