use anyhow::Context;
use gumdrop::Options;
use smoothpaint::{
    config::Config,
    graphics::Rect,
    path::StrokePath,
    PaintHost, PaintSurface, PointerEvent,
};
use std::path::PathBuf;

#[derive(gumdrop::Options, Debug)]
pub struct Args {
    #[options(help = "Show this message")]
    help: bool,

    #[options(help = "Print the version", short = "V")]
    pub version: bool,

    #[options(help = "Config file location")]
    pub config: Option<PathBuf>,

    #[options(help = "Print the default config file and exit", no_short)]
    pub print_default_config: bool,

    #[options(help = "Only accept stylus input, overriding the config", no_short)]
    pub stylus_only: bool,

    #[options(help = "Don't commit finished strokes to the raster", no_short)]
    pub waiting_for_touch: bool,

    #[options(free, help = "Gesture script to replay")]
    pub file: Option<PathBuf>,
}

/// A recorded sequence of pointer events, replayed against a surface of the given size.
#[derive(serde::Deserialize, Debug)]
pub struct Script {
    pub width: i32,
    pub height: i32,
    pub events: Vec<PointerEvent>,
}

#[derive(Default, Debug)]
struct PrintingHost {
    repaints: usize,
    strokes: usize,
    warning: bool,
}

impl PaintHost for PrintingHost {
    fn request_repaint(&mut self, rect: Rect) {
        self.repaints += 1;
        let (left, top, right, bottom) = rect.to_pixels();
        println!("repaint {rect} -> [{left}, {top}, {right}, {bottom}]");
    }

    fn request_full_repaint(&mut self) {
        self.repaints += 1;
        println!("repaint everything");
    }

    fn on_stroke_completed(&mut self, path: StrokePath) {
        self.strokes += 1;
        let commands = path
            .commands()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("stroke {} {commands}", self.strokes);
    }

    fn on_warning_state_changed(&mut self, is_on: bool) {
        self.warning = is_on;
        println!("warning {}", if is_on { "on" } else { "off" });
    }
}

fn replay(config: &Config, args: &Args, script: &Script) -> anyhow::Result<PrintingHost> {
    let mut surface = PaintSurface::with_config(config, PrintingHost::default());
    if args.stylus_only {
        surface.set_allow_stylus_only(true);
    }
    surface.set_waiting_for_touch_to_resume(args.waiting_for_touch);

    surface
        .on_size_change(script.width, script.height)
        .map_err(|err| anyhow::anyhow!(err.message()))?;

    for event in script.events.iter() {
        let handled = surface.on_pointer_event(event);
        log::debug!("{:?} at {} handled: {handled}", event.action, event.location);
    }

    if let Some(raster) = surface.raster() {
        let background = config.background_color;
        let inked = raster
            .pixels()
            .iter()
            .map(|pixel| pixel.demultiply())
            .filter(|pixel| {
                [pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()] != background
            })
            .count();
        println!("{inked} pixels differ from the background");
    }

    Ok(surface.into_host())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse_args_default_or_exit();

    if args.version {
        println!("smoothpaint util version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.print_default_config {
        let contents = Config::new()
            .to_ron_string()
            .map_err(|err| anyhow::anyhow!(err.message()))?;
        println!("{contents}");
        return Ok(());
    }

    let config = match args.config.as_ref() {
        Some(path) => Config::from_disk(path),
        None => match Config::config_path() {
            Ok(path) => Config::from_disk(&path),
            Err(err) => {
                log::warn!("{}, using default config", err.message());
                Config::default()
            }
        },
    };

    let file = match args.file.as_ref() {
        Some(file) => file,
        None => {
            println!("{}", Args::usage());
            return Ok(());
        }
    };

    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("could not read {}", file.display()))?;
    let script: Script =
        ron::from_str(&contents).with_context(|| format!("could not parse {}", file.display()))?;

    let host = replay(&config, &args, &script)?;
    println!(
        "{} strokes, {} repaint requests, warning {}",
        host.strokes,
        host.repaints,
        if host.warning { "on" } else { "off" }
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    const SCRIPT: &str = r#"(
        width: 100,
        height: 100,
        events: [
            (action: Down, location: (x: 10.0, y: 10.0), tool: Finger),
            (action: Move, location: (x: 15.0, y: 12.0), tool: Finger, history: [(x: 12.0, y: 10.0)]),
            (action: Up, location: (x: 20.0, y: 15.0), tool: Finger),
        ],
    )"#;

    fn args(stylus_only: bool) -> Args {
        let flags: &[&str] = if stylus_only { &["--stylus-only"] } else { &[] };
        Args::parse_args_default(flags).unwrap()
    }

    #[test]
    fn replays_script() {
        let script: Script = ron::from_str(SCRIPT).unwrap();
        let host = replay(&Config::new(), &args(false), &script).unwrap();
        assert_eq!(host.strokes, 1);
        assert_eq!(host.repaints, 2);
        assert!(!host.warning);
    }

    #[test]
    fn stylus_only_absorbs_finger() {
        let script: Script = ron::from_str(SCRIPT).unwrap();
        let host = replay(&Config::new(), &args(true), &script).unwrap();
        assert_eq!(host.strokes, 0);
        assert_eq!(host.repaints, 0);
        assert!(!host.warning);
    }
}
