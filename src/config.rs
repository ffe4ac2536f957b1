// Fixed window settings. There are no flags or files; these are the only knobs.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub title: &'static str,
    pub width: usize,
    pub height: usize,
    /// Presentation rate cap; stands in for vsync on backends without it.
    pub target_fps: usize,
}

impl Config {
    pub const DEFAULT: Config = Config {
        title: "Crosshair",
        width: 800,
        height: 600,
        target_fps: 60,
    };
}
