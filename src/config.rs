use std::path::PathBuf;

use clap::Parser;

pub const TITLE: &str = "LearnOpenGL";

#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Settings {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Directory holding the texture images
    #[arg(long, env = "LEARNGL_ASSETS", default_value = "assets")]
    pub assets: PathBuf,

    /// Leave the cursor visible and free instead of capturing it
    #[arg(long)]
    pub no_grab: bool,
}
