use clap::Subcommand;
use focusflow_core::theme::WALLPAPERS;
use focusflow_core::{SqliteStore, ThemeStore};
use serde_json::json;

use super::{print_json, CliResult};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme as JSON
    Show,
    /// Set the font (inter, poppins, manrope, space-grotesk, orbitron, exo-2)
    SetFont { font: String },
    /// Set the wallpaper by catalog id
    SetWallpaper { id: String },
    /// Set the accent color (red, blue, light-blue, green, ...)
    SetAccent { color: String },
    /// List the wallpaper catalog
    Wallpapers,
}

pub fn run(action: ThemeAction) -> CliResult {
    let mut themes = ThemeStore::open(SqliteStore::open()?);
    match action {
        ThemeAction::Show => {
            let theme = themes.theme();
            print_json(&json!({
                "font": theme.font,
                "fontName": theme.font.display_name(),
                "wallpaper": theme.wallpaper(),
                "accentColor": theme.accent_color,
                "accentHsl": theme.accent_color.hsl(),
            }))?;
        }
        ThemeAction::SetFont { font } => {
            themes.set_font(&font)?;
            println!("ok");
        }
        ThemeAction::SetWallpaper { id } => {
            themes.set_wallpaper(&id)?;
            println!("ok");
        }
        ThemeAction::SetAccent { color } => {
            themes.set_accent(&color)?;
            println!("ok");
        }
        ThemeAction::Wallpapers => print_json(&WALLPAPERS)?,
    }
    Ok(())
}
