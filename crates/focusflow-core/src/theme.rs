//! Cosmetic theme record: font, wallpaper and accent color.
//!
//! Nothing in the timer depends on these values; they are validated against
//! the catalogs below and stored so the UI layer can restore them.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "inter")]
    Inter,
    #[serde(rename = "poppins")]
    Poppins,
    #[serde(rename = "manrope")]
    Manrope,
    #[serde(rename = "space-grotesk")]
    SpaceGrotesk,
    #[serde(rename = "orbitron")]
    Orbitron,
    #[serde(rename = "exo-2")]
    Exo2,
}

impl FontFamily {
    pub const ALL: [FontFamily; 6] = [
        FontFamily::Inter,
        FontFamily::Poppins,
        FontFamily::Manrope,
        FontFamily::SpaceGrotesk,
        FontFamily::Orbitron,
        FontFamily::Exo2,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FontFamily::Inter => "inter",
            FontFamily::Poppins => "poppins",
            FontFamily::Manrope => "manrope",
            FontFamily::SpaceGrotesk => "space-grotesk",
            FontFamily::Orbitron => "orbitron",
            FontFamily::Exo2 => "exo-2",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Poppins => "Poppins",
            FontFamily::Manrope => "Manrope",
            FontFamily::SpaceGrotesk => "Space Grotesk",
            FontFamily::Orbitron => "Orbitron",
            FontFamily::Exo2 => "Exo 2",
        }
    }
}

impl std::str::FromStr for FontFamily {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| ValidationError::UnknownOption {
                field: "font".into(),
                value: s.into(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccentColor {
    Red,
    #[default]
    Blue,
    LightBlue,
    Green,
    Purple,
    Orange,
    Pink,
    Yellow,
    Black,
}

impl AccentColor {
    pub const ALL: [AccentColor; 9] = [
        AccentColor::Red,
        AccentColor::Blue,
        AccentColor::LightBlue,
        AccentColor::Green,
        AccentColor::Purple,
        AccentColor::Orange,
        AccentColor::Pink,
        AccentColor::Yellow,
        AccentColor::Black,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AccentColor::Red => "red",
            AccentColor::Blue => "blue",
            AccentColor::LightBlue => "light-blue",
            AccentColor::Green => "green",
            AccentColor::Purple => "purple",
            AccentColor::Orange => "orange",
            AccentColor::Pink => "pink",
            AccentColor::Yellow => "yellow",
            AccentColor::Black => "black",
        }
    }

    /// HSL triple in CSS custom-property form, e.g. `217 91% 60%`.
    pub fn hsl(self) -> &'static str {
        match self {
            AccentColor::Red => "349 100% 55%",
            AccentColor::Blue => "217 91% 60%",
            AccentColor::LightBlue => "199 100% 50%",
            AccentColor::Green => "145 100% 45%",
            AccentColor::Purple => "271 81% 56%",
            AccentColor::Orange => "25 95% 53%",
            AccentColor::Pink => "330 81% 60%",
            AccentColor::Yellow => "48 96% 53%",
            AccentColor::Black => "0 0% 0%",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            AccentColor::Red => "Red",
            AccentColor::Blue => "Blue",
            AccentColor::LightBlue => "Light Blue",
            AccentColor::Green => "Green",
            AccentColor::Purple => "Purple",
            AccentColor::Orange => "Orange",
            AccentColor::Pink => "Pink",
            AccentColor::Yellow => "Yellow",
            AccentColor::Black => "Black",
        }
    }
}

impl std::str::FromStr for AccentColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| ValidationError::UnknownOption {
                field: "accent color".into(),
                value: s.into(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallpaperCategory {
    SoftGradients,
    PeacefulMinimal,
    DarkRadiant,
    GeometricAbstract,
    NatureOrganic,
    SolidColors,
}

impl WallpaperCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            WallpaperCategory::SoftGradients => "Soft Gradients",
            WallpaperCategory::PeacefulMinimal => "Peaceful Minimal",
            WallpaperCategory::DarkRadiant => "Dark Radiant",
            WallpaperCategory::GeometricAbstract => "Geometric Abstract",
            WallpaperCategory::NatureOrganic => "Nature Organic",
            WallpaperCategory::SolidColors => "Solid Colors",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Wallpaper {
    pub id: &'static str,
    pub name: &'static str,
    pub category: WallpaperCategory,
    /// Fill color for solid wallpapers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

const fn image(id: &'static str, name: &'static str, category: WallpaperCategory) -> Wallpaper {
    Wallpaper {
        id,
        name,
        category,
        color: None,
    }
}

const fn solid(id: &'static str, name: &'static str, color: &'static str) -> Wallpaper {
    Wallpaper {
        id,
        name,
        category: WallpaperCategory::SolidColors,
        color: Some(color),
    }
}

use self::WallpaperCategory::{
    DarkRadiant, GeometricAbstract, NatureOrganic, PeacefulMinimal, SoftGradients,
};

pub static WALLPAPERS: &[Wallpaper] = &[
    image("soft-gradient-1", "Blue to Purple Waves", SoftGradients),
    image("soft-gradient-2", "Peach to Pink", SoftGradients),
    image("soft-gradient-3", "Mint to Teal", SoftGradients),
    image("soft-gradient-4", "Lavender to Blue", SoftGradients),
    image("soft-gradient-5", "Sunrise Orange", SoftGradients),
    image("peaceful-minimal-1", "White Space", PeacefulMinimal),
    image("peaceful-minimal-2", "Soft Beige", PeacefulMinimal),
    image("peaceful-minimal-3", "Gray Shapes", PeacefulMinimal),
    image("peaceful-minimal-4", "Pastel Geometric", PeacefulMinimal),
    image("peaceful-minimal-5", "Zen Composition", PeacefulMinimal),
    image("dark-radiant-1", "Deep Blue Glow", DarkRadiant),
    image("dark-radiant-2", "Purple Nebula", DarkRadiant),
    image("dark-radiant-3", "Midnight Stars", DarkRadiant),
    image("dark-radiant-4", "Teal Luminescence", DarkRadiant),
    image("dark-radiant-5", "Accent Glow", DarkRadiant),
    image("geometric-abstract-1", "Clean Patterns", GeometricAbstract),
    image("geometric-abstract-2", "Polygon Design", GeometricAbstract),
    image("geometric-abstract-3", "Abstract Lines", GeometricAbstract),
    image("geometric-abstract-4", "Modern Composition", GeometricAbstract),
    image("geometric-abstract-5", "Triangular Patterns", GeometricAbstract),
    image("nature-organic-1", "Mountain Dawn", NatureOrganic),
    image("nature-organic-2", "Fluid Water", NatureOrganic),
    image("nature-organic-3", "Forest Atmosphere", NatureOrganic),
    image("nature-organic-4", "Cloud Formations", NatureOrganic),
    image("nature-organic-5", "Flowing Curves", NatureOrganic),
    solid("solid-black", "Black", "#0A0A0A"),
    solid("solid-dark-gray", "Dark Gray", "#1A1A1A"),
    solid("solid-charcoal", "Charcoal", "#2D2D2D"),
    solid("solid-navy", "Navy", "#0F1729"),
    solid("solid-deep-blue", "Deep Blue", "#1A2332"),
    solid("solid-dark-teal", "Dark Teal", "#0D1F1F"),
    solid("solid-forest", "Forest", "#0F1F0F"),
    solid("solid-burgundy", "Burgundy", "#2D1420"),
    solid("solid-deep-purple", "Deep Purple", "#1A0F2E"),
    solid("solid-midnight-blue", "Midnight Blue", "#0A1628"),
];

pub const DEFAULT_WALLPAPER: &str = "soft-gradient-1";

pub fn wallpaper_by_id(id: &str) -> Option<&'static Wallpaper> {
    WALLPAPERS.iter().find(|w| w.id == id)
}

pub fn wallpapers_in(category: WallpaperCategory) -> impl Iterator<Item = &'static Wallpaper> {
    WALLPAPERS.iter().filter(move |w| w.category == category)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeSettings {
    pub font: FontFamily,
    pub wallpaper: String,
    pub accent_color: AccentColor,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            font: FontFamily::default(),
            wallpaper: DEFAULT_WALLPAPER.to_string(),
            accent_color: AccentColor::default(),
        }
    }
}

impl ThemeSettings {
    /// # Errors
    /// Returns `UnknownOption` if `id` is not in the wallpaper catalog.
    pub fn with_wallpaper(&self, id: &str) -> Result<Self, ValidationError> {
        let wallpaper = wallpaper_by_id(id).ok_or_else(|| ValidationError::UnknownOption {
            field: "wallpaper".into(),
            value: id.into(),
        })?;
        Ok(Self {
            wallpaper: wallpaper.id.to_string(),
            ..self.clone()
        })
    }

    pub fn wallpaper(&self) -> Option<&'static Wallpaper> {
        wallpaper_by_id(&self.wallpaper)
    }
}
