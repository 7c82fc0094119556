use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Symbolic icon tag. Glyph resolution belongs to the renderer; the kebab-case
/// key (`Icon::TrendingUp` → `"trending-up"`) is the contract with it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    Activity,
    BarChart,
    Brain,
    Calculator,
    ClipboardList,
    Clock,
    Coffee,
    Eye,
    Gauge,
    Hand,
    Info,
    Layers,
    LineChart,
    Package,
    Ruler,
    Scale,
    Shuffle,
    Table,
    Thermometer,
    Timer,
    TrendingUp,
    Zap,
}

impl Icon {
    /// Stable string key consumed by the icon renderer.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Text fallback used when no icon font is loaded.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Activity => "🏃",
            Self::BarChart => "📊",
            Self::Brain => "🧠",
            Self::Calculator => "🧮",
            Self::ClipboardList => "📋",
            Self::Clock => "🕒",
            Self::Coffee => "☕",
            Self::Eye => "👁",
            Self::Gauge => "🎚",
            Self::Hand => "✋",
            Self::Info => "ℹ",
            Self::Layers => "🗂",
            Self::LineChart => "📉",
            Self::Package => "📦",
            Self::Ruler => "📏",
            Self::Scale => "⚖",
            Self::Shuffle => "🔀",
            Self::Table => "🗒",
            Self::Thermometer => "🌡",
            Self::Timer => "⏱",
            Self::TrendingUp => "📈",
            Self::Zap => "⚡",
        }
    }
}
