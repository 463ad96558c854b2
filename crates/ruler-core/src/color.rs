use crate::types::{Result, RulerError};
use std::fmt;
use std::str::FromStr;

/// A 32-bit colour packed as `0xAARRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const TRANSPARENT: Argb = Argb(0);

    /// Theme accent used until the user picks a colour
    pub const DEFAULT_ACCENT: Argb = Argb(0xFFFF_4081);

    pub const fn from_channels(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Argb(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same colour with the alpha channel replaced
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Argb::from_channels(alpha, self.red(), self.green(), self.blue())
    }

    /// Same colour, fully opaque. Picked colours are always stored this way.
    pub const fn opaque(self) -> Self {
        self.with_alpha(255)
    }

    /// A fully opaque colour with uniformly random channels
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Argb::from_channels(255, rng.r#gen(), rng.r#gen(), rng.r#gen())
    }

    /// A random opaque colour from the thread-local generator
    pub fn random_opaque() -> Self {
        Self::random(&mut rand::thread_rng())
    }

    /// Channels as `[r, g, b, a]`, the order most toolkits want
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Lowercase `#rrggbb` without alpha, as used by SVG
    pub fn to_rgb_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }
}

impl Default for Argb {
    fn default() -> Self {
        Argb::DEFAULT_ACCENT
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Argb(value)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Argb {
    type Err = RulerError;

    /// Accepts `#RRGGBB` (opaque) or `#AARRGGBB`; the leading `#` is optional
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| RulerError::InvalidColor(format!("not a hex colour: {s:?}")))?;

        match hex.len() {
            6 => Ok(Argb(0xFF00_0000 | value)),
            8 => Ok(Argb(value)),
            _ => Err(RulerError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {s:?}"
            ))),
        }
    }
}
