use std::fmt;

use crate::error::Error;

pub const TWIPS_PER_POINT: f64 = 20.0;
pub const TWIPS_PER_INCH: f64 = 1440.0;
pub const EMU_PER_TWIP: f64 = 635.0;
/// Height above baseline Word assumes for a single line when `w:lineRule="auto"`.
pub const LINE_BASELINE_TWIPS: i64 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Twip,
    Point,
    Inch,
    Centimeter,
    Millimeter,
    Emu,
}

impl LengthUnit {
    fn twips_per_unit(self) -> f64 {
        match self {
            LengthUnit::Twip => 1.0,
            LengthUnit::Point => TWIPS_PER_POINT,
            LengthUnit::Inch => TWIPS_PER_INCH,
            LengthUnit::Centimeter => TWIPS_PER_INCH / 2.54,
            LengthUnit::Millimeter => TWIPS_PER_INCH / 25.4,
            LengthUnit::Emu => 1.0 / EMU_PER_TWIP,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Twip => "",
            LengthUnit::Point => "pt",
            LengthUnit::Inch => "in",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Emu => "emu",
        }
    }
}

/// A physical length, a percentage of the available extent, or `auto`.
///
/// Only `Absolute` converts to physical units; `Percent` and `Auto` yield `None`
/// from every `to_*` conversion.
#[derive(Debug, Clone, Copy)]
pub enum Length {
    Absolute(f64, LengthUnit),
    Percent(f64),
    Auto,
}

impl Length {
    pub fn from_twips(twips: i64) -> Self {
        Length::Absolute(twips as f64, LengthUnit::Twip)
    }

    pub fn points(pt: f64) -> Self {
        Length::Absolute(pt, LengthUnit::Point)
    }

    pub fn from_emu(emu: i64) -> Self {
        Length::Absolute(emu as f64, LengthUnit::Emu)
    }

    pub fn percent(pct: f64) -> Self {
        Length::Percent(pct)
    }

    pub fn to_unit(&self, unit: LengthUnit) -> Option<f64> {
        match *self {
            Length::Absolute(value, from) => {
                Some(value * from.twips_per_unit() / unit.twips_per_unit())
            }
            Length::Percent(_) | Length::Auto => None,
        }
    }

    pub fn to_twips(&self) -> Option<i64> {
        self.to_unit(LengthUnit::Twip).map(|t| t.round() as i64)
    }

    pub fn to_points(&self) -> Option<f64> {
        self.to_unit(LengthUnit::Point)
    }

    pub fn to_emu(&self) -> Option<i64> {
        self.to_unit(LengthUnit::Emu).map(|e| e.round() as i64)
    }

    pub fn as_percent(&self) -> Option<f64> {
        match *self {
            Length::Percent(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Length::Auto)
    }

    /// Zero absolute or zero percent. `Auto` is never zero.
    pub fn is_zero(&self) -> bool {
        match *self {
            Length::Absolute(v, _) | Length::Percent(v) => v == 0.0,
            Length::Auto => false,
        }
    }

    /// Parse `auto`, `50%`, `12pt`, `1in`, `2.5cm`, `10mm`, `914400emu` or a bare
    /// number (twips).
    pub fn parse(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Length::Auto);
        }
        let invalid = || Error::InvalidLength(s.to_string());
        if let Some(pct) = s.strip_suffix('%') {
            return pct.trim().parse::<f64>().map(Length::Percent).map_err(|_| invalid());
        }
        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (number, suffix) = s.split_at(split);
        let unit = match suffix {
            "" | "tw" | "dxa" => LengthUnit::Twip,
            "pt" => LengthUnit::Point,
            "in" => LengthUnit::Inch,
            "cm" => LengthUnit::Centimeter,
            "mm" => LengthUnit::Millimeter,
            "emu" => LengthUnit::Emu,
            _ => return Err(invalid()),
        };
        let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(Length::Absolute(value, unit))
    }

    /// Like [`Length::parse`] but a malformed literal is logged and dropped.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match Length::parse(s) {
            Ok(len) => Some(len),
            Err(e) => {
                log::warn!("{e}; ignoring");
                None
            }
        }
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Length::Auto, Length::Auto) => true,
            (Length::Percent(a), Length::Percent(b)) => (a - b).abs() < 1e-9,
            (Length::Absolute(..), Length::Absolute(..)) => {
                match (self.to_unit(LengthUnit::Twip), other.to_unit(LengthUnit::Twip)) {
                    (Some(a), Some(b)) => (a - b).abs() < 1e-6,
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Absolute(v, unit) => write!(f, "{}{}", v, unit.suffix()),
            Length::Percent(p) => write!(f, "{p}%"),
            Length::Auto => f.write_str("auto"),
        }
    }
}
