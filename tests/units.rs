mod common;

use docxide_wml::units::{EMU_PER_TWIP, TWIPS_PER_INCH};
use docxide_wml::{Error, Length, LengthUnit};

#[test]
fn twips_survive_conversion() {
    for twips in [0, 1, 240, 720, 1440, 12240, -360] {
        assert_eq!(Length::from_twips(twips).to_twips(), Some(twips));
    }
}

#[test]
fn unit_conversions() {
    let inch = Length::Absolute(1.0, LengthUnit::Inch);
    assert_eq!(inch.to_twips(), Some(TWIPS_PER_INCH as i64));
    assert_eq!(inch.to_points(), Some(72.0));
    assert_eq!(inch.to_emu(), Some(914_400));

    assert_eq!(Length::points(12.0).to_twips(), Some(240));
    assert_eq!(Length::from_emu(635).to_twips(), Some(1));
    assert_eq!(Length::from_twips(1).to_emu(), Some(EMU_PER_TWIP as i64));

    let cm = Length::Absolute(2.54, LengthUnit::Centimeter);
    assert_eq!(cm.to_twips(), Some(1440));
    let mm = Length::Absolute(25.4, LengthUnit::Millimeter);
    assert_eq!(mm.to_twips(), Some(1440));
}

#[test]
fn auto_and_percent_have_no_physical_size() {
    assert_eq!(Length::Auto.to_twips(), None);
    assert_eq!(Length::Auto.to_points(), None);
    assert_eq!(Length::percent(50.0).to_twips(), None);
    assert_eq!(Length::percent(50.0).as_percent(), Some(50.0));
    assert!(Length::Auto.is_auto());
    assert!(!Length::Auto.is_zero());
    assert!(Length::from_twips(0).is_zero());
    assert!(Length::percent(0.0).is_zero());
}

#[test]
fn equality_compares_physical_size() {
    assert_eq!(Length::points(1.0), Length::from_twips(20));
    assert_eq!(Length::Absolute(1.0, LengthUnit::Inch), Length::points(72.0));
    assert_ne!(Length::percent(100.0), Length::from_twips(100));
    assert_ne!(Length::Auto, Length::from_twips(0));
}

#[test]
fn parse_literals() {
    assert_eq!(Length::parse("auto").unwrap(), Length::Auto);
    assert_eq!(Length::parse("50%").unwrap(), Length::percent(50.0));
    assert_eq!(Length::parse("12pt").unwrap(), Length::points(12.0));
    assert_eq!(Length::parse("1in").unwrap(), Length::from_twips(1440));
    assert_eq!(Length::parse("2.54cm").unwrap(), Length::from_twips(1440));
    assert_eq!(Length::parse("914400emu").unwrap(), Length::from_twips(1440));
    assert_eq!(Length::parse(" 720 ").unwrap(), Length::from_twips(720));
    assert_eq!(Length::parse("720dxa").unwrap(), Length::from_twips(720));
}

#[test]
fn parse_rejects_garbage() {
    assert!(matches!(Length::parse("12px"), Err(Error::InvalidLength(_))));
    assert!(matches!(Length::parse("abc"), Err(Error::InvalidLength(_))));
    assert!(matches!(Length::parse(""), Err(Error::InvalidLength(_))));
    common::init_logger();
    assert_eq!(Length::parse_lenient("wide"), None);
    assert_eq!(Length::parse_lenient("36pt"), Some(Length::points(36.0)));
}

#[test]
fn display_keeps_unit() {
    assert_eq!(Length::points(12.0).to_string(), "12pt");
    assert_eq!(Length::from_twips(720).to_string(), "720");
    assert_eq!(Length::percent(25.0).to_string(), "25%");
    assert_eq!(Length::Auto.to_string(), "auto");
}
