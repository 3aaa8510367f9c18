mod common;

use docxide_wml::{Color, Error, HighlightColor, ThemeColor};

#[test]
fn hex_is_normalized() {
    assert_eq!(Color::hex("abc").unwrap(), Color::hex("AABBCC").unwrap());
    assert_eq!(Color::hex("#ff0000").unwrap(), Color::rgb(0xFF, 0, 0));
    assert_eq!(Color::rgb(0x12, 0xab, 0xff).to_hex_or_name().as_deref(), Some("12ABFF"));
    assert_eq!(Color::hex("abc").unwrap().to_string(), "AABBCC");
    assert!(matches!(Color::hex("12345"), Err(Error::InvalidColor(_))));
    assert!(matches!(Color::hex("GGGGGG"), Err(Error::InvalidColor(_))));
}

#[test]
fn system_color_falls_back_to_literal() {
    let color = Color::system("windowText", Color::hex("112233").unwrap()).unwrap();
    assert!(color.is_specified());
    assert_eq!(color.to_hex_or_name().as_deref(), Some("windowText"));
    assert_eq!(color.last_color(), &Color::rgb(0x11, 0x22, 0x33));
    assert_eq!(color.to_string(), "windowText");
}

#[test]
fn system_color_needs_literal_fallback() {
    let theme = Color::Theme(ThemeColor::Accent1);
    assert!(Color::system("highlight", theme).is_err());
    assert!(Color::system("highlight", Color::Unspecified).is_err());
    assert!(Color::system("highlight", Color::Highlight(HighlightColor::Yellow)).is_ok());
}

#[test]
fn unspecified_writes_nothing() {
    let color = Color::default();
    assert!(!color.is_specified());
    assert_eq!(color.to_hex_or_name(), None);
    assert_eq!(color.to_rgb(), None);
    assert_eq!(color.to_string(), "auto");
}

#[test]
fn literal_colors_convert_to_rgb() {
    assert_eq!(Color::hex("FF8000").unwrap().to_rgb(), Some([255, 128, 0]));
    assert_eq!(
        Color::Highlight(HighlightColor::DarkBlue).to_rgb(),
        Some([0, 0, 128])
    );
    assert_eq!(
        Color::Highlight(HighlightColor::LightGray).to_hex().as_deref(),
        Some("C0C0C0")
    );
}

#[test]
fn every_hex_spelling_is_one_color() {
    let spellings = ["abc", "#ABC", "aabbcc", "#AaBbCc"];
    for literal in spellings {
        let color = Color::hex(literal).unwrap();
        assert_eq!(color, Color::rgb(0xAA, 0xBB, 0xCC), "{literal}");
        assert_eq!(color, Color::parse(literal));
        let Color::Hex(hex) = color else {
            panic!("{literal} is not a literal color");
        };
        assert_eq!(hex.rgb(), [0xAA, 0xBB, 0xCC]);
        assert_eq!(hex.to_string(), "AABBCC");
    }
    for bad in ["ab", "abcd", "#", ""] {
        assert!(Color::hex(bad).is_err(), "{bad}");
    }
}

#[test]
#[should_panic]
fn theme_color_has_no_rgb() {
    let _ = Color::Theme(ThemeColor::Accent2).to_rgb();
}

#[test]
fn lenient_parse() {
    common::init_logger();
    assert_eq!(Color::parse("auto"), Color::Unspecified);
    assert_eq!(Color::parse(""), Color::Unspecified);
    assert_eq!(Color::parse("1f497d"), Color::hex("1F497D").unwrap());
    assert_eq!(Color::parse("#abc"), Color::rgb(0xAA, 0xBB, 0xCC));
    assert_eq!(Color::parse("yellow"), Color::Highlight(HighlightColor::Yellow));
    assert_eq!(Color::parse("darkRed"), Color::Highlight(HighlightColor::DarkRed));
    assert_eq!(Color::parse("accent3"), Color::Theme(ThemeColor::Accent3));
    assert_eq!(Color::parse("text1"), Color::Theme(ThemeColor::Dark1));
    assert_eq!(Color::parse("background1"), Color::Theme(ThemeColor::Light1));
    assert_eq!(Color::parse("not-a-color"), Color::Unspecified);
}

#[test]
fn symbolic_names_round_trip() {
    for name in ["black", "darkCyan", "lightGray", "white"] {
        let h = HighlightColor::from_name(name).unwrap();
        assert_eq!(h.name(), name);
    }
    for name in ["dark1", "accent6", "hyperlink", "followedHyperlink"] {
        let t = ThemeColor::from_name(name).unwrap();
        assert_eq!(t.name(), name);
    }
    assert_eq!(HighlightColor::from_name("orange"), None);
}
