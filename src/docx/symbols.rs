//! Glyph tables for the symbol fonts `w:sym` refers to.
//!
//! Keys are the low byte of `w:char` (Word stores `F0xx`, the private-use alias
//! of code `xx`); values are the Unicode scalar the glyph stands for.

use phf::phf_map;

/// Unicode scalar for `code` (hex, `F0B7` or `B7`) in `font`. Unknown fonts and
/// unmapped codes yield `None`.
pub fn lookup(font: &str, code: &str) -> Option<char> {
    let table = table_for(font)?;
    let code = code.trim();
    if !code.is_ascii() || code.is_empty() {
        return None;
    }
    let low = &code[code.len().saturating_sub(2)..];
    let byte = u8::from_str_radix(low, 16).ok()?;
    table.get(&byte).copied()
}

fn table_for(font: &str) -> Option<&'static phf::Map<u8, char>> {
    let normalized: String = font
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    match normalized.as_str() {
        "symbol" => Some(&SYMBOL),
        "wingdings" => Some(&WINGDINGS),
        "webdings" => Some(&WEBDINGS),
        "zapfdingbats" | "itczapfdingbats" => Some(&ZAPF_DINGBATS),
        _ => None,
    }
}

static SYMBOL: phf::Map<u8, char> = phf_map! {
    0x20u8 => ' ',
    0x21u8 => '!',
    0x22u8 => '\u{2200}',
    0x23u8 => '#',
    0x24u8 => '\u{2203}',
    0x25u8 => '%',
    0x26u8 => '&',
    0x27u8 => '\u{220B}',
    0x28u8 => '(',
    0x29u8 => ')',
    0x2Au8 => '\u{2217}',
    0x2Bu8 => '+',
    0x2Cu8 => ',',
    0x2Du8 => '\u{2212}',
    0x2Eu8 => '.',
    0x2Fu8 => '/',
    0x30u8 => '0',
    0x31u8 => '1',
    0x32u8 => '2',
    0x33u8 => '3',
    0x34u8 => '4',
    0x35u8 => '5',
    0x36u8 => '6',
    0x37u8 => '7',
    0x38u8 => '8',
    0x39u8 => '9',
    0x3Au8 => ':',
    0x3Bu8 => ';',
    0x3Cu8 => '<',
    0x3Du8 => '=',
    0x3Eu8 => '>',
    0x3Fu8 => '?',
    0x40u8 => '\u{2245}',
    0x41u8 => '\u{391}',
    0x42u8 => '\u{392}',
    0x43u8 => '\u{3A7}',
    0x44u8 => '\u{394}',
    0x45u8 => '\u{395}',
    0x46u8 => '\u{3A6}',
    0x47u8 => '\u{393}',
    0x48u8 => '\u{397}',
    0x49u8 => '\u{399}',
    0x4Au8 => '\u{3D1}',
    0x4Bu8 => '\u{39A}',
    0x4Cu8 => '\u{39B}',
    0x4Du8 => '\u{39C}',
    0x4Eu8 => '\u{39D}',
    0x4Fu8 => '\u{39F}',
    0x50u8 => '\u{3A0}',
    0x51u8 => '\u{398}',
    0x52u8 => '\u{3A1}',
    0x53u8 => '\u{3A3}',
    0x54u8 => '\u{3A4}',
    0x55u8 => '\u{3A5}',
    0x56u8 => '\u{3C2}',
    0x57u8 => '\u{3A9}',
    0x58u8 => '\u{39E}',
    0x59u8 => '\u{3A8}',
    0x5Au8 => '\u{396}',
    0x5Bu8 => '[',
    0x5Cu8 => '\u{2234}',
    0x5Du8 => ']',
    0x5Eu8 => '\u{22A5}',
    0x5Fu8 => '_',
    0x60u8 => '\u{203E}',
    0x61u8 => '\u{3B1}',
    0x62u8 => '\u{3B2}',
    0x63u8 => '\u{3C7}',
    0x64u8 => '\u{3B4}',
    0x65u8 => '\u{3B5}',
    0x66u8 => '\u{3C6}',
    0x67u8 => '\u{3B3}',
    0x68u8 => '\u{3B7}',
    0x69u8 => '\u{3B9}',
    0x6Au8 => '\u{3D5}',
    0x6Bu8 => '\u{3BA}',
    0x6Cu8 => '\u{3BB}',
    0x6Du8 => '\u{3BC}',
    0x6Eu8 => '\u{3BD}',
    0x6Fu8 => '\u{3BF}',
    0x70u8 => '\u{3C0}',
    0x71u8 => '\u{3B8}',
    0x72u8 => '\u{3C1}',
    0x73u8 => '\u{3C3}',
    0x74u8 => '\u{3C4}',
    0x75u8 => '\u{3C5}',
    0x76u8 => '\u{3D6}',
    0x77u8 => '\u{3C9}',
    0x78u8 => '\u{3BE}',
    0x79u8 => '\u{3C8}',
    0x7Au8 => '\u{3B6}',
    0x7Bu8 => '{',
    0x7Cu8 => '|',
    0x7Du8 => '}',
    0x7Eu8 => '\u{223C}',
    0xA1u8 => '\u{3D2}',
    0xA2u8 => '\u{2032}',
    0xA3u8 => '\u{2264}',
    0xA4u8 => '\u{2044}',
    0xA5u8 => '\u{221E}',
    0xA6u8 => '\u{192}',
    0xA7u8 => '\u{2663}',
    0xA8u8 => '\u{2666}',
    0xA9u8 => '\u{2665}',
    0xAAu8 => '\u{2660}',
    0xABu8 => '\u{2194}',
    0xACu8 => '\u{2190}',
    0xADu8 => '\u{2191}',
    0xAEu8 => '\u{2192}',
    0xAFu8 => '\u{2193}',
    0xB0u8 => '\u{B0}',
    0xB1u8 => '\u{B1}',
    0xB2u8 => '\u{2033}',
    0xB3u8 => '\u{2265}',
    0xB4u8 => '\u{D7}',
    0xB5u8 => '\u{221D}',
    0xB6u8 => '\u{2202}',
    0xB7u8 => '\u{2022}',
    0xB8u8 => '\u{F7}',
    0xB9u8 => '\u{2260}',
    0xBAu8 => '\u{2261}',
    0xBBu8 => '\u{2248}',
    0xBCu8 => '\u{2026}',
    0xBDu8 => '\u{23D0}',
    0xBEu8 => '\u{23AF}',
    0xBFu8 => '\u{21B5}',
    0xC0u8 => '\u{2135}',
    0xC1u8 => '\u{2111}',
    0xC2u8 => '\u{211C}',
    0xC3u8 => '\u{2118}',
    0xC4u8 => '\u{2297}',
    0xC5u8 => '\u{2295}',
    0xC6u8 => '\u{2205}',
    0xC7u8 => '\u{2229}',
    0xC8u8 => '\u{222A}',
    0xC9u8 => '\u{2283}',
    0xCAu8 => '\u{2287}',
    0xCBu8 => '\u{2284}',
    0xCCu8 => '\u{2282}',
    0xCDu8 => '\u{2286}',
    0xCEu8 => '\u{2208}',
    0xCFu8 => '\u{2209}',
    0xD0u8 => '\u{2220}',
    0xD1u8 => '\u{2207}',
    0xD2u8 => '\u{AE}',
    0xD3u8 => '\u{A9}',
    0xD4u8 => '\u{2122}',
    0xD5u8 => '\u{220F}',
    0xD6u8 => '\u{221A}',
    0xD7u8 => '\u{22C5}',
    0xD8u8 => '\u{AC}',
    0xD9u8 => '\u{2227}',
    0xDAu8 => '\u{2228}',
    0xDBu8 => '\u{21D4}',
    0xDCu8 => '\u{21D0}',
    0xDDu8 => '\u{21D1}',
    0xDEu8 => '\u{21D2}',
    0xDFu8 => '\u{21D3}',
    0xE0u8 => '\u{25CA}',
    0xE1u8 => '\u{2329}',
    0xE2u8 => '\u{AE}',
    0xE3u8 => '\u{A9}',
    0xE4u8 => '\u{2122}',
    0xE5u8 => '\u{2211}',
    0xF1u8 => '\u{232A}',
    0xF2u8 => '\u{222B}',
};

static WINGDINGS: phf::Map<u8, char> = phf_map! {
    0x20u8 => ' ',
    0x21u8 => '\u{1F589}',
    0x22u8 => '\u{2702}',
    0x23u8 => '\u{2701}',
    0x24u8 => '\u{1F453}',
    0x25u8 => '\u{1F56D}',
    0x26u8 => '\u{1F56E}',
    0x27u8 => '\u{1F56F}',
    0x28u8 => '\u{1F57F}',
    0x29u8 => '\u{2706}',
    0x2Au8 => '\u{1F582}',
    0x2Bu8 => '\u{1F583}',
    0x2Cu8 => '\u{1F4EA}',
    0x2Du8 => '\u{1F4EB}',
    0x2Eu8 => '\u{1F4EC}',
    0x2Fu8 => '\u{1F4ED}',
    0x30u8 => '\u{1F4C1}',
    0x31u8 => '\u{1F4C2}',
    0x32u8 => '\u{1F4C4}',
    0x33u8 => '\u{1F5CF}',
    0x34u8 => '\u{1F5D0}',
    0x35u8 => '\u{1F5C4}',
    0x36u8 => '\u{231B}',
    0x37u8 => '\u{1F5AE}',
    0x38u8 => '\u{1F5B0}',
    0x39u8 => '\u{1F5B2}',
    0x3Au8 => '\u{1F5B3}',
    0x3Bu8 => '\u{1F5B4}',
    0x3Cu8 => '\u{1F5AB}',
    0x3Du8 => '\u{1F5AC}',
    0x3Eu8 => '\u{2707}',
    0x3Fu8 => '\u{270D}',
    0x40u8 => '\u{1F58E}',
    0x41u8 => '\u{270C}',
    0x42u8 => '\u{1F44C}',
    0x43u8 => '\u{1F44D}',
    0x44u8 => '\u{1F44E}',
    0x45u8 => '\u{261C}',
    0x46u8 => '\u{261E}',
    0x47u8 => '\u{261D}',
    0x48u8 => '\u{261F}',
    0x49u8 => '\u{1F590}',
    0x4Au8 => '\u{263A}',
    0x4Bu8 => '\u{1F610}',
    0x4Cu8 => '\u{2639}',
    0x4Du8 => '\u{1F4A3}',
    0x4Eu8 => '\u{2620}',
    0x4Fu8 => '\u{1F3F3}',
    0x50u8 => '\u{1F3F1}',
    0x51u8 => '\u{2708}',
    0x52u8 => '\u{263C}',
    0x53u8 => '\u{1F4A7}',
    0x54u8 => '\u{2744}',
    0x55u8 => '\u{1F546}',
    0x56u8 => '\u{271E}',
    0x57u8 => '\u{1F548}',
    0x58u8 => '\u{2720}',
    0x59u8 => '\u{2721}',
    0x5Au8 => '\u{262A}',
    0x5Bu8 => '\u{262F}',
    0x5Cu8 => '\u{950}',
    0x5Du8 => '\u{2638}',
    0x5Eu8 => '\u{2648}',
    0x5Fu8 => '\u{2649}',
    0x60u8 => '\u{264A}',
    0x61u8 => '\u{264B}',
    0x62u8 => '\u{264C}',
    0x63u8 => '\u{264D}',
    0x64u8 => '\u{264E}',
    0x65u8 => '\u{264F}',
    0x66u8 => '\u{2650}',
    0x67u8 => '\u{2651}',
    0x68u8 => '\u{2652}',
    0x69u8 => '\u{2653}',
    0x6Au8 => '\u{1F670}',
    0x6Bu8 => '\u{1F675}',
    0x6Cu8 => '\u{25CF}',
    0x6Du8 => '\u{1F53E}',
    0x6Eu8 => '\u{25A0}',
    0x6Fu8 => '\u{25A1}',
    0x70u8 => '\u{1F790}',
    0x71u8 => '\u{2751}',
    0x72u8 => '\u{2752}',
    0x73u8 => '\u{2B27}',
    0x74u8 => '\u{29EB}',
    0x75u8 => '\u{25C6}',
    0x76u8 => '\u{2756}',
    0x77u8 => '\u{2B25}',
    0x78u8 => '\u{2327}',
    0x79u8 => '\u{2BB9}',
    0x7Au8 => '\u{2318}',
    0x7Bu8 => '\u{1F3F5}',
    0x7Cu8 => '\u{1F3F6}',
    0x7Du8 => '\u{1F676}',
    0x7Eu8 => '\u{1F677}',
    0x80u8 => '\u{24EA}',
    0x81u8 => '\u{2460}',
    0x82u8 => '\u{2461}',
    0x83u8 => '\u{2462}',
    0x84u8 => '\u{2463}',
    0x85u8 => '\u{2464}',
    0x86u8 => '\u{2465}',
    0x87u8 => '\u{2466}',
    0x88u8 => '\u{2467}',
    0x89u8 => '\u{2468}',
    0x8Au8 => '\u{2469}',
    0x8Bu8 => '\u{24FF}',
    0x8Cu8 => '\u{2776}',
    0x8Du8 => '\u{2777}',
    0x8Eu8 => '\u{2778}',
    0x8Fu8 => '\u{2779}',
    0x90u8 => '\u{277A}',
    0x91u8 => '\u{277B}',
    0x92u8 => '\u{277C}',
    0x93u8 => '\u{277D}',
    0x94u8 => '\u{277E}',
    0x95u8 => '\u{277F}',
    0x9Eu8 => '\u{B7}',
    0x9Fu8 => '\u{2022}',
    0xA0u8 => '\u{25AA}',
    0xA1u8 => '\u{25CB}',
    0xA2u8 => '\u{1F786}',
    0xA3u8 => '\u{1F788}',
    0xA4u8 => '\u{25C9}',
    0xA5u8 => '\u{25CE}',
    0xA6u8 => '\u{1F53F}',
    0xA7u8 => '\u{25AA}',
    0xA8u8 => '\u{25FB}',
    0xA9u8 => '\u{1F7C2}',
    0xAAu8 => '\u{2726}',
    0xABu8 => '\u{2605}',
    0xACu8 => '\u{2736}',
    0xADu8 => '\u{2734}',
    0xAEu8 => '\u{2739}',
    0xAFu8 => '\u{2735}',
    0xB0u8 => '\u{2BD0}',
    0xB1u8 => '\u{2316}',
    0xB2u8 => '\u{27E1}',
    0xB3u8 => '\u{2311}',
    0xB4u8 => '\u{2BD1}',
    0xB5u8 => '\u{272A}',
    0xB6u8 => '\u{2730}',
    0xB7u8 => '\u{1F550}',
    0xB8u8 => '\u{1F551}',
    0xB9u8 => '\u{1F552}',
    0xBAu8 => '\u{1F553}',
    0xBBu8 => '\u{1F554}',
    0xBCu8 => '\u{1F555}',
    0xBDu8 => '\u{1F556}',
    0xBEu8 => '\u{1F557}',
    0xBFu8 => '\u{1F558}',
    0xC0u8 => '\u{1F559}',
    0xC1u8 => '\u{1F55A}',
    0xC2u8 => '\u{1F55B}',
    0xD5u8 => '\u{232B}',
    0xD6u8 => '\u{2326}',
    0xD8u8 => '\u{27A2}',
    0xE8u8 => '\u{2794}',
    0xEFu8 => '\u{21E6}',
    0xF0u8 => '\u{21E8}',
    0xF1u8 => '\u{21E7}',
    0xF2u8 => '\u{21E9}',
    0xF3u8 => '\u{2B04}',
    0xF4u8 => '\u{21F3}',
    0xFBu8 => '\u{2717}',
    0xFCu8 => '\u{2714}',
    0xFDu8 => '\u{2612}',
    0xFEu8 => '\u{2611}',
};

static WEBDINGS: phf::Map<u8, char> = phf_map! {
    0x20u8 => ' ',
    0x21u8 => '\u{1F577}',
    0x22u8 => '\u{1F578}',
    0x23u8 => '\u{1F572}',
    0x24u8 => '\u{1F576}',
    0x25u8 => '\u{1F3C6}',
    0x26u8 => '\u{1F396}',
    0x27u8 => '\u{1F587}',
    0x28u8 => '\u{1F5E8}',
    0x29u8 => '\u{1F5E9}',
    0x2Au8 => '\u{1F5F0}',
    0x2Bu8 => '\u{1F5F1}',
    0x2Cu8 => '\u{1F336}',
    0x2Du8 => '\u{1F397}',
    0x2Eu8 => '\u{1F67E}',
    0x2Fu8 => '\u{1F67C}',
    0x30u8 => '\u{1F5D5}',
    0x31u8 => '\u{1F5D6}',
    0x32u8 => '\u{1F5D7}',
    0x33u8 => '\u{23F4}',
    0x34u8 => '\u{23F5}',
    0x35u8 => '\u{23F6}',
    0x36u8 => '\u{23F7}',
    0x37u8 => '\u{23EA}',
    0x38u8 => '\u{23E9}',
    0x39u8 => '\u{23EE}',
    0x3Au8 => '\u{23ED}',
    0x3Bu8 => '\u{23F8}',
    0x3Cu8 => '\u{23F9}',
    0x3Du8 => '\u{23FA}',
    0x3Eu8 => '\u{1F5DA}',
    0x3Fu8 => '\u{1F5F3}',
};

static ZAPF_DINGBATS: phf::Map<u8, char> = phf_map! {
    0x20u8 => ' ',
    0x21u8 => '\u{2701}',
    0x22u8 => '\u{2702}',
    0x23u8 => '\u{2703}',
    0x24u8 => '\u{2704}',
    0x25u8 => '\u{260E}',
    0x26u8 => '\u{2706}',
    0x27u8 => '\u{2707}',
    0x28u8 => '\u{2708}',
    0x29u8 => '\u{2709}',
    0x2Au8 => '\u{261B}',
    0x2Bu8 => '\u{261E}',
    0x2Cu8 => '\u{270C}',
    0x2Du8 => '\u{270D}',
    0x2Eu8 => '\u{270E}',
    0x2Fu8 => '\u{270F}',
    0x30u8 => '\u{2710}',
    0x31u8 => '\u{2711}',
    0x32u8 => '\u{2712}',
    0x33u8 => '\u{2713}',
    0x34u8 => '\u{2714}',
    0x35u8 => '\u{2715}',
    0x36u8 => '\u{2716}',
    0x37u8 => '\u{2717}',
    0x38u8 => '\u{2718}',
    0x39u8 => '\u{2719}',
    0x3Au8 => '\u{271A}',
    0x3Bu8 => '\u{271B}',
    0x3Cu8 => '\u{271C}',
    0x3Du8 => '\u{271D}',
    0x3Eu8 => '\u{271E}',
    0x3Fu8 => '\u{271F}',
    0x40u8 => '\u{2720}',
    0x41u8 => '\u{2721}',
    0x42u8 => '\u{2722}',
    0x43u8 => '\u{2723}',
    0x44u8 => '\u{2724}',
    0x45u8 => '\u{2725}',
    0x46u8 => '\u{2726}',
    0x47u8 => '\u{2727}',
    0x48u8 => '\u{2605}',
    0x49u8 => '\u{2729}',
    0x4Au8 => '\u{272A}',
    0x4Bu8 => '\u{272B}',
    0x4Cu8 => '\u{272C}',
    0x4Du8 => '\u{272D}',
    0x4Eu8 => '\u{272E}',
    0x4Fu8 => '\u{272F}',
    0x50u8 => '\u{2730}',
    0x51u8 => '\u{2731}',
    0x52u8 => '\u{2732}',
    0x53u8 => '\u{2733}',
    0x54u8 => '\u{2734}',
    0x55u8 => '\u{2735}',
    0x56u8 => '\u{2736}',
    0x57u8 => '\u{2737}',
    0x58u8 => '\u{2738}',
    0x59u8 => '\u{2739}',
    0x5Au8 => '\u{273A}',
    0x5Bu8 => '\u{273B}',
    0x5Cu8 => '\u{273C}',
    0x5Du8 => '\u{273D}',
    0x5Eu8 => '\u{273E}',
    0x5Fu8 => '\u{273F}',
    0x60u8 => '\u{2740}',
    0x61u8 => '\u{2741}',
    0x62u8 => '\u{2742}',
    0x63u8 => '\u{2743}',
    0x64u8 => '\u{2744}',
    0x65u8 => '\u{2745}',
    0x66u8 => '\u{2746}',
    0x67u8 => '\u{2747}',
    0x68u8 => '\u{2748}',
    0x69u8 => '\u{2749}',
    0x6Au8 => '\u{274A}',
    0x6Bu8 => '\u{274B}',
    0x6Cu8 => '\u{25CF}',
    0x6Du8 => '\u{274D}',
    0x6Eu8 => '\u{25A0}',
    0x6Fu8 => '\u{274F}',
    0x70u8 => '\u{2750}',
    0x71u8 => '\u{2751}',
    0x72u8 => '\u{2752}',
    0x73u8 => '\u{25B2}',
    0x74u8 => '\u{25BC}',
    0x75u8 => '\u{25C6}',
    0x76u8 => '\u{2756}',
    0x77u8 => '\u{25D7}',
    0x78u8 => '\u{2758}',
    0x79u8 => '\u{2759}',
    0x7Au8 => '\u{275A}',
    0x7Bu8 => '\u{275B}',
    0x7Cu8 => '\u{275C}',
    0x7Du8 => '\u{275D}',
    0x7Eu8 => '\u{275E}',
    0xA1u8 => '\u{2761}',
    0xA2u8 => '\u{2762}',
    0xA3u8 => '\u{2763}',
    0xA4u8 => '\u{2764}',
    0xA5u8 => '\u{2765}',
    0xA6u8 => '\u{2766}',
    0xA7u8 => '\u{2767}',
    0xA8u8 => '\u{2663}',
    0xA9u8 => '\u{2666}',
    0xAAu8 => '\u{2665}',
    0xABu8 => '\u{2660}',
    0xACu8 => '\u{2460}',
    0xADu8 => '\u{2461}',
    0xAEu8 => '\u{2462}',
    0xAFu8 => '\u{2463}',
    0xB0u8 => '\u{2464}',
    0xB1u8 => '\u{2465}',
    0xB2u8 => '\u{2466}',
    0xB3u8 => '\u{2467}',
    0xB4u8 => '\u{2468}',
    0xB5u8 => '\u{2469}',
    0xB6u8 => '\u{2776}',
    0xB7u8 => '\u{2777}',
    0xB8u8 => '\u{2778}',
    0xB9u8 => '\u{2779}',
    0xBAu8 => '\u{277A}',
    0xBBu8 => '\u{277B}',
    0xBCu8 => '\u{277C}',
    0xBDu8 => '\u{277D}',
    0xBEu8 => '\u{277E}',
    0xBFu8 => '\u{277F}',
    0xC0u8 => '\u{2780}',
    0xC1u8 => '\u{2781}',
    0xC2u8 => '\u{2782}',
    0xC3u8 => '\u{2783}',
    0xC4u8 => '\u{2784}',
    0xC5u8 => '\u{2785}',
    0xC6u8 => '\u{2786}',
    0xC7u8 => '\u{2787}',
    0xC8u8 => '\u{2788}',
    0xC9u8 => '\u{2789}',
    0xCAu8 => '\u{278A}',
    0xCBu8 => '\u{278B}',
    0xCCu8 => '\u{278C}',
    0xCDu8 => '\u{278D}',
    0xCEu8 => '\u{278E}',
    0xCFu8 => '\u{278F}',
    0xD0u8 => '\u{2790}',
    0xD1u8 => '\u{2791}',
    0xD2u8 => '\u{2792}',
    0xD3u8 => '\u{2793}',
    0xD4u8 => '\u{2794}',
    0xD5u8 => '\u{2192}',
    0xD6u8 => '\u{2194}',
    0xD7u8 => '\u{2195}',
    0xD8u8 => '\u{2798}',
    0xD9u8 => '\u{2799}',
    0xDAu8 => '\u{279A}',
    0xDBu8 => '\u{279B}',
    0xDCu8 => '\u{279C}',
    0xDDu8 => '\u{279D}',
    0xDEu8 => '\u{279E}',
    0xDFu8 => '\u{279F}',
    0xE0u8 => '\u{27A0}',
    0xE1u8 => '\u{27A1}',
    0xE2u8 => '\u{27A2}',
    0xE3u8 => '\u{27A3}',
    0xE4u8 => '\u{27A4}',
    0xE5u8 => '\u{27A5}',
    0xE6u8 => '\u{27A6}',
    0xE7u8 => '\u{27A7}',
    0xE8u8 => '\u{27A8}',
    0xE9u8 => '\u{27A9}',
    0xEAu8 => '\u{27AA}',
    0xEBu8 => '\u{27AB}',
    0xECu8 => '\u{27AC}',
    0xEDu8 => '\u{27AD}',
    0xEEu8 => '\u{27AE}',
    0xEFu8 => '\u{27AF}',
    0xF1u8 => '\u{27B1}',
    0xF2u8 => '\u{27B2}',
    0xF3u8 => '\u{27B3}',
    0xF4u8 => '\u{27B4}',
    0xF5u8 => '\u{27B5}',
    0xF6u8 => '\u{27B6}',
    0xF7u8 => '\u{27B7}',
    0xF8u8 => '\u{27B8}',
    0xF9u8 => '\u{27B9}',
    0xFAu8 => '\u{27BA}',
    0xFBu8 => '\u{27BB}',
    0xFCu8 => '\u{27BC}',
    0xFDu8 => '\u{27BD}',
    0xFEu8 => '\u{27BE}',
};
