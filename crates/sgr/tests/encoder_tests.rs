//! Tests for encoding runs back to SGR text.

use sgr::{ParseOptions, StyledRun, TextStyle, encode, parse};

fn round_trip(input: &str) -> String {
    encode(&parse(input, &ParseOptions::default()).unwrap())
}

/// Make escape bytes visible in snapshots.
fn visible(text: &str) -> String {
    text.replace('\x1b', "␛")
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn round_trip_plain_text() {
    for input in ["Hello World", "  ", "😀👩🏽‍🔧", "[0;37m", ""] {
        assert_eq!(round_trip(input), input);
    }
}

#[test]
fn round_trip_legacy_colors() {
    let inputs = [
        "\x1b[0;31mHello World\x1b[0m",
        "\x1b[0;1;34mBlue\x1b[0m",
        "\x1b[0;2;32m👩🏽‍🔧\x1b[0m",
        "\x1b[0;47mbg\x1b[0m",
        "\x1b[0;1;37;44mwhite on navy\x1b[0m",
        "\x1b[0;92mbright\x1b[0m",
        "\x1b[0;97;100mbright both\x1b[0m",
        "\x1b[0;91;41mX\x1b[0m",
        "\x1b[0;31;104mX\x1b[0m",
        "\x1b[0;1;91;42mX\x1b[0m",
        "This is great!\x1b[0;30mHello World\x1b[0m \x1b[0;31mHello World\x1b[0m",
    ];
    for input in inputs {
        assert_eq!(round_trip(input), input);
    }
}

#[test]
fn round_trip_256_colors() {
    let inputs = [
        "\x1b[0;38;5;255mGrey93\x1b[0m\x1b[0;38;5;128mDarkViolet\x1b[0m",
        "\x1b[0;1;48;5;255mGrey93\x1b[0m",
        "\x1b[0;3;38;5;16;48;5;231mcube\x1b[0m",
    ];
    for input in inputs {
        assert_eq!(round_trip(input), input);
    }
}

#[test]
fn round_trip_true_color() {
    let inputs = [
        "\x1b[0;38;2;255;0;0mRed\x1b[0mI am plain text\x1b[0;38;2;0;255;0mGreen\x1b[0m",
        "\x1b[0;48;2;1;2;3mbg\x1b[0m",
        "\x1b[0;4;9;38;2;10;20;30;48;2;40;50;60mboth\x1b[0m",
    ];
    for input in inputs {
        assert_eq!(round_trip(input), input);
    }
}

#[test]
fn round_trip_every_flag_combination() {
    let codes = ["1", "2", "3", "4", "5", "7", "8", "9"];
    for mask in 1u32..(1 << codes.len()) {
        let params: Vec<&str> = codes
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, code)| *code)
            .collect();
        for color in ["", ";35", ";38;5;99", ";38;2;7;8;9"] {
            let input = format!("\x1b[0;{}{}mx\x1b[0m", params.join(";"), color);
            assert_eq!(round_trip(&input), input);
        }
    }
}

// ============================================================================
// Canonical Form
// ============================================================================

#[test]
fn encode_canonicalizes_sequences() {
    let encoded = round_trip("\x1b[1;31mRed\x1b[34mBlue\x1b[0m plain");
    insta::assert_snapshot!(visible(&encoded), @"␛[0;1;31mRed␛[0m␛[0;1;34mBlue␛[0m plain");
}

#[test]
fn encode_padded_codes() {
    let encoded = round_trip("\x1b[001;031mX\x1b[m");
    insta::assert_snapshot!(visible(&encoded), @"␛[0;1;31mX␛[0m");
}

#[test]
fn encode_default_color_codes() {
    let encoded = round_trip("\x1b[39;49mX");
    insta::assert_snapshot!(visible(&encoded), @"␛[0;37;40mX␛[0m");
}

#[test]
fn encode_built_runs() {
    let runs = [
        StyledRun::plain("a"),
        StyledRun::plain("b").with_style(TextStyle::UNDERLINE),
    ];
    assert_eq!(encode(&runs), "a\x1b[0;4mb\x1b[0m");
    assert_eq!(encode(&[]), "");
}
