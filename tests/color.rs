use std::io::Cursor;

use tint::palette::{self, PRIMARY};
use tint::serialize::{ChannelSerializer, Rgba8888Serializer, SerializeError, Serializer};
use tint::{Color, InvalidInput, parse_color};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn hover_and_pressed_states_for_a_button() {
    init_logging();

    let base = PRIMARY;
    let hover = base.lighter(0.15).unwrap();
    let pressed = base.darker(0.15).unwrap();

    assert!(hover.brightness() > base.brightness());
    assert!(pressed.brightness() < base.brightness());
    assert_eq!(hover.alpha(), 1.0);
    assert_eq!(pressed.alpha(), 1.0);
}

#[test]
fn disabled_state_keeps_translucency() {
    init_logging();

    let ghost = palette::DANGER.with_alpha(0.4).unwrap();
    let disabled = ghost.desaturated(0.8).unwrap();

    assert_eq!(disabled.alpha(), 0.4);
    let (_, s_before, _) = ghost.to_hsl();
    let (_, s_after, _) = disabled.to_hsl();
    assert!(s_after < s_before);
}

#[test]
fn text_input_goes_through_one_parser() {
    init_logging();

    let from_hex = parse_color("#57F287").unwrap();
    let from_rgb = parse_color("rgb(87, 242, 135)").unwrap();
    assert_eq!(from_hex, from_rgb);
    assert_eq!(from_hex, palette::SUCCESS);

    assert!(matches!(parse_color("#57F28"), Err(InvalidInput::HexLength(6))));
}

#[test]
fn streams_carry_several_colors() {
    init_logging();

    let colors = [palette::GREY, palette::NITRO, palette::NONE];
    let mut buf = Vec::new();
    for c in &colors {
        Rgba8888Serializer.write(&mut buf, c).unwrap();
        ChannelSerializer.write(&mut buf, c).unwrap();
    }

    let mut cursor = Cursor::new(buf);
    for c in &colors {
        assert_eq!(&Rgba8888Serializer.read(&mut cursor).unwrap(), c);
        assert_eq!(&ChannelSerializer.read(&mut cursor).unwrap(), c);
    }

    assert!(matches!(
        Rgba8888Serializer.read(&mut cursor),
        Err(SerializeError::Io(_))
    ));
}

#[test]
fn hsl_wheel_walk_stays_valid() {
    init_logging();

    let mut c = Color::from_hsl(0.0, 0.7, 0.45).unwrap();
    for _ in 0..36 {
        let (h, s, l) = c.to_hsl();
        c = Color::from_hsl(h + 10.0, s, l).unwrap();
        assert!((0.0..=1.0).contains(&c.red()));
        assert!((0.0..=1.0).contains(&c.green()));
        assert!((0.0..=1.0).contains(&c.blue()));
    }

    let (h, _, _) = c.to_hsl();
    assert!(h < 1e-6 || (360.0 - h) < 1e-6);
}
